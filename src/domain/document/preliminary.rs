//! Preliminary co-founder agreement projector.
//!
//! A one-pass summary of the accumulated record: short labels instead of
//! full clauses, two pages, one signature line per founder.

use chrono::NaiveDate;

use crate::domain::agreement::{AgreementRecord, EquityDistribution};
use crate::domain::foundation::EquityPercent;

use super::prose;
use super::{DocumentBuilder, InstructionSequence};

/// Projects the record into the preliminary agreement.
///
/// Pure and deterministic: the same record and date always yield the same
/// instruction sequence.
pub fn project(record: &AgreementRecord, generated_on: NaiveDate) -> InstructionSequence {
    let mut doc = DocumentBuilder::new();

    doc.heading("CO-FOUNDER AGREEMENT");
    doc.paragraph(format!("Date: {}", prose::format_date(generated_on)));

    doc.heading("1. COMPANY INFORMATION");
    doc.paragraph(format!("Company Name: {}", record.company.company_name));
    doc.paragraph(format!(
        "Company Type: {}",
        prose::company_type_label(record.company.company_type)
    ));

    doc.heading("2. FOUNDERS");
    doc.table(
        vec!["Name".to_string(), "Email".to_string(), "Role".to_string()],
        record
            .founders()
            .iter()
            .map(|f| vec![f.name.clone(), f.email.clone(), f.role.clone()])
            .collect(),
    );

    doc.heading("3. EQUITY DISTRIBUTION");
    doc.paragraph(format!(
        "Distribution Type: {}",
        match record.equity.distribution {
            EquityDistribution::Equal => "Equal Distribution",
            EquityDistribution::Custom => "Custom Distribution",
        }
    ));
    // Derived fresh from the record; equal shares are 100/N per founder.
    let equity_rows: Vec<Vec<String>> = match record.equity.distribution {
        EquityDistribution::Equal => {
            let share = EquityPercent::equal_share(record.founders().len());
            record
                .founders()
                .iter()
                .map(|f| vec![f.name.clone(), share.to_string()])
                .collect()
        }
        EquityDistribution::Custom => record
            .equity
            .custom
            .iter()
            .map(|c| vec![c.name.clone(), c.equity.to_string()])
            .collect(),
    };
    doc.table(
        vec!["Founder".to_string(), "Equity Percentage".to_string()],
        equity_rows,
    );

    doc.heading("4. VESTING SCHEDULE");
    doc.paragraph(format!(
        "Vesting Type: {}",
        prose::vesting_schedule_label(record.vesting.schedule)
    ));
    doc.paragraph(format!(
        "Vesting Period: {} years",
        record.vesting.period_years
    ));
    doc.paragraph(format!(
        "Cliff Period: {} {}",
        record.vesting.cliff_years,
        if record.vesting.cliff_years == 1 {
            "year"
        } else {
            "years"
        }
    ));

    doc.heading("5. ROLES & DECISION MAKING");
    doc.paragraph(format!(
        "Decision Making Process: {}",
        prose::decision_making_label(record.roles.decision_making)
    ));

    doc.page_break();

    doc.heading("6. EXIT STRATEGY");
    doc.paragraph(format!(
        "Exit Strategy: {}",
        prose::exit_strategy_label(&record.transfer)
    ));
    doc.paragraph(format!(
        "Valuation Method: {}",
        prose::valuation_method_label(record.transfer.valuation_method)
    ));

    doc.heading("7. DISPUTE RESOLUTION");
    doc.paragraph(format!(
        "Dispute Resolution Method: {}",
        prose::dispute_resolution_label(record.dispute.resolution_method)
    ));

    doc.heading("8. INTELLECTUAL PROPERTY");
    doc.paragraph(format!(
        "IP Ownership: {}",
        prose::ip_rights_label(record.ip.ip_rights)
    ));

    doc.heading("9. SIGNATURES");
    for founder in record.founders() {
        doc.signature_line(founder.name.clone());
    }

    doc.paragraph_wrapped(
        "LEGAL DISCLAIMER: This document is provided as a template and is not a substitute for \
         legal advice.",
        170,
    );

    doc.finish()
}
