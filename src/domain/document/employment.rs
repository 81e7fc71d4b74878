//! Employment contract projector.
//!
//! Generated from a standalone EmployeeRecord. The ijarah variant adds an
//! AAOIFI compliance notice, a leasing-terms table, and a compliance
//! statement; everything else is shared with the standard variant.

use chrono::NaiveDate;

use crate::domain::agreement::{CompensationTerms, ContractKind, EmployeeRecord};

use super::prose::{self, fmt_amount};
use super::{DocumentBuilder, InstructionSequence};

/// Projects an employee record into an employment contract.
pub fn project(employee: &EmployeeRecord, generated_on: NaiveDate) -> InstructionSequence {
    let mut doc = DocumentBuilder::new();
    let ijarah = employee.contract_kind == ContractKind::Ijarah;

    doc.heading(if ijarah {
        "IJARAH EMPLOYMENT CONTRACT"
    } else {
        "EMPLOYMENT CONTRACT"
    });
    doc.paragraph(format!("Date: {}", prose::format_date(generated_on)));

    if ijarah {
        doc.paragraph(
            "This contract follows AAOIFI Shariah Standard No. 9: Ijarah and Ijarah Muntahia \
             Bittamleek",
        );
        doc.paragraph(
            "All terms and conditions are in compliance with Islamic finance principles.",
        );
    }

    doc.heading("CONTRACT PARTIES");
    doc.paragraph("This employment contract is made between:");
    doc.paragraph(format!("Employer: {}", employee.employer));
    doc.paragraph(format!("Employee: {}", employee.full_name));

    doc.heading("EMPLOYMENT DETAILS");
    doc.table(
        vec!["Item".to_string(), "Details".to_string()],
        vec![
            vec!["Position/Role".to_string(), employee.role.clone()],
            vec!["Department".to_string(), employee.department.clone()],
            vec!["Start Date".to_string(), employee.start_date.clone()],
            vec![
                "End Date".to_string(),
                if employee.end_date.is_empty() {
                    "Indefinite".to_string()
                } else {
                    employee.end_date.clone()
                },
            ],
            vec![
                "Reporting To".to_string(),
                employee.reporting_manager.clone(),
            ],
            vec![
                "Years of Experience".to_string(),
                employee.years_experience.to_string(),
            ],
        ],
    );

    doc.heading("COMPENSATION");
    let mut compensation_rows = match &employee.compensation {
        CompensationTerms::Hourly { rate, .. } => vec![
            vec!["Type".to_string(), "Hourly Rate".to_string()],
            vec!["Amount".to_string(), format!("${:.2} per hour", rate)],
        ],
        CompensationTerms::Salary { amount } => vec![
            vec!["Type".to_string(), "Annual Salary".to_string()],
            vec!["Amount".to_string(), format!("${:.2} per year", amount)],
        ],
    };
    if let CompensationTerms::Hourly {
        hours_per_week: Some(hours),
        ..
    } = &employee.compensation
    {
        compensation_rows.push(vec![
            "Hours per Week".to_string(),
            format!("{} hours", hours),
        ]);
    }
    doc.table(
        vec!["Item".to_string(), "Details".to_string()],
        compensation_rows,
    );

    doc.heading("SKILLS & QUALIFICATIONS");
    doc.table(
        vec!["Required Skills".to_string()],
        employee.skills.iter().map(|s| vec![s.clone()]).collect(),
    );

    doc.heading("QUALITY EXPECTATIONS");
    doc.table(
        vec!["Item".to_string(), "Details".to_string()],
        vec![
            vec![
                "Quality Rating".to_string(),
                format!("{}/10", employee.expected_quality.value()),
            ],
            vec![
                "Description".to_string(),
                employee.expected_quality.description().to_string(),
            ],
        ],
    );

    doc.page_break();

    if ijarah {
        doc.heading("IJARAH (ISLAMIC LEASING) TERMS");
        doc.table(
            vec!["Term".to_string(), "Details".to_string()],
            vec![
                vec![
                    "Contract Type".to_string(),
                    "Service Ijarah (Leasing of Services)".to_string(),
                ],
                vec![
                    "Lessor".to_string(),
                    "Employee (Service Provider)".to_string(),
                ],
                vec![
                    "Lessee".to_string(),
                    format!("{} (Service Recipient)", employee.employer),
                ],
                vec![
                    "Subject of Lease".to_string(),
                    format!("Professional services as {}", employee.role),
                ],
                vec![
                    "Ownership of Work".to_string(),
                    format!(
                        "All work product belongs to {} as per agreement",
                        employee.employer
                    ),
                ],
                vec![
                    "Maintenance".to_string(),
                    "Employee is responsible for maintaining their skills and qualifications"
                        .to_string(),
                ],
                vec![
                    "Early Termination".to_string(),
                    "Subject to mutual agreement with appropriate notice".to_string(),
                ],
            ],
        );
        doc.heading("AAOIFI COMPLIANCE STATEMENT");
        doc.paragraph(
            "This contract complies with AAOIFI Shariah Standard No. 9 on Ijarah. The agreement \
             clearly defines the service being leased, the duration, the compensation, and the \
             responsibilities of both parties. The contract avoids prohibited elements such as \
             excessive uncertainty (gharar), interest (riba), and gambling-like speculation \
             (maysir).",
        );
    }

    doc.heading("ADDITIONAL TERMS");
    doc.paragraph(if employee.additional_terms.is_empty() {
        "No additional terms specified.".to_string()
    } else {
        employee.additional_terms.clone()
    });

    doc.heading("SIGNATURES");
    doc.signature_line(format!("Employer: {}", employee.employer));
    doc.signature_line(format!("Employee: {}", employee.full_name));

    doc.paragraph_wrapped(
        "LEGAL DISCLAIMER: This document is provided as a template and is not a substitute for \
         legal advice. You should consult with an attorney before signing.",
        170,
    );

    doc.finish()
}

/// Hourly vs salaried wording used by summaries and previews.
pub fn compensation_summary(terms: &CompensationTerms) -> String {
    match terms {
        CompensationTerms::Hourly {
            rate,
            hours_per_week,
        } => match hours_per_week {
            Some(hours) => format!("${}/hour, {} hours/week", fmt_amount(*rate), hours),
            None => format!("${}/hour", fmt_amount(*rate)),
        },
        CompensationTerms::Salary { amount } => format!("${}/year", fmt_amount(*amount)),
    }
}
