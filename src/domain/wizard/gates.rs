//! Per-step validation gates.
//!
//! Gates are advisory: each step refuses to advance until its blocker list
//! is empty, but nothing here is enforced by the record itself and nothing
//! throws. Failures surface as disabled affordances in the UI.

use crate::domain::agreement::AgreementRecord;
use crate::domain::foundation::ValidationError;

use super::{StepSequence, WizardStep};

/// Collects everything that blocks the given step from advancing.
///
/// An empty result means the step may advance.
pub fn blockers(step: WizardStep, record: &AgreementRecord) -> Vec<ValidationError> {
    match step {
        WizardStep::BasicInfo => basic_info_blockers(record),
        WizardStep::CompanyFormation => formation_blockers(record),
        WizardStep::Equity => equity_blockers(record),
        WizardStep::Capital => capital_blockers(record),
        WizardStep::IpConfidentiality => ip_blockers(record),
        // Roles, vesting, compensation, transfer and dispute carry defaults
        // for every choice field and have no cross-field numeric invariant.
        WizardStep::Roles
        | WizardStep::Vesting
        | WizardStep::Compensation
        | WizardStep::TransferExit
        | WizardStep::DisputeMisc => Vec::new(),
        // Review gathers every earlier gate; the articles step has none.
        WizardStep::Review => review_blockers(record),
        WizardStep::Articles => Vec::new(),
    }
}

/// True when the step's blocker list is empty.
pub fn step_is_complete(step: WizardStep, record: &AgreementRecord) -> bool {
    blockers(step, record).is_empty()
}

fn basic_info_blockers(record: &AgreementRecord) -> Vec<ValidationError> {
    let mut out = Vec::new();

    if record.company.company_name.trim().is_empty() {
        out.push(ValidationError::empty_field("companyName"));
    }
    if record.company.company_type.is_none() {
        out.push(ValidationError::empty_field("companyType"));
    }
    if record.founders().is_empty() {
        out.push(ValidationError::empty_field("founders"));
    }
    for (i, founder) in record.founders().iter().enumerate() {
        if founder.name.trim().is_empty() {
            out.push(ValidationError::empty_field(format!("founders[{}].name", i)));
        }
        if founder.email.trim().is_empty() {
            out.push(ValidationError::empty_field(format!(
                "founders[{}].email",
                i
            )));
        }
    }

    out
}

fn formation_blockers(record: &AgreementRecord) -> Vec<ValidationError> {
    let mut out = Vec::new();

    if record.formation.business_purpose.trim().is_empty() {
        out.push(ValidationError::empty_field("businessPurpose"));
    }
    if record.formation.registered_address.trim().is_empty() {
        out.push(ValidationError::empty_field("registeredAddress"));
    }
    if record.formation.jurisdiction.is_none() {
        out.push(ValidationError::empty_field("jurisdiction"));
    }

    out
}

fn equity_blockers(record: &AgreementRecord) -> Vec<ValidationError> {
    // Equal distribution is derived and always valid; custom must sum to
    // 100 within the slider tolerance.
    if record.equity.is_fully_allocated() {
        Vec::new()
    } else {
        vec![ValidationError::sum_mismatch(
            "customEquity",
            100.0,
            record.equity.custom_total(),
        )]
    }
}

fn capital_blockers(record: &AgreementRecord) -> Vec<ValidationError> {
    let mut out = Vec::new();
    let plan = &record.capital;

    if !plan.is_balanced() {
        out.push(ValidationError::sum_mismatch(
            "contributions",
            plan.initial_capital,
            plan.total_contributions(),
        ));
    }
    for (i, contribution) in plan.contributions.iter().enumerate() {
        if contribution.description.trim().is_empty() {
            out.push(ValidationError::empty_field(format!(
                "contributions[{}].description",
                i
            )));
        }
        if contribution.kind.requires_valuation()
            && contribution.valuation_method.trim().is_empty()
        {
            out.push(ValidationError::empty_field(format!(
                "contributions[{}].valuationMethod",
                i
            )));
        }
        if contribution.founder_index >= record.founders().len() {
            out.push(ValidationError::unknown_founder(
                format!("contributions[{}].founderIndex", i),
                contribution.founder_index,
                record.founders().len(),
            ));
        }
    }

    out
}

fn ip_blockers(record: &AgreementRecord) -> Vec<ValidationError> {
    let mut out = Vec::new();

    for (i, ip) in record.ip.pre_existing_ip.iter().enumerate() {
        if ip.description.trim().is_empty() {
            out.push(ValidationError::empty_field(format!(
                "preExistingIP[{}].description",
                i
            )));
        }
        if ip.ownership == crate::domain::agreement::IpOwnership::Licensed
            && ip.license_terms.trim().is_empty()
        {
            out.push(ValidationError::empty_field(format!(
                "preExistingIP[{}].licenseTerms",
                i
            )));
        }
    }

    out
}

fn review_blockers(record: &AgreementRecord) -> Vec<ValidationError> {
    StepSequence::all()
        .iter()
        .take_while(|&&step| step != WizardStep::Review)
        .flat_map(|&step| blockers(step, record))
        .collect()
}
