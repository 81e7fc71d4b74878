//! Wizard step identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The twelve wizard steps, in no particular order here; ordering lives in
/// `StepSequence`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    #[serde(rename = "basic-info")]
    BasicInfo,
    #[serde(rename = "company-formation")]
    CompanyFormation,
    #[serde(rename = "equity")]
    Equity,
    #[serde(rename = "roles")]
    Roles,
    #[serde(rename = "vesting")]
    Vesting,
    #[serde(rename = "capital")]
    Capital,
    #[serde(rename = "compensation")]
    Compensation,
    #[serde(rename = "ip")]
    IpConfidentiality,
    #[serde(rename = "transfer")]
    TransferExit,
    #[serde(rename = "dispute")]
    DisputeMisc,
    #[serde(rename = "review")]
    Review,
    #[serde(rename = "aoa")]
    Articles,
}

impl WizardStep {
    /// Stable step identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "basic-info",
            WizardStep::CompanyFormation => "company-formation",
            WizardStep::Equity => "equity",
            WizardStep::Roles => "roles",
            WizardStep::Vesting => "vesting",
            WizardStep::Capital => "capital",
            WizardStep::Compensation => "compensation",
            WizardStep::IpConfidentiality => "ip",
            WizardStep::TransferExit => "transfer",
            WizardStep::DisputeMisc => "dispute",
            WizardStep::Review => "review",
            WizardStep::Articles => "aoa",
        }
    }

    /// Human-readable step title.
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Basic Info",
            WizardStep::CompanyFormation => "Company Formation",
            WizardStep::Equity => "Equity",
            WizardStep::Roles => "Roles & Responsibilities",
            WizardStep::Vesting => "Vesting",
            WizardStep::Capital => "Capital",
            WizardStep::Compensation => "Compensation",
            WizardStep::IpConfidentiality => "IP & Confidentiality",
            WizardStep::TransferExit => "Transfer & Exit",
            WizardStep::DisputeMisc => "Dispute & Misc",
            WizardStep::Review => "Review",
            WizardStep::Articles => "Articles",
        }
    }

    /// Short description shown under the step title.
    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Founder details",
            WizardStep::CompanyFormation => "Company details",
            WizardStep::Equity => "Ownership distribution",
            WizardStep::Roles => "Detailed roles",
            WizardStep::Vesting => "Equity vesting schedule",
            WizardStep::Capital => "Initial contributions",
            WizardStep::Compensation => "Salary and benefits",
            WizardStep::IpConfidentiality => "Intellectual property",
            WizardStep::TransferExit => "Share transfers",
            WizardStep::DisputeMisc => "Legal provisions",
            WizardStep::Review => "Review agreement",
            WizardStep::Articles => "Articles of Association",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_ids_are_stable() {
        assert_eq!(WizardStep::BasicInfo.as_str(), "basic-info");
        assert_eq!(WizardStep::Articles.as_str(), "aoa");
    }

    #[test]
    fn step_serializes_as_id() {
        assert_eq!(
            serde_json::to_string(&WizardStep::IpConfidentiality).unwrap(),
            "\"ip\""
        );
    }
}
