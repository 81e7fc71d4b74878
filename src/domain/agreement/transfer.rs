//! Share transfer and exit section.

use serde::{Deserialize, Serialize};

/// Baseline restriction on share transfers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferRestriction {
    #[serde(rename = "none")]
    NoRestrictions,
    #[serde(rename = "board_approval")]
    BoardApproval,
    #[default]
    #[serde(rename = "all_founders")]
    AllFounders,
    #[serde(rename = "complete_restriction")]
    CompleteRestriction,
}

/// How the company is valued for buy-outs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValuationMethod {
    #[serde(rename = "multiple")]
    RevenueMultiple,
    #[default]
    #[serde(rename = "appraisal")]
    IndependentAppraisal,
    #[serde(rename = "formula")]
    PredeterminedFormula,
    #[serde(rename = "bookValue")]
    BookValue,
    #[serde(rename = "lastRound")]
    LastFinancingRound,
}

/// Transfer and exit section.
///
/// The four protective-clause booleans each toggle an optional sub-clause
/// in the comprehensive agreement; sub-clause numbers are assigned
/// contiguously in the field order below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferExitTerms {
    pub restriction_level: TransferRestriction,
    pub right_of_first_refusal: bool,
    pub tag_along: bool,
    pub drag_along: bool,
    pub shotgun_clause: bool,
    pub valuation_method: ValuationMethod,
    pub exit_events: String,
    pub dissolution_process: String,
}

impl Default for TransferExitTerms {
    fn default() -> Self {
        Self {
            restriction_level: TransferRestriction::AllFounders,
            right_of_first_refusal: true,
            tag_along: true,
            drag_along: true,
            shotgun_clause: false,
            valuation_method: ValuationMethod::IndependentAppraisal,
            exit_events: String::new(),
            dissolution_process: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_wizard_initial_state() {
        let terms = TransferExitTerms::default();
        assert!(terms.right_of_first_refusal);
        assert!(terms.tag_along);
        assert!(terms.drag_along);
        assert!(!terms.shotgun_clause);
        assert_eq!(terms.restriction_level, TransferRestriction::AllFounders);
        assert_eq!(
            terms.valuation_method,
            ValuationMethod::IndependentAppraisal
        );
    }

    #[test]
    fn valuation_method_keeps_camel_case_form_values() {
        assert_eq!(
            serde_json::to_string(&ValuationMethod::BookValue).unwrap(),
            "\"bookValue\""
        );
        assert_eq!(
            serde_json::to_string(&ValuationMethod::LastFinancingRound).unwrap(),
            "\"lastRound\""
        );
    }
}
