//! Compensation and benefits section.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Benefit options offered in the compensation step.
pub static BENEFIT_OPTIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "Health Insurance",
        "Dental Insurance",
        "Vision Insurance",
        "Life Insurance",
        "Disability Insurance",
        "Retirement Plan",
        "Paid Time Off",
        "Parental Leave",
        "Stock Options",
        "Professional Development",
    ]
});

/// How often a founder's salary is reviewed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalaryReviewPeriod {
    #[serde(rename = "monthly")]
    Monthly,
    #[serde(rename = "quarterly")]
    Quarterly,
    #[serde(rename = "semi-annual")]
    SemiAnnual,
    #[default]
    #[serde(rename = "annual")]
    Annual,
    #[serde(rename = "milestone")]
    Milestone,
}

impl SalaryReviewPeriod {
    /// The raw form value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryReviewPeriod::Monthly => "monthly",
            SalaryReviewPeriod::Quarterly => "quarterly",
            SalaryReviewPeriod::SemiAnnual => "semi-annual",
            SalaryReviewPeriod::Annual => "annual",
            SalaryReviewPeriod::Milestone => "milestone",
        }
    }
}

/// One founder's compensation terms, parallel to the founder list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Compensation {
    pub founder_index: usize,
    pub salary: f64,
    pub review_period: SalaryReviewPeriod,
    pub bonus_structure: String,
    pub benefits: Vec<String>,
    pub other_compensation: String,
}

/// Compensation section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompensationPlan {
    pub compensations: Vec<Compensation>,
    pub expense_policy: String,
    pub compensation_review_process: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_period_defaults_to_annual() {
        assert_eq!(SalaryReviewPeriod::default(), SalaryReviewPeriod::Annual);
    }

    #[test]
    fn semi_annual_keeps_hyphenated_form_value() {
        assert_eq!(
            serde_json::to_string(&SalaryReviewPeriod::SemiAnnual).unwrap(),
            "\"semi-annual\""
        );
    }

    #[test]
    fn benefit_catalog_is_stable() {
        assert_eq!(BENEFIT_OPTIONS.len(), 10);
        assert!(BENEFIT_OPTIONS.contains(&"Stock Options"));
    }
}
