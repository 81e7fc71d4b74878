//! Employee record for employment-contract generation.
//!
//! A standalone record: employment contracts are generated per person and
//! do not read from the agreement aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Contract variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractKind {
    #[default]
    #[serde(rename = "standard")]
    Standard,
    /// Islamic service-lease contract following AAOIFI Shariah Standard No. 9.
    #[serde(rename = "ijarah")]
    Ijarah,
}

/// Hourly or salaried compensation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CompensationTerms {
    #[serde(rename = "hourly")]
    Hourly {
        rate: f64,
        hours_per_week: Option<u32>,
    },
    #[serde(rename = "salary")]
    Salary { amount: f64 },
}

impl Default for CompensationTerms {
    fn default() -> Self {
        CompensationTerms::Salary { amount: 0.0 }
    }
}

/// Expected work quality on a 0-10 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpectedQuality(u8);

impl ExpectedQuality {
    /// Creates an ExpectedQuality, returning an error if over 10.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 10 {
            return Err(ValidationError::out_of_range(
                "expected_quality",
                0.0,
                10.0,
                value as f64,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw rating.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Prose description of the expectation band.
    pub fn description(&self) -> &'static str {
        if self.0 >= 9 {
            "Exceptional quality expected. Work must be of the highest standard with minimal supervision."
        } else if self.0 >= 7 {
            "High quality expected. Work should exceed standard requirements with occasional supervision."
        } else if self.0 >= 5 {
            "Good quality expected. Work should meet all standard requirements with regular supervision."
        } else {
            "Acceptable quality expected. Work should meet basic requirements with close supervision."
        }
    }
}

/// The record an employment contract is generated from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub employer: String,
    pub full_name: String,
    pub role: String,
    pub department: String,
    pub start_date: String,
    /// Empty means an indefinite engagement.
    pub end_date: String,
    pub compensation: CompensationTerms,
    pub expected_quality: ExpectedQuality,
    pub years_experience: u8,
    pub skills: Vec<String>,
    pub reporting_manager: String,
    pub contract_kind: ContractKind,
    pub additional_terms: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_rejects_values_over_ten() {
        assert!(ExpectedQuality::try_new(11).is_err());
        assert!(ExpectedQuality::try_new(10).is_ok());
        assert!(ExpectedQuality::try_new(0).is_ok());
    }

    #[test]
    fn quality_bands_cover_the_scale() {
        assert!(ExpectedQuality::try_new(9)
            .unwrap()
            .description()
            .starts_with("Exceptional"));
        assert!(ExpectedQuality::try_new(7)
            .unwrap()
            .description()
            .starts_with("High"));
        assert!(ExpectedQuality::try_new(5)
            .unwrap()
            .description()
            .starts_with("Good"));
        assert!(ExpectedQuality::try_new(4)
            .unwrap()
            .description()
            .starts_with("Acceptable"));
    }

    #[test]
    fn compensation_serializes_with_type_tag() {
        let hourly = CompensationTerms::Hourly {
            rate: 45.0,
            hours_per_week: Some(40),
        };
        let json = serde_json::to_value(&hourly).unwrap();
        assert_eq!(json["type"], "hourly");

        let salary = CompensationTerms::Salary { amount: 95_000.0 };
        let json = serde_json::to_value(&salary).unwrap();
        assert_eq!(json["type"], "salary");
    }
}
