//! Error types for the domain layer.

use thiserror::Error;

/// Errors that block a wizard step from advancing.
///
/// These are advisory: step gates collect them into a list for the UI to
/// surface as disabled affordances. Nothing in the domain throws them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("'{field}' entries must sum to {expected}, got {actual}")]
    SumMismatch {
        field: String,
        expected: f64,
        actual: f64,
    },

    #[error("Field '{field}' references founder #{index}, but only {count} founders exist")]
    UnknownFounder {
        field: String,
        index: usize,
        count: usize,
    },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a sum mismatch validation error.
    pub fn sum_mismatch(field: impl Into<String>, expected: f64, actual: f64) -> Self {
        ValidationError::SumMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Creates an unknown founder reference error.
    pub fn unknown_founder(field: impl Into<String>, index: usize, count: usize) -> Self {
        ValidationError::UnknownFounder {
            field: field.into(),
            index,
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_displays_correctly() {
        let err = ValidationError::empty_field("companyName");
        assert_eq!(format!("{}", err), "Field 'companyName' cannot be empty");
    }

    #[test]
    fn sum_mismatch_displays_expected_and_actual() {
        let err = ValidationError::sum_mismatch("contributions", 10000.0, 7500.0);
        let text = format!("{}", err);
        assert!(text.contains("10000"));
        assert!(text.contains("7500"));
    }

    #[test]
    fn unknown_founder_displays_index_and_count() {
        let err = ValidationError::unknown_founder("contribution.founderIndex", 4, 2);
        let text = format!("{}", err);
        assert!(text.contains("#4"));
        assert!(text.contains("2 founders"));
    }
}
