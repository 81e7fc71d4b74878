//! Equity percentage value object (0-100 scale, fractional).
//!
//! Equity is entered through sliders with 0.1-point steps, so an allocation
//! rarely lands on exactly 100.0 in floating point. Sum checks therefore
//! use a small tolerance rather than exact equality.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Tolerance used when checking that custom equity percentages sum to 100.
pub const EQUITY_SUM_TOLERANCE: f64 = 0.05;

/// A fractional percentage between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EquityPercent(f64);

impl EquityPercent {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100.0);

    /// Creates a new EquityPercent, clamping to the valid range.
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 100.0))
    }

    /// Creates an EquityPercent, returning an error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::out_of_range("equity", 0.0, 100.0, value));
        }
        Ok(Self(value))
    }

    /// The equal share for a founder count: 100 / N.
    ///
    /// Returns zero for an empty founder list so callers never divide by zero.
    pub fn equal_share(founder_count: usize) -> Self {
        if founder_count == 0 {
            return Self::ZERO;
        }
        Self(100.0 / founder_count as f64)
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Sums a sequence of percentages.
    pub fn sum<I: IntoIterator<Item = Self>>(values: I) -> f64 {
        values.into_iter().map(|p| p.0).sum()
    }

    /// Whether a summed total counts as a full 100% allocation.
    pub fn is_full_allocation(total: f64) -> bool {
        (total - 100.0).abs() <= EQUITY_SUM_TOLERANCE
    }
}

impl fmt::Display for EquityPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // One decimal place everywhere equity is rendered.
        write!(f, "{:.1}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_range() {
        assert_eq!(EquityPercent::new(150.0).value(), 100.0);
        assert_eq!(EquityPercent::new(-5.0).value(), 0.0);
        assert_eq!(EquityPercent::new(33.3).value(), 33.3);
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(EquityPercent::try_new(100.1).is_err());
        assert!(EquityPercent::try_new(-0.1).is_err());
        assert!(EquityPercent::try_new(0.0).is_ok());
        assert!(EquityPercent::try_new(100.0).is_ok());
    }

    #[test]
    fn equal_share_divides_hundred() {
        assert_eq!(EquityPercent::equal_share(2).value(), 50.0);
        assert_eq!(EquityPercent::equal_share(4).value(), 25.0);
        assert_eq!(EquityPercent::equal_share(1).value(), 100.0);
    }

    #[test]
    fn equal_share_of_zero_founders_is_zero() {
        assert_eq!(EquityPercent::equal_share(0).value(), 0.0);
    }

    #[test]
    fn displays_one_decimal_place() {
        assert_eq!(format!("{}", EquityPercent::equal_share(3)), "33.3%");
        assert_eq!(format!("{}", EquityPercent::new(50.0)), "50.0%");
    }

    #[test]
    fn full_allocation_tolerates_slider_drift() {
        assert!(EquityPercent::is_full_allocation(100.0));
        assert!(EquityPercent::is_full_allocation(99.96));
        assert!(EquityPercent::is_full_allocation(100.04));
        assert!(!EquityPercent::is_full_allocation(99.9));
        assert!(!EquityPercent::is_full_allocation(100.2));
    }

    #[test]
    fn sum_adds_values() {
        let total = EquityPercent::sum([
            EquityPercent::new(25.0),
            EquityPercent::new(25.0),
            EquityPercent::new(50.0),
        ]);
        assert!(EquityPercent::is_full_allocation(total));
    }
}
