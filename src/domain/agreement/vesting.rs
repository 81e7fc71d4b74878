//! Vesting plan section.

use serde::{Deserialize, Serialize};

/// How equity becomes non-forfeitable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VestingSchedule {
    #[default]
    #[serde(rename = "standard")]
    Standard,
    #[serde(rename = "milestone")]
    Milestone,
    #[serde(rename = "hybrid")]
    Hybrid,
}

/// Vesting section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VestingPlan {
    pub schedule: VestingSchedule,
    pub period_years: u8,
    pub cliff_years: u8,
}

impl Default for VestingPlan {
    fn default() -> Self {
        Self {
            schedule: VestingSchedule::Standard,
            period_years: 4,
            cliff_years: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_four_year_standard_with_one_year_cliff() {
        let plan = VestingPlan::default();
        assert_eq!(plan.schedule, VestingSchedule::Standard);
        assert_eq!(plan.period_years, 4);
        assert_eq!(plan.cliff_years, 1);
    }
}
