//! Equity plan section.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::EquityPercent;

/// How ownership is split among founders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquityDistribution {
    #[default]
    #[serde(rename = "equal")]
    Equal,
    #[serde(rename = "custom")]
    Custom,
}

/// One founder's explicit share under a custom distribution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomEquity {
    pub name: String,
    pub equity: EquityPercent,
}

/// Equity plan section.
///
/// Under `Equal` distribution the per-founder share is derived as 100/N at
/// projection time; `custom` entries are only consulted for `Custom`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquityPlan {
    pub distribution: EquityDistribution,
    pub custom: Vec<CustomEquity>,
}

impl EquityPlan {
    /// Sum of the custom percentages.
    pub fn custom_total(&self) -> f64 {
        EquityPercent::sum(self.custom.iter().map(|c| c.equity))
    }

    /// Whether the plan represents a complete allocation.
    ///
    /// Equal distribution always allocates fully; custom must sum to 100
    /// within the slider tolerance.
    pub fn is_fully_allocated(&self) -> bool {
        match self.distribution {
            EquityDistribution::Equal => true,
            EquityDistribution::Custom => EquityPercent::is_full_allocation(self.custom_total()),
        }
    }
}
