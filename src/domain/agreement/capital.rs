//! Capital contributions section.

use serde::{Deserialize, Serialize};

/// What a founder is contributing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContributionKind {
    #[default]
    #[serde(rename = "cash")]
    Cash,
    #[serde(rename = "asset")]
    Asset,
    #[serde(rename = "ip")]
    IntellectualProperty,
    #[serde(rename = "service")]
    Service,
    #[serde(rename = "other")]
    Other,
}

impl ContributionKind {
    /// Non-cash contributions need an explicit valuation method.
    pub fn requires_valuation(&self) -> bool {
        !matches!(self, ContributionKind::Cash)
    }

    /// The raw form value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContributionKind::Cash => "cash",
            ContributionKind::Asset => "asset",
            ContributionKind::IntellectualProperty => "ip",
            ContributionKind::Service => "service",
            ContributionKind::Other => "other",
        }
    }
}

/// One founder's contribution toward the initial capital.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub founder_index: usize,
    pub kind: ContributionKind,
    pub description: String,
    pub value: f64,
    pub valuation_method: String,
}

/// Capital section.
///
/// Invariant (enforced by the capital step gate, not here): the sum of
/// contribution values equals `initial_capital` exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapitalPlan {
    pub initial_capital: f64,
    pub contributions: Vec<Contribution>,
}

impl CapitalPlan {
    /// Sum of all contribution values.
    pub fn total_contributions(&self) -> f64 {
        self.contributions.iter().map(|c| c.value).sum()
    }

    /// Whether the declared initial capital is fully covered.
    pub fn is_balanced(&self) -> bool {
        self.total_contributions() == self.initial_capital
    }

    /// Contributions that are not cash.
    pub fn non_cash_contributions(&self) -> impl Iterator<Item = &Contribution> {
        self.contributions
            .iter()
            .filter(|c| c.kind.requires_valuation())
    }
}
