//! Roles and decision-making section.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Decision areas a founder can own.
pub static DECISION_AREAS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "Product Development",
        "Marketing Strategy",
        "Sales",
        "Financial Management",
        "Hiring/HR",
        "Strategic Partnerships",
        "Fundraising",
        "Legal/Compliance",
        "Technology Infrastructure",
        "Customer Support",
    ]
});

/// How company decisions are approved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionMaking {
    #[default]
    #[serde(rename = "majority")]
    Majority,
    #[serde(rename = "supermajority")]
    Supermajority,
    #[serde(rename = "unanimous")]
    Unanimous,
    #[serde(rename = "weighted")]
    Weighted,
    #[serde(rename = "ceo")]
    CeoDecides,
}

/// Detailed role assignment for one founder, parallel to the founder list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FounderRole {
    pub title: String,
    pub responsibilities: String,
    pub decision_areas: Vec<String>,
    pub time_commitment: String,
}

/// Roles section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RolePlan {
    pub decision_making: DecisionMaking,
    pub founder_roles: Vec<FounderRole>,
    pub amendment_process: String,
}
