//! Intellectual property and confidentiality section.

use serde::{Deserialize, Serialize};

/// Who owns IP created while working for the company.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IpRights {
    #[default]
    #[serde(rename = "company")]
    Company,
    #[serde(rename = "founder")]
    Founder,
    #[serde(rename = "mixed")]
    Mixed,
}

/// Disposition of IP a founder brings into the company.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IpOwnership {
    #[default]
    #[serde(rename = "retained")]
    Retained,
    #[serde(rename = "transferred")]
    Transferred,
    #[serde(rename = "licensed")]
    Licensed,
}

/// IP a founder owned before the agreement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreExistingIp {
    pub founder_index: usize,
    pub description: String,
    pub ownership: IpOwnership,
    /// Only meaningful when `ownership` is `Licensed`.
    pub license_terms: String,
}

/// IP and confidentiality section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpConfidentialityTerms {
    pub ip_rights: IpRights,
    pub pre_existing_ip: Vec<PreExistingIp>,
    pub confidentiality_term_years: u8,
    pub confidentiality_exclusions: String,
    pub non_compete_term_months: u8,
    pub non_compete_geographic: String,
    pub non_solicit_term_months: u8,
}

impl Default for IpConfidentialityTerms {
    fn default() -> Self {
        Self {
            ip_rights: IpRights::Company,
            pre_existing_ip: Vec::new(),
            confidentiality_term_years: 3,
            confidentiality_exclusions: String::new(),
            non_compete_term_months: 12,
            non_compete_geographic: String::new(),
            non_solicit_term_months: 12,
        }
    }
}
