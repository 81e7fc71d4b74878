//! Articles of association parameters.
//!
//! A parallel record, partially overlapping the agreement, consumed only by
//! the articles-of-association projector. Defaults mirror the wizard's
//! articles step.

use serde::{Deserialize, Serialize};

/// Legal form for the articles (adds companies limited by guarantee).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AoaCompanyType {
    #[serde(rename = "llc")]
    Llc,
    #[serde(rename = "corporation")]
    Corporation,
    #[serde(rename = "partnership")]
    Partnership,
    #[serde(rename = "guarantee")]
    Guarantee,
}

impl AoaCompanyType {
    /// Guarantee companies have no share capital article.
    pub fn has_share_capital(&self) -> bool {
        !matches!(self, AoaCompanyType::Guarantee)
    }
}

/// Dividend policy adopted in the articles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DividendPolicy {
    #[default]
    #[serde(rename = "directors_discretion")]
    DirectorsDiscretion,
    #[serde(rename = "mandatory_distribution")]
    MandatoryDistribution,
    #[serde(rename = "shariah_compliant")]
    ShariahCompliant,
}

/// Share transfer restriction adopted in the articles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AoaTransferRestrictions {
    #[serde(rename = "none")]
    NoRestrictions,
    #[default]
    #[serde(rename = "directors_approval")]
    DirectorsApproval,
    #[serde(rename = "members_approval")]
    MembersApproval,
    #[serde(rename = "right_of_first_refusal")]
    RightOfFirstRefusal,
}

/// Dispute resolution adopted in the articles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AoaDisputeResolution {
    #[default]
    #[serde(rename = "mediation")]
    Mediation,
    #[serde(rename = "arbitration")]
    Arbitration,
    #[serde(rename = "hybrid")]
    Hybrid,
    #[serde(rename = "litigation")]
    Litigation,
    #[serde(rename = "islamic_arbitration")]
    IslamicArbitration,
}

/// Whether the company's accounts must be audited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditRequirement {
    #[default]
    #[serde(rename = "exempt")]
    Exempt,
    #[serde(rename = "required")]
    Required,
    #[serde(rename = "members_decision")]
    MembersDecision,
}

/// Parameters for generating articles of association.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticlesParams {
    pub company_name: String,
    pub company_type: Option<AoaCompanyType>,
    pub share_capital: f64,
    pub share_value: f64,
    pub guarantee_amount: f64,
    pub director_quorum: u8,
    pub member_quorum: u8,
    pub financial_year: String,
    pub registered_office: String,
    pub dividend_policy: DividendPolicy,
    pub transfer_restrictions: AoaTransferRestrictions,
    pub pre_emption_rights: bool,
    pub drag_along_rights: bool,
    pub tag_along_rights: bool,
    pub bad_leaver_provisions: bool,
    pub dispute_resolution: AoaDisputeResolution,
    pub audit_requirement: AuditRequirement,
    pub additional_provisions: String,
}

impl ArticlesParams {
    /// Number of ordinary shares the capital divides into.
    ///
    /// Zero-valued shares yield zero rather than dividing by zero.
    pub fn share_count(&self) -> f64 {
        if self.share_value == 0.0 {
            return 0.0;
        }
        self.share_capital / self.share_value
    }
}

impl Default for ArticlesParams {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            company_type: None,
            share_capital: 10_000.0,
            share_value: 1.0,
            guarantee_amount: 1.0,
            director_quorum: 2,
            member_quorum: 2,
            financial_year: "31 December".to_string(),
            registered_office: String::new(),
            dividend_policy: DividendPolicy::DirectorsDiscretion,
            transfer_restrictions: AoaTransferRestrictions::DirectorsApproval,
            pre_emption_rights: true,
            drag_along_rights: true,
            tag_along_rights: true,
            bad_leaver_provisions: true,
            dispute_resolution: AoaDisputeResolution::Mediation,
            audit_requirement: AuditRequirement::Exempt,
            additional_provisions: String::new(),
        }
    }
}
