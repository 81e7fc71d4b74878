//! Dispute resolution and miscellaneous legal terms section.

use serde::{Deserialize, Serialize};

/// How disputes between founders are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionMethod {
    #[serde(rename = "mediation")]
    Mediation,
    #[serde(rename = "arbitration")]
    Arbitration,
    #[default]
    #[serde(rename = "hybrid")]
    Hybrid,
    #[serde(rename = "litigation")]
    Litigation,
}

impl ResolutionMethod {
    /// Whether the agreement carries a mediation-provider sub-clause.
    pub fn includes_mediation(&self) -> bool {
        matches!(self, ResolutionMethod::Mediation | ResolutionMethod::Hybrid)
    }

    /// Whether the agreement carries an arbitration-provider sub-clause.
    pub fn includes_arbitration(&self) -> bool {
        matches!(
            self,
            ResolutionMethod::Arbitration | ResolutionMethod::Hybrid
        )
    }
}

/// How formal notices are delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeMethod {
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "certified_mail")]
    CertifiedMail,
    #[serde(rename = "personal_delivery")]
    PersonalDelivery,
    #[default]
    #[serde(rename = "multiple")]
    Multiple,
}

/// Governing-law jurisdiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoverningLaw {
    #[serde(rename = "delaware")]
    Delaware,
    #[serde(rename = "california")]
    California,
    #[serde(rename = "newyork")]
    NewYork,
    #[serde(rename = "uk")]
    UnitedKingdom,
    #[serde(rename = "singapore")]
    Singapore,
    #[serde(rename = "other")]
    Other,
}

/// Dispute and miscellaneous section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisputeMiscTerms {
    pub resolution_method: ResolutionMethod,
    pub mediation_provider: String,
    pub arbitration_provider: String,
    pub deadlock_resolution: String,
    pub notice_method: NoticeMethod,
    pub notice_address: String,
    pub severability: bool,
    pub entire_agreement: bool,
    pub governing_law: Option<GoverningLaw>,
    pub additional_terms: String,
}

impl Default for DisputeMiscTerms {
    fn default() -> Self {
        Self {
            resolution_method: ResolutionMethod::Hybrid,
            mediation_provider: String::new(),
            arbitration_provider: String::new(),
            deadlock_resolution: String::new(),
            notice_method: NoticeMethod::Multiple,
            notice_address: String::new(),
            severability: true,
            entire_agreement: true,
            governing_law: None,
            additional_terms: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hybrid_includes_both_providers() {
        assert!(ResolutionMethod::Hybrid.includes_mediation());
        assert!(ResolutionMethod::Hybrid.includes_arbitration());
    }

    #[test]
    fn litigation_includes_neither_provider() {
        assert!(!ResolutionMethod::Litigation.includes_mediation());
        assert!(!ResolutionMethod::Litigation.includes_arbitration());
    }

    #[test]
    fn mediation_and_arbitration_are_exclusive() {
        assert!(ResolutionMethod::Mediation.includes_mediation());
        assert!(!ResolutionMethod::Mediation.includes_arbitration());
        assert!(ResolutionMethod::Arbitration.includes_arbitration());
        assert!(!ResolutionMethod::Arbitration.includes_mediation());
    }

    #[test]
    fn defaults_match_wizard_initial_state() {
        let terms = DisputeMiscTerms::default();
        assert_eq!(terms.resolution_method, ResolutionMethod::Hybrid);
        assert_eq!(terms.notice_method, NoticeMethod::Multiple);
        assert!(terms.severability);
        assert!(terms.entire_agreement);
        assert!(terms.governing_law.is_none());
    }
}
