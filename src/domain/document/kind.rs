//! Document kinds the projectors can produce.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four generated document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    PreliminaryAgreement,
    ComprehensiveAgreement,
    EmploymentContract,
    ArticlesOfAssociation,
}

impl DocumentKind {
    /// Title drawn at the top of the document.
    pub fn title(&self) -> &'static str {
        match self {
            DocumentKind::PreliminaryAgreement | DocumentKind::ComprehensiveAgreement => {
                "CO-FOUNDER AGREEMENT"
            }
            DocumentKind::EmploymentContract => "EMPLOYMENT CONTRACT",
            DocumentKind::ArticlesOfAssociation => "ARTICLES OF ASSOCIATION",
        }
    }

    /// The kind's segment in exported filenames.
    pub fn file_label(&self) -> &'static str {
        match self {
            DocumentKind::PreliminaryAgreement | DocumentKind::ComprehensiveAgreement => {
                "Co-Founder_Agreement"
            }
            DocumentKind::EmploymentContract => "Employment_Contract",
            DocumentKind::ArticlesOfAssociation => "Articles_of_Association",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_label())
    }
}
