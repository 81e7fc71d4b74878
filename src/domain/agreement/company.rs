//! Company identity and formation sections.

use serde::{Deserialize, Serialize};

use super::{Founder, GoverningLaw};

/// Legal form of the company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanyType {
    #[serde(rename = "llc")]
    Llc,
    #[serde(rename = "corporation")]
    Corporation,
    #[serde(rename = "partnership")]
    Partnership,
    #[serde(rename = "soleProprietorship")]
    SoleProprietorship,
}

/// Company identity section: name, legal form, and the founder list.
///
/// `company_type` is `None` until the basic-info step selects one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyIdentity {
    pub company_name: String,
    pub company_type: Option<CompanyType>,
    pub founders: Vec<Founder>,
}

impl CompanyIdentity {
    /// Number of founders in the record.
    pub fn founder_count(&self) -> usize {
        self.founders.len()
    }
}

/// Company formation section: purpose, address, jurisdiction.
///
/// `jurisdiction` doubles as the governing-law fallback when the dispute
/// step leaves governing law unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyFormation {
    pub business_purpose: String,
    pub registered_address: String,
    pub jurisdiction: Option<GoverningLaw>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_type_uses_form_values() {
        assert_eq!(
            serde_json::to_string(&CompanyType::Llc).unwrap(),
            "\"llc\""
        );
        assert_eq!(
            serde_json::to_string(&CompanyType::SoleProprietorship).unwrap(),
            "\"soleProprietorship\""
        );
    }

    #[test]
    fn identity_defaults_to_unselected_type() {
        let identity = CompanyIdentity::default();
        assert!(identity.company_type.is_none());
        assert_eq!(identity.founder_count(), 0);
    }
}
