//! Founder entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::EquityPercent;

/// A participant whose data the agreement documents.
///
/// Founders are identified by their position in the record's founder list;
/// `founder_index` fields elsewhere in the record refer back to that list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Founder {
    pub name: String,
    pub email: String,
    pub role: String,
    pub equity: EquityPercent,
}

impl Founder {
    /// Creates a founder with the given identity fields and zero equity.
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
            equity: EquityPercent::ZERO,
        }
    }

    /// A founder has an identity once both name and email are filled in.
    pub fn has_identity(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_identity_requires_name_and_email() {
        assert!(Founder::new("Jane Doe", "jane@acme.test", "CEO").has_identity());
        assert!(!Founder::new("", "jane@acme.test", "CEO").has_identity());
        assert!(!Founder::new("Jane Doe", "   ", "CEO").has_identity());
    }
}
