//! The AgreementRecord aggregate.
//!
//! One mutable record accumulates the whole agreement across the wizard.
//! Each step submits a complete section value; `merge_section` replaces the
//! stored section wholesale (shallow-merge semantics - no deep merge, no
//! error return). Projectors receive the record read-only.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::RecordId;

use super::{
    CapitalPlan, CompanyFormation, CompanyIdentity, CompensationPlan, DisputeMiscTerms,
    EquityPlan, Founder, IpConfidentialityTerms, RolePlan, TransferExitTerms, VestingPlan,
};

/// Label rendered when a founder reference points outside the founder list.
pub const FOUNDER_PLACEHOLDER: &str = "Co-Founder";

/// A complete section value submitted by one wizard step.
///
/// Merging a patch overwrites the matching section entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SectionPatch {
    BasicInfo(CompanyIdentity),
    Formation(CompanyFormation),
    Equity(EquityPlan),
    Roles(RolePlan),
    Vesting(VestingPlan),
    Capital(CapitalPlan),
    Compensation(CompensationPlan),
    IpConfidentiality(IpConfidentialityTerms),
    TransferExit(TransferExitTerms),
    DisputeMisc(DisputeMiscTerms),
}

/// The in-progress agreement.
///
/// Created empty at wizard start, mutated in place by each step's submit
/// action, and discarded with the session. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgreementRecord {
    id: RecordId,
    pub company: CompanyIdentity,
    pub formation: CompanyFormation,
    pub equity: EquityPlan,
    pub roles: RolePlan,
    pub vesting: VestingPlan,
    pub capital: CapitalPlan,
    pub compensation: CompensationPlan,
    pub ip: IpConfidentialityTerms,
    pub transfer: TransferExitTerms,
    pub dispute: DisputeMiscTerms,
}

impl AgreementRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self {
            id: RecordId::new(),
            company: CompanyIdentity::default(),
            formation: CompanyFormation::default(),
            equity: EquityPlan::default(),
            roles: RolePlan::default(),
            vesting: VestingPlan::default(),
            capital: CapitalPlan::default(),
            compensation: CompensationPlan::default(),
            ip: IpConfidentialityTerms::default(),
            transfer: TransferExitTerms::default(),
            dispute: DisputeMiscTerms::default(),
        }
    }

    /// Returns the record ID.
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Shallow-merges a section patch: the submitted section replaces the
    /// stored one. Never fails; inputs are validated by the step gates
    /// before merge is invoked.
    pub fn merge_section(&mut self, patch: SectionPatch) {
        match patch {
            SectionPatch::BasicInfo(section) => self.company = section,
            SectionPatch::Formation(section) => self.formation = section,
            SectionPatch::Equity(section) => self.equity = section,
            SectionPatch::Roles(section) => self.roles = section,
            SectionPatch::Vesting(section) => self.vesting = section,
            SectionPatch::Capital(section) => self.capital = section,
            SectionPatch::Compensation(section) => self.compensation = section,
            SectionPatch::IpConfidentiality(section) => self.ip = section,
            SectionPatch::TransferExit(section) => self.transfer = section,
            SectionPatch::DisputeMisc(section) => self.dispute = section,
        }
    }

    /// The founder list.
    pub fn founders(&self) -> &[Founder] {
        &self.company.founders
    }

    /// Resolves a founder reference to a display name.
    ///
    /// Falls back to the "Co-Founder" placeholder when the index is out of
    /// range (e.g. a founder was removed after a contribution referenced
    /// them) so generation never fails on a dangling reference.
    pub fn founder_name(&self, index: usize) -> &str {
        self.company
            .founders
            .get(index)
            .map(|f| f.name.as_str())
            .unwrap_or(FOUNDER_PLACEHOLDER)
    }

    /// Resolves a founder's document title: the detailed role title when the
    /// roles step filled one in, otherwise the short role from basic info.
    pub fn founder_title(&self, index: usize) -> &str {
        if let Some(role) = self.roles.founder_roles.get(index) {
            if !role.title.is_empty() {
                return &role.title;
            }
        }
        self.company
            .founders
            .get(index)
            .map(|f| f.role.as_str())
            .unwrap_or(FOUNDER_PLACEHOLDER)
    }
}

impl Default for AgreementRecord {
    fn default() -> Self {
        Self::new()
    }
}
