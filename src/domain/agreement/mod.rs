//! Agreement module - the AgreementRecord aggregate and its sections.
//!
//! The record accumulates one section per wizard step. Sections are plain
//! data: validation lives in the wizard gates, and all prose rendering
//! lives in the document projectors.

mod aggregate;
mod articles;
mod capital;
mod company;
mod compensation;
mod dispute;
mod employment;
mod equity;
mod founder;
mod ip;
mod roles;
mod transfer;
mod vesting;

pub use aggregate::{AgreementRecord, SectionPatch, FOUNDER_PLACEHOLDER};
pub use articles::{
    AoaCompanyType, AoaDisputeResolution, AoaTransferRestrictions, ArticlesParams,
    AuditRequirement, DividendPolicy,
};
pub use capital::{CapitalPlan, Contribution, ContributionKind};
pub use company::{CompanyFormation, CompanyIdentity, CompanyType};
pub use compensation::{
    Compensation, CompensationPlan, SalaryReviewPeriod, BENEFIT_OPTIONS,
};
pub use dispute::{DisputeMiscTerms, GoverningLaw, NoticeMethod, ResolutionMethod};
pub use employment::{
    CompensationTerms, ContractKind, EmployeeRecord, ExpectedQuality,
};
pub use equity::{CustomEquity, EquityDistribution, EquityPlan};
pub use founder::Founder;
pub use ip::{IpConfidentialityTerms, IpOwnership, IpRights, PreExistingIp};
pub use roles::{FounderRole, RolePlan, DecisionMaking, DECISION_AREAS};
pub use transfer::{TransferExitTerms, TransferRestriction, ValuationMethod};
pub use vesting::{VestingPlan, VestingSchedule};
