//! Translation tables: enumerated values to rendered prose.
//!
//! Every table has a fixed fallback for an unset field so no clause ever
//! renders blank. These strings are the document "wire format" - change
//! them and generated agreements change.

use crate::domain::agreement::{
    AoaDisputeResolution, AoaTransferRestrictions, AuditRequirement, CompanyType, ContributionKind,
    DecisionMaking, DividendPolicy, GoverningLaw, IpOwnership, IpRights, NoticeMethod,
    ResolutionMethod, TransferExitTerms, TransferRestriction, ValuationMethod, VestingSchedule,
};
use chrono::{Datelike, NaiveDate};

/// Long-form company type used inside clause sentences.
pub(super) fn company_type_long(value: Option<CompanyType>) -> &'static str {
    match value {
        Some(CompanyType::Llc) => "limited liability company",
        Some(CompanyType::Corporation) => "corporation",
        Some(CompanyType::Partnership) => "partnership",
        Some(CompanyType::SoleProprietorship) | None => "sole proprietorship",
    }
}

/// Short company type label.
pub(super) fn company_type_label(value: Option<CompanyType>) -> &'static str {
    match value {
        Some(CompanyType::Llc) => "Limited Liability Company (LLC)",
        Some(CompanyType::Corporation) => "Corporation",
        Some(CompanyType::Partnership) => "Partnership",
        Some(CompanyType::SoleProprietorship) | None => "Sole Proprietorship",
    }
}

/// Full decision-making clause sentence.
pub(super) fn decision_making_clause(value: DecisionMaking) -> &'static str {
    match value {
        DecisionMaking::Majority => {
            "Decisions require a simple majority (more than 50%) of Co-Founders to approve."
        }
        DecisionMaking::Supermajority => {
            "Decisions require a supermajority (typically 2/3 or 75%) of Co-Founders to approve."
        }
        DecisionMaking::Unanimous => "All Co-Founders must agree for a decision to be approved.",
        DecisionMaking::Weighted => "Voting power is proportional to equity ownership.",
        DecisionMaking::CeoDecides => {
            "The CEO has final decision-making authority after consulting with other Co-Founders."
        }
    }
}

/// Short decision-making label.
pub(super) fn decision_making_label(value: DecisionMaking) -> &'static str {
    match value {
        DecisionMaking::Majority => "Majority Vote",
        DecisionMaking::Supermajority => "Supermajority",
        DecisionMaking::Unanimous => "Unanimous Consent",
        DecisionMaking::Weighted => "Weighted Voting",
        DecisionMaking::CeoDecides => "CEO Final Decision",
    }
}

/// Full IP ownership clause sentence.
pub(super) fn ip_rights_clause(value: IpRights) -> &'static str {
    match value {
        IpRights::Company => {
            "All Intellectual Property created by Co-Founders during their involvement with the \
             Company belongs to the Company."
        }
        IpRights::Founder => {
            "Co-Founders retain ownership of Intellectual Property they create but grant the \
             Company an exclusive license to use it."
        }
        IpRights::Mixed => {
            "Some Intellectual Property belongs to the Company, while other Intellectual Property \
             remains with individual Co-Founders, as specified in writing."
        }
    }
}

/// Short IP ownership label.
pub(super) fn ip_rights_label(value: IpRights) -> &'static str {
    match value {
        IpRights::Company => "Company Ownership",
        IpRights::Founder => "Founder Ownership with License",
        IpRights::Mixed => "Mixed Ownership",
    }
}

/// Disposition label for pre-existing IP.
pub(super) fn ip_ownership_label(value: IpOwnership) -> &'static str {
    match value {
        IpOwnership::Retained => "Retained by Co-Founder",
        IpOwnership::Transferred => "Transferred to Company",
        IpOwnership::Licensed => "Licensed to Company",
    }
}

/// Full dispute-resolution clause sentence.
pub(super) fn dispute_resolution_clause(value: ResolutionMethod) -> &'static str {
    match value {
        ResolutionMethod::Mediation => {
            "Disputes are first addressed through mediation with a neutral third party before any \
             legal action."
        }
        ResolutionMethod::Arbitration => {
            "Disputes are resolved through binding arbitration rather than court litigation."
        }
        ResolutionMethod::Hybrid => {
            "Mediation first, followed by binding arbitration if mediation fails."
        }
        ResolutionMethod::Litigation => {
            "Disputes are resolved through traditional court proceedings."
        }
    }
}

/// Short dispute-resolution label.
pub(super) fn dispute_resolution_label(value: ResolutionMethod) -> &'static str {
    match value {
        ResolutionMethod::Mediation => "Mediation First",
        ResolutionMethod::Arbitration => "Binding Arbitration",
        ResolutionMethod::Hybrid => "Hybrid Approach",
        ResolutionMethod::Litigation => "Court Litigation",
    }
}

/// Valuation method label.
pub(super) fn valuation_method_label(value: ValuationMethod) -> &'static str {
    match value {
        ValuationMethod::RevenueMultiple => "Revenue/EBITDA Multiple",
        ValuationMethod::IndependentAppraisal => "Independent Appraisal",
        ValuationMethod::PredeterminedFormula => "Predetermined Formula",
        ValuationMethod::BookValue => "Book Value",
        ValuationMethod::LastFinancingRound => "Last Financing Round Valuation",
    }
}

/// Governing-law jurisdiction label; unset falls back to Delaware.
pub(super) fn governing_law_label(value: Option<GoverningLaw>) -> &'static str {
    match value {
        Some(GoverningLaw::California) => "California, USA",
        Some(GoverningLaw::NewYork) => "New York, USA",
        Some(GoverningLaw::UnitedKingdom) => "United Kingdom",
        Some(GoverningLaw::Singapore) => "Singapore",
        Some(GoverningLaw::Delaware) | Some(GoverningLaw::Other) | None => "Delaware, USA",
    }
}

/// Notice delivery method prose.
pub(super) fn notice_method_clause(value: NoticeMethod) -> &'static str {
    match value {
        NoticeMethod::Email => "Email",
        NoticeMethod::CertifiedMail => "Certified Mail",
        NoticeMethod::PersonalDelivery => "Personal Delivery",
        NoticeMethod::Multiple => {
            "Email, followed by Certified Mail if no response is received within 3 business days"
        }
    }
}

/// Full vesting schedule clause sentence.
pub(super) fn vesting_schedule_clause(value: VestingSchedule) -> &'static str {
    match value {
        VestingSchedule::Standard => {
            "Standard Time-Based Vesting: Equity vests equally over time, typically monthly after \
             the initial cliff period."
        }
        VestingSchedule::Milestone => {
            "Milestone-Based Vesting: Equity vests when specific company or individual milestones \
             are achieved."
        }
        VestingSchedule::Hybrid => {
            "Hybrid Vesting: Combines time-based and milestone-based vesting."
        }
    }
}

/// Short vesting schedule label.
pub(super) fn vesting_schedule_label(value: VestingSchedule) -> &'static str {
    match value {
        VestingSchedule::Standard => "Standard Time-Based Vesting",
        VestingSchedule::Milestone => "Milestone-Based Vesting",
        VestingSchedule::Hybrid => "Hybrid Vesting",
    }
}

/// Portion of equity vesting at the end of the cliff.
pub(super) fn cliff_vest_portion(cliff_years: u8) -> &'static str {
    match cliff_years {
        1 => "25%",
        2 => "50%",
        _ => "a portion",
    }
}

/// Baseline transfer restriction clause sentence.
pub(super) fn transfer_restriction_clause(value: TransferRestriction) -> &'static str {
    match value {
        TransferRestriction::NoRestrictions => {
            "Co-Founders can freely transfer their shares to any third party."
        }
        TransferRestriction::BoardApproval => {
            "Any transfer of shares requires approval from the board of directors."
        }
        TransferRestriction::AllFounders => {
            "Any transfer of shares requires approval from all Co-Founders."
        }
        TransferRestriction::CompleteRestriction => {
            "No transfers allowed for a period of 2 years except in limited circumstances."
        }
    }
}

/// Contribution kind label.
pub(super) fn contribution_kind_label(value: ContributionKind) -> &'static str {
    match value {
        ContributionKind::Cash => "Cash",
        ContributionKind::Asset => "Physical Asset",
        ContributionKind::IntellectualProperty => "Intellectual Property",
        ContributionKind::Service => "Services",
        ContributionKind::Other => "Other",
    }
}

/// Summary exit-strategy label derived from the first enabled protective
/// clause, in the same priority order as the sub-clause numbering.
pub(super) fn exit_strategy_label(terms: &TransferExitTerms) -> &'static str {
    if terms.right_of_first_refusal {
        "Right of First Refusal"
    } else if terms.tag_along {
        "Tag-Along Rights"
    } else if terms.drag_along {
        "Drag-Along Rights"
    } else if terms.shotgun_clause {
        "Shotgun Clause"
    } else {
        "To be determined"
    }
}

/// AoA share transfer restriction clause.
pub(super) fn aoa_transfer_clause(value: AoaTransferRestrictions) -> &'static str {
    match value {
        AoaTransferRestrictions::NoRestrictions => {
            "Shares may be transferred freely without restriction."
        }
        AoaTransferRestrictions::DirectorsApproval => {
            "The Directors may, in their absolute discretion, refuse to register the transfer of \
             a share to any person."
        }
        AoaTransferRestrictions::MembersApproval => {
            "No share may be transferred unless the transfer has been approved by a resolution of \
             the Members."
        }
        AoaTransferRestrictions::RightOfFirstRefusal => {
            "No share may be transferred unless it has first been offered to the existing Members \
             in proportion to their holdings."
        }
    }
}

/// AoA dividend policy clause.
pub(super) fn dividend_policy_clause(value: DividendPolicy) -> &'static str {
    match value {
        DividendPolicy::DirectorsDiscretion => {
            "The Directors may decide to declare and pay dividends if they appear to be justified \
             by the profits of the Company available for distribution."
        }
        DividendPolicy::MandatoryDistribution => {
            "The Company shall distribute at least 50% of its available profits each year, subject \
             to having sufficient reserves to meet its ongoing obligations."
        }
        DividendPolicy::ShariahCompliant => {
            "Profits shall be distributed in accordance with Shariah principles. No fixed returns \
             shall be guaranteed, and losses shall be borne in proportion to capital contribution."
        }
    }
}

/// AoA audit requirement clause.
pub(super) fn audit_requirement_clause(value: AuditRequirement) -> &'static str {
    match value {
        AuditRequirement::Exempt => {
            "The Company shall be exempt from the requirement to have its accounts audited, \
             subject to compliance with the relevant provisions of the Companies Act 2006."
        }
        AuditRequirement::Required => {
            "The Company shall appoint an auditor to audit its annual accounts in accordance with \
             the Companies Act 2006."
        }
        AuditRequirement::MembersDecision => {
            "The Members shall decide at each annual general meeting whether the Company's \
             accounts should be audited for the following financial year."
        }
    }
}

/// AoA dispute resolution clause.
pub(super) fn aoa_dispute_clause(value: AoaDisputeResolution) -> &'static str {
    match value {
        AoaDisputeResolution::Mediation => {
            "Any dispute arising between the Members or between the Members and the Company shall \
             first be referred to mediation before any legal proceedings are commenced."
        }
        AoaDisputeResolution::Arbitration => {
            "Any dispute arising between the Members or between the Members and the Company shall \
             be referred to and finally resolved by arbitration under the rules of an appropriate \
             arbitration body."
        }
        AoaDisputeResolution::Hybrid => {
            "Any dispute shall first be referred to mediation, and if not resolved within 30 \
             days, shall be referred to binding arbitration."
        }
        AoaDisputeResolution::Litigation => {
            "Any dispute may be resolved through the courts in accordance with the applicable law."
        }
        AoaDisputeResolution::IslamicArbitration => {
            "Any dispute shall be resolved through Islamic arbitration (Sulh) in accordance with \
             Shariah principles by a qualified Islamic scholar or panel of scholars."
        }
    }
}

/// Formats a monetary or share amount the way form values echo back:
/// integers without a decimal point, fractional values as entered.
pub fn fmt_amount(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1.0e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Renders a date as M/D/YYYY for the "Date:" lines.
pub(super) fn format_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}
