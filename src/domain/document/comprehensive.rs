//! Comprehensive co-founder agreement projector.
//!
//! Emits the full 21-section agreement in fixed order, an optional
//! Additional Terms section, and a signatures page. Section numbering and
//! page-break points are part of the document contract; conditional
//! sub-clauses in Transfer of Shares and Dispute Resolution renumber
//! contiguously based on which are enabled.

use chrono::NaiveDate;

use crate::domain::agreement::{AgreementRecord, EquityDistribution, IpOwnership};
use crate::domain::foundation::EquityPercent;

use super::clauses::{numbered_clauses, ConditionalClause};
use super::prose::{self, fmt_amount};
use super::{DocumentBuilder, InstructionSequence};

const TOC_ITEMS: [&str; 21] = [
    "1. DEFINITIONS",
    "2. FORMATION OF THE COMPANY",
    "3. ROLES AND RESPONSIBILITIES",
    "4. EQUITY AND OWNERSHIP",
    "5. VESTING SCHEDULE",
    "6. CAPITAL CONTRIBUTIONS",
    "7. MANAGEMENT AND DECISION-MAKING",
    "8. INTELLECTUAL PROPERTY",
    "9. CONFIDENTIALITY",
    "10. COMPENSATION AND BENEFITS",
    "11. EXPENSES",
    "12. TRANSFER OF SHARES",
    "13. EXIT STRATEGY",
    "14. DISSOLUTION",
    "15. DISPUTE RESOLUTION",
    "16. NON-COMPETE AND NON-SOLICITATION",
    "17. AMENDMENTS",
    "18. GOVERNING LAW",
    "19. ENTIRE AGREEMENT",
    "20. SEVERABILITY",
    "21. NOTICES",
];

/// Projects the record into the comprehensive agreement.
pub fn project(record: &AgreementRecord, generated_on: NaiveDate) -> InstructionSequence {
    let mut doc = DocumentBuilder::new();

    title_page(&mut doc, generated_on);

    doc.page_break();
    definitions(&mut doc, record);
    formation(&mut doc, record);

    doc.page_break();
    roles(&mut doc, record);

    doc.page_break();
    equity(&mut doc, record);
    vesting(&mut doc, record);

    doc.page_break();
    capital(&mut doc, record);

    doc.page_break();
    management(&mut doc, record);

    doc.page_break();
    intellectual_property(&mut doc, record);

    doc.page_break();
    confidentiality(&mut doc, record);

    doc.page_break();
    compensation(&mut doc, record);
    expenses(&mut doc, record);

    doc.page_break();
    transfer_of_shares(&mut doc, record);

    doc.page_break();
    exit_strategy(&mut doc, record);
    dissolution(&mut doc, record);

    doc.page_break();
    dispute_resolution(&mut doc, record);

    doc.page_break();
    non_compete(&mut doc, record);
    amendments(&mut doc, record);

    doc.page_break();
    governing_law(&mut doc, record);
    entire_agreement(&mut doc);
    severability(&mut doc);
    notices(&mut doc, record);

    if !record.dispute.additional_terms.is_empty() {
        doc.page_break();
        doc.heading("22. ADDITIONAL TERMS");
        doc.paragraph_wrapped(record.dispute.additional_terms.clone(), 150);
    }

    doc.page_break();
    signatures(&mut doc, record);

    doc.finish()
}

fn title_page(doc: &mut DocumentBuilder, generated_on: NaiveDate) {
    doc.heading("CO-FOUNDER AGREEMENT");
    doc.paragraph(format!("Date: {}", prose::format_date(generated_on)));
    doc.heading("TABLE OF CONTENTS");
    for item in TOC_ITEMS {
        doc.paragraph(item);
    }
}

fn definitions(doc: &mut DocumentBuilder, record: &AgreementRecord) {
    doc.heading("1. DEFINITIONS");
    doc.paragraph("In this Agreement, unless the context requires otherwise:");
    doc.table(
        vec!["Term".to_string(), "Definition".to_string()],
        vec![
            vec![
                "Agreement".to_string(),
                "means this Co-Founder Agreement.".to_string(),
            ],
            vec![
                "Company".to_string(),
                format!(
                    "means {}, a {}.",
                    record.company.company_name,
                    prose::company_type_long(record.company.company_type)
                ),
            ],
            vec![
                "Co-Founder".to_string(),
                "means each of the individuals who have signed this Agreement.".to_string(),
            ],
            vec![
                "Intellectual Property".to_string(),
                "means all patents, copyrights, trademarks, trade secrets, and other \
                 intellectual property rights."
                    .to_string(),
            ],
            vec![
                "Confidential Information".to_string(),
                "means any non-public information relating to the Company's business, \
                 technology, customers, or operations."
                    .to_string(),
            ],
            vec![
                "Vesting Schedule".to_string(),
                "means the schedule according to which a Co-Founder's equity becomes \
                 non-forfeitable over time."
                    .to_string(),
            ],
        ],
    );
}

fn formation(doc: &mut DocumentBuilder, record: &AgreementRecord) {
    doc.heading("2. FORMATION OF THE COMPANY");
    doc.paragraph("2.1 Company Name and Type");
    doc.paragraph(format!(
        "The Co-Founders hereby agree to form a {} under the name \"{}\".",
        prose::company_type_long(record.company.company_type),
        record.company.company_name
    ));
    doc.paragraph("2.2 Business Purpose");
    doc.paragraph_wrapped(
        format!(
            "The business purpose of the Company is: {}",
            placeholder(&record.formation.business_purpose, "[Business Purpose]")
        ),
        150,
    );
    doc.paragraph("2.3 Registered Address");
    doc.paragraph_wrapped(
        format!(
            "The registered address of the Company is: {}",
            placeholder(&record.formation.registered_address, "[Registered Address]")
        ),
        150,
    );
}

fn roles(doc: &mut DocumentBuilder, record: &AgreementRecord) {
    doc.heading("3. ROLES AND RESPONSIBILITIES");
    doc.paragraph("3.1 Co-Founder Roles");
    for (index, founder) in record.founders().iter().enumerate() {
        doc.paragraph(format!(
            "{} - {}:",
            founder.name,
            record.founder_title(index)
        ));
        let responsibilities = record
            .roles
            .founder_roles
            .get(index)
            .map(|r| r.responsibilities.as_str())
            .filter(|r| !r.is_empty())
            .unwrap_or("General responsibilities");
        doc.paragraph_wrapped(format!("Responsibilities: {}", responsibilities), 140);
        if let Some(role) = record.roles.founder_roles.get(index) {
            if !role.decision_areas.is_empty() {
                doc.paragraph_wrapped(
                    format!("Decision Areas: {}", role.decision_areas.join(", ")),
                    140,
                );
            }
        }
        let commitment = record
            .roles
            .founder_roles
            .get(index)
            .map(|r| r.time_commitment.as_str())
            .filter(|c| !c.is_empty())
            .unwrap_or("Full-time");
        doc.paragraph(format!("Time Commitment: {}", commitment));
    }
    doc.paragraph("3.2 Amendment of Roles");
    doc.paragraph_wrapped(
        format!(
            "The process for amending Co-Founder roles and responsibilities is as follows: {}",
            placeholder(
                &record.roles.amendment_process,
                "By unanimous written consent of all Co-Founders."
            )
        ),
        150,
    );
}

fn equity(doc: &mut DocumentBuilder, record: &AgreementRecord) {
    doc.heading("4. EQUITY AND OWNERSHIP");
    doc.paragraph("4.1 Equity Distribution");
    // Recomputed here from the record; nothing is shared with the other
    // document variants.
    let rows: Vec<Vec<String>> = match record.equity.distribution {
        EquityDistribution::Equal => {
            let share = EquityPercent::equal_share(record.founders().len());
            record
                .founders()
                .iter()
                .map(|f| vec![f.name.clone(), share.to_string()])
                .collect()
        }
        EquityDistribution::Custom => record
            .equity
            .custom
            .iter()
            .map(|c| vec![c.name.clone(), c.equity.to_string()])
            .collect(),
    };
    doc.table(
        vec!["Co-Founder".to_string(), "Equity Percentage".to_string()],
        rows,
    );
    doc.paragraph("4.2 Share Class");
    doc.paragraph(
        "All Co-Founders shall receive common stock/membership interests in the Company.",
    );
}

fn vesting(doc: &mut DocumentBuilder, record: &AgreementRecord) {
    doc.heading("5. VESTING SCHEDULE");
    doc.paragraph("5.1 Vesting Period");
    doc.paragraph(format!(
        "Each Co-Founder's equity shall vest over a period of {} years.",
        record.vesting.period_years
    ));
    doc.paragraph("5.2 Cliff Period");
    doc.paragraph(format!(
        "There shall be a cliff period of {} year(s), after which {} of the equity shall vest.",
        record.vesting.cliff_years,
        prose::cliff_vest_portion(record.vesting.cliff_years)
    ));
    doc.paragraph("5.3 Vesting Schedule Type");
    doc.paragraph_wrapped(prose::vesting_schedule_clause(record.vesting.schedule), 150);
}

fn capital(doc: &mut DocumentBuilder, record: &AgreementRecord) {
    doc.heading("6. CAPITAL CONTRIBUTIONS");
    doc.paragraph("6.1 Initial Capital");
    doc.paragraph(format!(
        "The total initial capital of the Company is ${}.",
        fmt_amount(record.capital.initial_capital)
    ));
    doc.paragraph("6.2 Co-Founder Contributions");

    if record.capital.contributions.is_empty() {
        doc.paragraph("Co-Founder contributions will be determined at a later date.");
        return;
    }

    doc.table(
        vec![
            "Co-Founder".to_string(),
            "Type".to_string(),
            "Description".to_string(),
            "Value".to_string(),
        ],
        record
            .capital
            .contributions
            .iter()
            .map(|c| {
                vec![
                    record.founder_name(c.founder_index).to_string(),
                    prose::contribution_kind_label(c.kind).to_string(),
                    c.description.clone(),
                    format!("${}", fmt_amount(c.value)),
                ]
            })
            .collect(),
    );

    doc.paragraph("6.3 Valuation of Non-Cash Contributions");
    let non_cash: Vec<_> = record.capital.non_cash_contributions().collect();
    if non_cash.is_empty() {
        doc.paragraph("There are no non-cash contributions.");
    } else {
        for contribution in non_cash {
            doc.paragraph(format!(
                "{}'s {} contribution:",
                record.founder_name(contribution.founder_index),
                contribution.kind.as_str()
            ));
            doc.paragraph(format!(
                "Valuation Method: {}",
                placeholder(&contribution.valuation_method, "Fair market value")
            ));
        }
    }
}

fn management(doc: &mut DocumentBuilder, record: &AgreementRecord) {
    doc.heading("7. MANAGEMENT AND DECISION-MAKING");
    doc.paragraph("7.1 Decision-Making Process");
    doc.paragraph_wrapped(
        prose::decision_making_clause(record.roles.decision_making),
        150,
    );
    doc.paragraph("7.2 Board of Directors");
    doc.paragraph_wrapped(
        "The Company shall be managed by its Co-Founders until a formal Board of Directors is \
         established.",
        150,
    );
    doc.paragraph("7.3 Officers");
    for (index, founder) in record.founders().iter().enumerate() {
        doc.paragraph(format!("{} - {}", founder.name, record.founder_title(index)));
    }
    doc.paragraph("7.4 Deadlock Resolution");
    doc.paragraph_wrapped(
        format!(
            "In case of a deadlock, the following process shall be followed: {}",
            placeholder(
                &record.dispute.deadlock_resolution,
                "Mediation by a neutral third party."
            )
        ),
        150,
    );
}

fn intellectual_property(doc: &mut DocumentBuilder, record: &AgreementRecord) {
    doc.heading("8. INTELLECTUAL PROPERTY");
    doc.paragraph("8.1 IP Ownership");
    doc.paragraph_wrapped(prose::ip_rights_clause(record.ip.ip_rights), 150);

    doc.paragraph("8.2 Pre-Existing IP");
    if record.ip.pre_existing_ip.is_empty() {
        doc.paragraph("There is no pre-existing Intellectual Property to be disclosed.");
    } else {
        doc.table(
            vec![
                "Co-Founder".to_string(),
                "Description".to_string(),
                "Ownership".to_string(),
                "License Terms".to_string(),
            ],
            record
                .ip
                .pre_existing_ip
                .iter()
                .map(|ip| {
                    let license = if ip.ownership == IpOwnership::Licensed {
                        placeholder(&ip.license_terms, "Exclusive license")
                    } else {
                        "N/A".to_string()
                    };
                    vec![
                        record.founder_name(ip.founder_index).to_string(),
                        ip.description.clone(),
                        prose::ip_ownership_label(ip.ownership).to_string(),
                        license,
                    ]
                })
                .collect(),
        );
    }

    doc.paragraph("8.3 IP Assignment");
    doc.paragraph_wrapped(
        "Each Co-Founder hereby assigns to the Company all right, title, and interest in and to \
         any Intellectual Property created during their work for the Company, subject to the \
         ownership provisions in Section 8.1.",
        150,
    );
}

fn confidentiality(doc: &mut DocumentBuilder, record: &AgreementRecord) {
    doc.heading("9. CONFIDENTIALITY");
    doc.paragraph("9.1 Confidentiality Obligations");
    doc.paragraph_wrapped(
        "Each Co-Founder agrees to maintain the confidentiality of all Confidential Information \
         and not to disclose it to any third party without the prior written consent of the \
         Company.",
        150,
    );
    doc.paragraph("9.2 Term of Confidentiality");
    doc.paragraph_wrapped(
        format!(
            "The confidentiality obligations shall remain in effect during the Co-Founder's \
             involvement with the Company and for a period of {} years thereafter.",
            record.ip.confidentiality_term_years
        ),
        150,
    );
    doc.paragraph("9.3 Exclusions");
    doc.paragraph_wrapped(
        format!(
            "The following information is excluded from confidentiality obligations: {}",
            placeholder(
                &record.ip.confidentiality_exclusions,
                "Information that is publicly available, information that was known to the \
                 Co-Founder prior to disclosure, information that is independently developed by \
                 the Co-Founder without use of Confidential Information, or information that is \
                 required to be disclosed by law."
            )
        ),
        150,
    );
}

fn compensation(doc: &mut DocumentBuilder, record: &AgreementRecord) {
    doc.heading("10. COMPENSATION AND BENEFITS");
    doc.paragraph("10.1 Co-Founder Compensation");

    if record.compensation.compensations.is_empty() {
        doc.paragraph_wrapped(
            "Co-Founder compensation will be determined at a later date based on company \
             performance and available funds.",
            150,
        );
        return;
    }

    doc.table(
        vec![
            "Co-Founder".to_string(),
            "Salary".to_string(),
            "Review Period".to_string(),
            "Benefits".to_string(),
        ],
        record
            .compensation
            .compensations
            .iter()
            .map(|c| {
                vec![
                    record.founder_name(c.founder_index).to_string(),
                    format!("${}/year", fmt_amount(c.salary)),
                    c.review_period.as_str().to_string(),
                    c.benefits.join(", "),
                ]
            })
            .collect(),
    );

    doc.paragraph("10.2 Bonus Structures");
    for c in &record.compensation.compensations {
        if !c.bonus_structure.is_empty() {
            doc.paragraph(format!("{}:", record.founder_name(c.founder_index)));
            doc.paragraph_wrapped(c.bonus_structure.clone(), 140);
        }
    }

    doc.paragraph("10.3 Compensation Review Process");
    doc.paragraph_wrapped(
        placeholder(
            &record.compensation.compensation_review_process,
            "Co-Founder compensation shall be reviewed annually based on company performance and \
             market rates.",
        ),
        150,
    );
}

fn expenses(doc: &mut DocumentBuilder, record: &AgreementRecord) {
    doc.heading("11. EXPENSES");
    doc.paragraph("11.1 Business Expense Policy");
    doc.paragraph_wrapped(
        placeholder(
            &record.compensation.expense_policy,
            "Reasonable business expenses incurred by Co-Founders will be reimbursed by the \
             Company upon submission of appropriate documentation.",
        ),
        150,
    );
}

fn transfer_of_shares(doc: &mut DocumentBuilder, record: &AgreementRecord) {
    doc.heading("12. TRANSFER OF SHARES");
    doc.paragraph("12.1 Transfer Restrictions");
    doc.paragraph_wrapped(
        prose::transfer_restriction_clause(record.transfer.restriction_level),
        150,
    );

    let optional = vec![
        ConditionalClause::new(
            record.transfer.right_of_first_refusal,
            "Right of First Refusal",
            "If a Co-Founder wants to sell shares, other Co-Founders have the right to purchase \
             them first.",
        ),
        ConditionalClause::new(
            record.transfer.tag_along,
            "Tag-Along Rights",
            "If a Co-Founder sells shares to a third party, other Co-Founders can join the sale \
             on the same terms.",
        ),
        ConditionalClause::new(
            record.transfer.drag_along,
            "Drag-Along Rights",
            "If a majority of Co-Founders agree to sell the company, minority Co-Founders must \
             join the sale.",
        ),
        ConditionalClause::new(
            record.transfer.shotgun_clause,
            "Shotgun Clause",
            "A Co-Founder can offer to buy out others at a specific price, but they must be \
             willing to sell at that same price.",
        ),
    ];
    for (label, body) in numbered_clauses(12, 2, optional) {
        doc.paragraph(label);
        doc.paragraph_wrapped(body, 150);
    }
}

fn exit_strategy(doc: &mut DocumentBuilder, record: &AgreementRecord) {
    doc.heading("13. EXIT STRATEGY");
    doc.paragraph("13.1 Valuation Method");
    doc.paragraph(format!(
        "The valuation method for buy-outs shall be: {}",
        prose::valuation_method_label(record.transfer.valuation_method)
    ));
    doc.paragraph("13.2 Exit Events & Process");
    doc.paragraph_wrapped(
        placeholder(
            &record.transfer.exit_events,
            "The Co-Founders agree to work together in good faith to maximize the value of the \
             Company in the event of an acquisition offer, IPO opportunity, or other exit event.",
        ),
        150,
    );
}

fn dissolution(doc: &mut DocumentBuilder, record: &AgreementRecord) {
    doc.heading("14. DISSOLUTION");
    doc.paragraph("14.1 Dissolution Process");
    doc.paragraph_wrapped(
        placeholder(
            &record.transfer.dissolution_process,
            "In the event of dissolution, the Company's assets shall be liquidated, and the \
             proceeds shall be distributed first to creditors and then to Co-Founders in \
             proportion to their equity ownership.",
        ),
        150,
    );
}

fn dispute_resolution(doc: &mut DocumentBuilder, record: &AgreementRecord) {
    doc.heading("15. DISPUTE RESOLUTION");
    doc.paragraph("15.1 Dispute Resolution Method");
    doc.paragraph_wrapped(
        prose::dispute_resolution_clause(record.dispute.resolution_method),
        150,
    );

    let method = record.dispute.resolution_method;
    let optional = vec![
        ConditionalClause::new(
            method.includes_mediation(),
            "Mediation Provider",
            format!(
                "Mediation shall be conducted by {}.",
                placeholder(
                    &record.dispute.mediation_provider,
                    "a mutually agreed upon mediator"
                )
            ),
        ),
        ConditionalClause::new(
            method.includes_arbitration(),
            "Arbitration Provider",
            format!(
                "Arbitration shall be conducted by {}.",
                placeholder(
                    &record.dispute.arbitration_provider,
                    "a mutually agreed upon arbitrator"
                )
            ),
        ),
        // The deadlock clause is always present; it renumbers after the
        // provider clauses that made the cut.
        ConditionalClause::new(
            true,
            "Deadlock Resolution",
            placeholder(
                &record.dispute.deadlock_resolution,
                "In case of a deadlock, the Co-Founders shall engage a neutral third party to \
                 help resolve the issue.",
            ),
        ),
    ];
    for (label, body) in numbered_clauses(15, 2, optional) {
        doc.paragraph(label);
        doc.paragraph_wrapped(body, 150);
    }
}

fn non_compete(doc: &mut DocumentBuilder, record: &AgreementRecord) {
    doc.heading("16. NON-COMPETE AND NON-SOLICITATION");
    doc.paragraph("16.1 Non-Compete Term");
    doc.paragraph_wrapped(
        format!(
            "Each Co-Founder agrees not to compete with the Company during their involvement \
             with the Company and for a period of {} months thereafter.",
            record.ip.non_compete_term_months
        ),
        150,
    );
    doc.paragraph("16.2 Geographic Scope");
    doc.paragraph_wrapped(
        format!(
            "The non-compete restrictions apply to the following geographic area: {}.",
            placeholder(
                &record.ip.non_compete_geographic,
                "The primary markets in which the Company operates"
            )
        ),
        150,
    );
    doc.paragraph("16.3 Non-Solicitation Term");
    doc.paragraph_wrapped(
        format!(
            "Each Co-Founder agrees not to solicit employees, customers, or suppliers of the \
             Company for a period of {} months after leaving the Company.",
            record.ip.non_solicit_term_months
        ),
        150,
    );
}

fn amendments(doc: &mut DocumentBuilder, record: &AgreementRecord) {
    doc.heading("17. AMENDMENTS");
    doc.paragraph("17.1 Amendment Process");
    doc.paragraph_wrapped(
        placeholder(
            &record.roles.amendment_process,
            "This Agreement may be amended only by a written instrument signed by all \
             Co-Founders.",
        ),
        150,
    );
}

fn governing_law(doc: &mut DocumentBuilder, record: &AgreementRecord) {
    doc.heading("18. GOVERNING LAW");
    doc.paragraph("18.1 Jurisdiction");
    // Governing law falls back to the formation jurisdiction when unset.
    let law = record
        .dispute
        .governing_law
        .or(record.formation.jurisdiction);
    doc.paragraph_wrapped(
        format!(
            "This Agreement shall be governed by and construed in accordance with the laws of {}.",
            prose::governing_law_label(law)
        ),
        150,
    );
}

fn entire_agreement(doc: &mut DocumentBuilder) {
    doc.heading("19. ENTIRE AGREEMENT");
    doc.paragraph("19.1 Integration Clause");
    doc.paragraph_wrapped(
        "This Agreement constitutes the entire understanding between the parties with respect to \
         the subject matter hereof and supersedes all prior agreements, understandings, and \
         negotiations between the parties.",
        150,
    );
}

fn severability(doc: &mut DocumentBuilder) {
    doc.heading("20. SEVERABILITY");
    doc.paragraph("20.1 Severability Clause");
    doc.paragraph_wrapped(
        "If any provision of this Agreement is found to be invalid or unenforceable, the \
         remaining provisions shall remain in full force and effect.",
        150,
    );
}

fn notices(doc: &mut DocumentBuilder, record: &AgreementRecord) {
    doc.heading("21. NOTICES");
    doc.paragraph("21.1 Notice Method");
    doc.paragraph_wrapped(
        format!(
            "Notices under this Agreement shall be delivered by: {}",
            prose::notice_method_clause(record.dispute.notice_method)
        ),
        150,
    );
    doc.paragraph("21.2 Notice Address");
    doc.paragraph_wrapped(
        placeholder(
            &record.dispute.notice_address,
            "Notices shall be sent to the email addresses or physical addresses provided by each \
             Co-Founder.",
        ),
        150,
    );
}

fn signatures(doc: &mut DocumentBuilder, record: &AgreementRecord) {
    doc.heading("SIGNATURES");
    doc.paragraph_wrapped(
        "IN WITNESS WHEREOF, the parties have executed this Co-Founder Agreement as of the date \
         first written above.",
        170,
    );
    for founder in record.founders() {
        doc.signature_line(format!("Co-Founder: {}", founder.name));
    }
    doc.paragraph_wrapped(
        "LEGAL DISCLAIMER: This document is provided as a template and is not a substitute for \
         legal advice. You should consult with an attorney before signing.",
        170,
    );
}

fn placeholder(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::agreement::{
        CompanyIdentity, CompanyType, DisputeMiscTerms, Founder, ResolutionMethod, SectionPatch,
        TransferExitTerms,
    };
    use crate::domain::document::DocInstruction;

    fn record() -> AgreementRecord {
        let mut record = AgreementRecord::new();
        record.merge_section(SectionPatch::BasicInfo(CompanyIdentity {
            company_name: "Acme Inc".to_string(),
            company_type: Some(CompanyType::Llc),
            founders: vec![
                Founder::new("Jane Doe", "jane@acme.test", "CEO"),
                Founder::new("Omar Khan", "omar@acme.test", "CTO"),
            ],
        }));
        record
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    fn paragraphs(seq: &InstructionSequence) -> Vec<&str> {
        seq.iter()
            .filter_map(|i| match i {
                DocInstruction::Paragraph { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn outline_lists_all_twenty_one_sections_in_order() {
        let seq = project(&record(), date());
        let headings = seq.headings();
        // Title, TOC, 21 numbered sections, signatures.
        let numbered: Vec<&&str> = headings
            .iter()
            .filter(|h| h.chars().next().is_some_and(|c| c.is_ascii_digit()))
            .collect();
        assert_eq!(numbered.len(), 21);
        assert_eq!(*numbered[0], "1. DEFINITIONS");
        assert_eq!(*numbered[11], "12. TRANSFER OF SHARES");
        assert_eq!(*numbered[20], "21. NOTICES");
        assert_eq!(*headings.last().unwrap(), "SIGNATURES");
    }

    #[test]
    fn page_breaks_hit_the_fixed_milestones() {
        let seq = project(&record(), date());
        // 13 section-group breaks plus the signatures page; no additional
        // terms in the default record.
        assert_eq!(seq.page_break_count(), 14);
    }

    #[test]
    fn additional_terms_section_only_when_present() {
        let mut with_terms = record();
        with_terms.merge_section(SectionPatch::DisputeMisc(DisputeMiscTerms {
            additional_terms: "Side letter applies.".to_string(),
            ..DisputeMiscTerms::default()
        }));

        let without = project(&record(), date());
        let with = project(&with_terms, date());

        assert!(!without.headings().contains(&"22. ADDITIONAL TERMS"));
        assert!(with.headings().contains(&"22. ADDITIONAL TERMS"));
        assert_eq!(with.page_break_count(), without.page_break_count() + 1);
    }

    #[test]
    fn default_flags_number_transfer_subclauses_contiguously() {
        // Defaults: rofr, tag, drag on; shotgun off.
        let seq = project(&record(), date());
        let texts = paragraphs(&seq);
        assert!(texts.contains(&"12.2 Right of First Refusal"));
        assert!(texts.contains(&"12.3 Tag-Along Rights"));
        assert!(texts.contains(&"12.4 Drag-Along Rights"));
        assert!(!texts.iter().any(|t| t.contains("Shotgun Clause")));
    }

    #[test]
    fn lone_drag_along_takes_slot_two() {
        let mut r = record();
        r.merge_section(SectionPatch::TransferExit(TransferExitTerms {
            right_of_first_refusal: false,
            tag_along: false,
            drag_along: true,
            shotgun_clause: false,
            ..TransferExitTerms::default()
        }));
        let seq = project(&r, date());
        let texts = paragraphs(&seq);
        assert!(texts.contains(&"12.2 Drag-Along Rights"));
        assert!(!texts.iter().any(|t| t.starts_with("12.3")));
    }

    #[test]
    fn hybrid_dispute_emits_both_providers_then_deadlock() {
        let seq = project(&record(), date());
        let texts = paragraphs(&seq);
        assert!(texts.contains(&"15.2 Mediation Provider"));
        assert!(texts.contains(&"15.3 Arbitration Provider"));
        assert!(texts.contains(&"15.4 Deadlock Resolution"));
    }

    #[test]
    fn litigation_dispute_keeps_deadlock_at_slot_two() {
        let mut r = record();
        r.merge_section(SectionPatch::DisputeMisc(DisputeMiscTerms {
            resolution_method: ResolutionMethod::Litigation,
            ..DisputeMiscTerms::default()
        }));
        let seq = project(&r, date());
        let texts = paragraphs(&seq);
        assert!(texts.contains(&"15.2 Deadlock Resolution"));
        assert!(!texts.iter().any(|t| t.contains("Mediation Provider")));
        assert!(!texts.iter().any(|t| t.contains("Arbitration Provider")));
    }

    #[test]
    fn company_definition_names_the_company() {
        let seq = project(&record(), date());
        let definition_row = seq
            .iter()
            .filter_map(|i| match i {
                DocInstruction::Table { rows, .. } => rows
                    .iter()
                    .find(|r| r[0] == "Company")
                    .map(|r| r[1].clone()),
                _ => None,
            })
            .next()
            .expect("definitions table present");
        assert_eq!(
            definition_row,
            "means Acme Inc, a limited liability company."
        );
    }

    #[test]
    fn projection_is_deterministic() {
        let r = record();
        assert_eq!(
            project(&r, date()).fingerprint(),
            project(&r, date()).fingerprint()
        );
    }

    #[test]
    fn dangling_contribution_renders_placeholder_founder() {
        use crate::domain::agreement::{CapitalPlan, Contribution, ContributionKind};
        let mut r = record();
        r.merge_section(SectionPatch::Capital(CapitalPlan {
            initial_capital: 100.0,
            contributions: vec![Contribution {
                founder_index: 9,
                kind: ContributionKind::Cash,
                description: "Cash".to_string(),
                value: 100.0,
                valuation_method: String::new(),
            }],
        }));
        let seq = project(&r, date());
        let contribution_rows = seq
            .iter()
            .filter_map(|i| match i {
                DocInstruction::Table { headers, rows } if headers.last().unwrap() == "Value" => {
                    Some(rows)
                }
                _ => None,
            })
            .next()
            .expect("contributions table present");
        assert_eq!(contribution_rows[0][0], "Co-Founder");
    }
}
