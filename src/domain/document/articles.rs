//! Articles of association projector.
//!
//! Consumes the agreement record (for the founder list) plus the parallel
//! ArticlesParams record. Guarantee companies swap the liability clause and
//! drop the share-capital article entirely; the optional share sub-clauses
//! keep their fixed numbers (gaps allowed).

use chrono::NaiveDate;

use crate::domain::agreement::{AgreementRecord, AoaCompanyType, ArticlesParams};

use super::prose::{self, fmt_amount};
use super::{DocumentBuilder, InstructionSequence};

/// Projects the record and articles parameters into articles of association.
pub fn project(
    record: &AgreementRecord,
    params: &ArticlesParams,
    generated_on: NaiveDate,
) -> InstructionSequence {
    let mut doc = DocumentBuilder::new();

    doc.heading("ARTICLES OF ASSOCIATION");
    doc.heading(format!("OF {}", params.company_name.to_uppercase()));
    doc.paragraph(format!(
        "Date of Incorporation: {}",
        prose::format_date(generated_on)
    ));

    preliminary_and_definitions(&mut doc, params);
    liability_of_members(&mut doc, params);
    if params
        .company_type
        .map_or(true, |t| t.has_share_capital())
    {
        share_capital(&mut doc, params);
    }

    doc.page_break();
    directors(&mut doc, params);
    members(&mut doc);
    general_meetings(&mut doc, params);

    doc.page_break();
    administrative(&mut doc, params);
    finance(&mut doc, params);
    dispute_resolution(&mut doc, params);
    if !params.additional_provisions.is_empty() {
        doc.heading("10. ADDITIONAL PROVISIONS");
        doc.paragraph_wrapped(params.additional_provisions.clone(), 150);
    }

    doc.page_break();
    signatures(&mut doc, record);

    doc.finish()
}

fn preliminary_and_definitions(doc: &mut DocumentBuilder, params: &ArticlesParams) {
    doc.heading("1. PRELIMINARY AND DEFINITIONS");
    doc.paragraph("1.1 In these Articles, unless the context requires otherwise:");
    doc.table(
        vec!["Term".to_string(), "Definition".to_string()],
        vec![
            vec![
                "the Act".to_string(),
                "means the Companies Act 2006".to_string(),
            ],
            vec![
                "the Articles".to_string(),
                format!(
                    "means these articles of association of {}",
                    params.company_name
                ),
            ],
            vec![
                "Director".to_string(),
                "means a director of the Company".to_string(),
            ],
            vec![
                "Member".to_string(),
                "means a member of the Company".to_string(),
            ],
            vec![
                "Ordinary Resolution".to_string(),
                "has the meaning given in section 282 of the Act".to_string(),
            ],
            vec![
                "Special Resolution".to_string(),
                "has the meaning given in section 283 of the Act".to_string(),
            ],
        ],
    );
}

fn liability_of_members(doc: &mut DocumentBuilder, params: &ArticlesParams) {
    doc.heading("2. LIABILITY OF MEMBERS");
    if params.company_type == Some(AoaCompanyType::Guarantee) {
        doc.paragraph_wrapped(
            format!(
                "2.1 The liability of each Member is limited to {}, being the amount that each \
                 Member undertakes to contribute to the assets of the Company in the event of \
                 its being wound up while he is a Member or within one year after he ceases to \
                 be a Member.",
                fmt_amount(params.guarantee_amount)
            ),
            170,
        );
    } else {
        doc.paragraph(
            "2.1 The liability of the Members is limited to the amount, if any, unpaid on the \
             shares held by them.",
        );
    }
}

fn share_capital(doc: &mut DocumentBuilder, params: &ArticlesParams) {
    doc.heading("3. SHARE CAPITAL");
    doc.paragraph(format!(
        "3.1 The share capital of the Company at the time of adoption of these Articles is {} \
         divided into {} ordinary shares of {} each.",
        fmt_amount(params.share_capital),
        fmt_amount(params.share_count()),
        fmt_amount(params.share_value)
    ));

    doc.paragraph("3.2 Transfer of Shares:");
    doc.paragraph_wrapped(prose::aoa_transfer_clause(params.transfer_restrictions), 150);

    // Optional sub-clauses keep their fixed numbers.
    if params.pre_emption_rights {
        doc.paragraph("3.3 Pre-emption Rights:");
        doc.paragraph_wrapped(
            "The Directors shall not allot shares to any person unless they have first been \
             offered to the existing Members in proportion to their existing holdings.",
            150,
        );
    }
    if params.drag_along_rights {
        doc.paragraph("3.4 Drag-Along Rights:");
        doc.paragraph_wrapped(
            "If the holders of 75% or more of the shares wish to transfer their shares to a \
             third party, they may require all other Members to sell their shares to the same \
             third party on the same terms.",
            150,
        );
    }
    if params.tag_along_rights {
        doc.paragraph("3.5 Tag-Along Rights:");
        doc.paragraph_wrapped(
            "If any Member proposes to transfer shares to a third party, all other Members \
             shall be entitled to participate in the sale on the same terms in proportion to \
             their holdings.",
            150,
        );
    }
    if params.bad_leaver_provisions {
        doc.paragraph("3.6 Bad Leaver Provisions:");
        doc.paragraph_wrapped(
            "If a Member who is also an employee or director ceases to be employed or hold \
             office in circumstances where they are a 'Bad Leaver' (as defined in any \
             shareholders' agreement), they shall be deemed to have offered their shares for \
             sale at the lower of fair value and subscription price.",
            150,
        );
    }
}

fn directors(doc: &mut DocumentBuilder, params: &ArticlesParams) {
    doc.heading("4. DIRECTORS");
    doc.paragraph("4.1 Directors' General Authority:");
    doc.paragraph_wrapped(
        "Subject to the Articles, the Directors are responsible for the management of the \
         Company's business, for which purpose they may exercise all the powers of the Company.",
        150,
    );
    doc.paragraph("4.2 Directors' Decision-Making:");
    doc.paragraph(format!(
        "4.2.1 The quorum for Directors' meetings shall be {} Directors.",
        params.director_quorum
    ));
    doc.paragraph_wrapped(
        "4.2.2 Decisions of the Directors must be either a majority decision at a meeting or a \
         decision taken in accordance with Article 4.3.",
        150,
    );
    doc.paragraph("4.3 Unanimous Decisions:");
    doc.paragraph_wrapped(
        "A decision of the Directors is taken in accordance with this Article when all eligible \
         Directors indicate to each other by any means that they share a common view on a \
         matter.",
        150,
    );
    doc.paragraph("4.4 Calling a Directors' Meeting:");
    doc.paragraph_wrapped(
        "Any Director may call a Directors' meeting by giving notice of the meeting to the \
         Directors or by authorising the Company Secretary to give such notice.",
        150,
    );
    doc.paragraph("4.5 Conflicts of Interest:");
    doc.paragraph_wrapped(
        "A Director must declare the nature and extent of any interest, direct or indirect, \
         which he has in a proposed transaction or arrangement with the Company or in any \
         transaction or arrangement entered into by the Company which has not previously been \
         declared.",
        150,
    );
}

fn members(doc: &mut DocumentBuilder) {
    doc.heading("5. MEMBERS AND MEMBERSHIP");
    doc.paragraph("5.1 Becoming and Ceasing to be a Member:");
    doc.paragraph_wrapped(
        "A person becomes a Member when that person's name is entered in the register of \
         Members and ceases to be a Member when that person's name is removed from the register \
         of Members.",
        150,
    );
}

fn general_meetings(doc: &mut DocumentBuilder, params: &ArticlesParams) {
    doc.heading("6. GENERAL MEETINGS");
    doc.paragraph("6.1 Attendance and Speaking at General Meetings:");
    doc.paragraph_wrapped(
        "A person is able to exercise the right to speak at a general meeting when that person \
         is in a position to communicate to all those attending the meeting, during the \
         meeting, any information or opinions which that person has on the business of the \
         meeting.",
        150,
    );
    doc.paragraph("6.2 Quorum for General Meetings:");
    doc.paragraph_wrapped(
        format!(
            "No business other than the appointment of the chairman of the meeting is to be \
             transacted at a general meeting if the persons attending it do not constitute a \
             quorum of at least {} Members.",
            params.member_quorum
        ),
        150,
    );
}

fn administrative(doc: &mut DocumentBuilder, params: &ArticlesParams) {
    doc.heading("7. ADMINISTRATIVE PROVISIONS");
    doc.paragraph("7.1 Means of Communication to be Used:");
    doc.paragraph_wrapped(
        "Any notice, document or other information shall be deemed served on or delivered to \
         the intended recipient when properly addressed and sent or supplied by prepaid post, \
         electronic mail, or personal delivery.",
        150,
    );
    doc.paragraph("7.2 Company Seals:");
    doc.paragraph_wrapped(
        "A common seal may only be used by the authority of the Directors. The Directors may \
         decide by what means and in what form any common seal is to be used.",
        150,
    );
    doc.paragraph("7.3 Registered Office:");
    doc.paragraph(format!(
        "The Company's registered office is at {}.",
        if params.registered_office.is_empty() {
            "[Address to be determined]"
        } else {
            params.registered_office.as_str()
        }
    ));
}

fn finance(doc: &mut DocumentBuilder, params: &ArticlesParams) {
    doc.heading("8. FINANCE, ACCOUNTS & AUDIT");
    doc.paragraph("8.1 Financial Year:");
    doc.paragraph(format!(
        "The Company's financial year end shall be {}.",
        params.financial_year
    ));
    doc.paragraph("8.2 Dividend Policy:");
    doc.paragraph_wrapped(prose::dividend_policy_clause(params.dividend_policy), 150);
    doc.paragraph("8.3 Audit Requirements:");
    doc.paragraph_wrapped(
        prose::audit_requirement_clause(params.audit_requirement),
        150,
    );
}

fn dispute_resolution(doc: &mut DocumentBuilder, params: &ArticlesParams) {
    doc.heading("9. DISPUTE RESOLUTION");
    doc.paragraph_wrapped(prose::aoa_dispute_clause(params.dispute_resolution), 150);
}

fn signatures(doc: &mut DocumentBuilder, record: &AgreementRecord) {
    doc.heading("SIGNATURES");
    doc.paragraph_wrapped(
        "The subscribers to these Articles of Association wish to form a company pursuant to \
         these Articles and agree to become Members of the Company:",
        170,
    );
    for founder in record.founders() {
        doc.signature_line(format!("Name: {}", founder.name));
    }
    doc.paragraph_wrapped(
        "LEGAL DISCLAIMER: These Articles of Association are provided as a template and should \
         be reviewed by a qualified legal professional before adoption.",
        170,
    );
}
