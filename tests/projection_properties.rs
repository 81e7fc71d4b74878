//! Property tests for the document guarantees: equity derivation,
//! contiguous sub-clause numbering, capital gating, and idempotence.

use chrono::NaiveDate;
use proptest::prelude::*;

use founders_pact::domain::agreement::{
    AgreementRecord, CapitalPlan, CompanyIdentity, CompanyType, Contribution, ContributionKind,
    DisputeMiscTerms, Founder, ResolutionMethod, SectionPatch, TransferExitTerms,
};
use founders_pact::domain::document::{comprehensive, preliminary, DocInstruction};
use founders_pact::domain::wizard::{step_is_complete, WizardStep};

fn generation_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
}

fn record_with_founder_count(count: usize) -> AgreementRecord {
    let mut record = AgreementRecord::new();
    record.merge_section(SectionPatch::BasicInfo(CompanyIdentity {
        company_name: "Acme Inc".to_string(),
        company_type: Some(CompanyType::Llc),
        founders: (0..count)
            .map(|i| {
                Founder::new(
                    format!("Founder {}", i + 1),
                    format!("founder{}@acme.test", i + 1),
                    "Founder",
                )
            })
            .collect(),
    }));
    record
}

/// The equity table rows of a sequence ("Equity Percentage" column).
fn equity_rows(seq: &founders_pact::domain::document::InstructionSequence) -> Vec<Vec<String>> {
    seq.iter()
        .find_map(|i| match i {
            DocInstruction::Table { headers, rows }
                if headers.last().map(String::as_str) == Some("Equity Percentage") =>
            {
                Some(rows.clone())
            }
            _ => None,
        })
        .expect("equity table present")
}

/// Transfer sub-clause labels ("12.N Title") from the comprehensive output.
fn transfer_subclause_labels(record: &AgreementRecord) -> Vec<String> {
    comprehensive::project(record, generation_date())
        .iter()
        .filter_map(|i| match i {
            DocInstruction::Paragraph { text, .. }
                if text.starts_with("12.") && !text.starts_with("12.1") =>
            {
                Some(text.clone())
            }
            _ => None,
        })
        .collect()
}

proptest! {
    /// For all founder counts N >= 1, equal distribution renders N rows of
    /// 100/N at one decimal. One-decimal rounding drifts by at most 0.05
    /// per row, so the rendered total stays within 0.05 * N of 100.
    #[test]
    fn equal_distribution_rows_sum_to_hundred(count in 1usize..=12) {
        let record = record_with_founder_count(count);
        let seq = preliminary::project(&record, generation_date());
        let rows = equity_rows(&seq);

        prop_assert_eq!(rows.len(), count);

        let expected = format!("{:.1}%", 100.0 / count as f64);
        let mut total = 0.0;
        for row in &rows {
            prop_assert_eq!(row[1].as_str(), expected.as_str());
            total += row[1].trim_end_matches('%').parse::<f64>().unwrap();
        }
        prop_assert!((total - 100.0).abs() <= 0.05 * count as f64 + 1e-9);
    }

    /// The comprehensive agreement derives the same equity table
    /// independently of the preliminary one.
    #[test]
    fn both_agreement_variants_agree_on_equity(count in 1usize..=12) {
        let record = record_with_founder_count(count);
        let from_preliminary = equity_rows(&preliminary::project(&record, generation_date()));
        let from_comprehensive = equity_rows(&comprehensive::project(&record, generation_date()));
        prop_assert_eq!(from_preliminary, from_comprehensive);
    }

    /// For every combination of the four protective-clause flags, the
    /// emitted sub-clause numbers are contiguous starting at 12.2.
    #[test]
    fn transfer_subclauses_number_contiguously(
        rofr in any::<bool>(),
        tag in any::<bool>(),
        drag in any::<bool>(),
        shotgun in any::<bool>(),
    ) {
        let mut record = record_with_founder_count(2);
        record.merge_section(SectionPatch::TransferExit(TransferExitTerms {
            right_of_first_refusal: rofr,
            tag_along: tag,
            drag_along: drag,
            shotgun_clause: shotgun,
            ..TransferExitTerms::default()
        }));

        let labels = transfer_subclause_labels(&record);
        let enabled = [rofr, tag, drag, shotgun].iter().filter(|&&f| f).count();
        prop_assert_eq!(labels.len(), enabled);

        for (offset, label) in labels.iter().enumerate() {
            let expected_prefix = format!("12.{} ", offset + 2);
            prop_assert!(
                label.starts_with(&expected_prefix),
                "label '{}' should start with '{}'", label, expected_prefix
            );
        }
    }

    /// The capital gate blocks exactly when the contribution sum differs
    /// from the declared initial capital.
    #[test]
    fn capital_gate_blocks_iff_sum_mismatch(
        values in proptest::collection::vec(1u32..=50_000, 1..6),
        declared_extra in 0u32..=2,
    ) {
        let mut record = record_with_founder_count(2);
        let total: u32 = values.iter().sum();
        let declared = total + declared_extra;

        record.merge_section(SectionPatch::Capital(CapitalPlan {
            initial_capital: declared as f64,
            contributions: values
                .iter()
                .enumerate()
                .map(|(i, &v)| Contribution {
                    founder_index: i % 2,
                    kind: ContributionKind::Cash,
                    description: format!("Contribution {}", i + 1),
                    value: v as f64,
                    valuation_method: String::new(),
                })
                .collect(),
        }));

        let complete = step_is_complete(WizardStep::Capital, &record);
        prop_assert_eq!(complete, declared_extra == 0);
    }

    /// Projection is a pure function: same record and date, same bytes.
    #[test]
    fn projection_is_idempotent(
        count in 1usize..=6,
        method_index in 0usize..4,
    ) {
        let methods = [
            ResolutionMethod::Mediation,
            ResolutionMethod::Arbitration,
            ResolutionMethod::Hybrid,
            ResolutionMethod::Litigation,
        ];
        let mut record = record_with_founder_count(count);
        record.merge_section(SectionPatch::DisputeMisc(DisputeMiscTerms {
            resolution_method: methods[method_index],
            ..DisputeMiscTerms::default()
        }));

        let first = comprehensive::project(&record, generation_date());
        let second = comprehensive::project(&record, generation_date());
        prop_assert_eq!(first.fingerprint(), second.fingerprint());
        prop_assert_eq!(first, second);
    }
}

/// Two equal founders show exactly 50.0% each, summing to exactly 100.
#[test]
fn two_equal_founders_render_fifty_percent_each() {
    let record = record_with_founder_count(2);
    let rows = equity_rows(&preliminary::project(&record, generation_date()));
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][1], "50.0%");
    assert_eq!(rows[1][1], "50.0%");
}

/// Dispute provider sub-clauses per resolution method, exhaustively.
#[test]
fn dispute_subclause_numbering_per_method() {
    let cases = [
        (ResolutionMethod::Litigation, vec!["15.2 Deadlock Resolution"]),
        (
            ResolutionMethod::Mediation,
            vec!["15.2 Mediation Provider", "15.3 Deadlock Resolution"],
        ),
        (
            ResolutionMethod::Arbitration,
            vec!["15.2 Arbitration Provider", "15.3 Deadlock Resolution"],
        ),
        (
            ResolutionMethod::Hybrid,
            vec![
                "15.2 Mediation Provider",
                "15.3 Arbitration Provider",
                "15.4 Deadlock Resolution",
            ],
        ),
    ];

    for (method, expected) in cases {
        let mut record = record_with_founder_count(2);
        record.merge_section(SectionPatch::DisputeMisc(DisputeMiscTerms {
            resolution_method: method,
            ..DisputeMiscTerms::default()
        }));

        let labels: Vec<String> = comprehensive::project(&record, generation_date())
            .iter()
            .filter_map(|i| match i {
                DocInstruction::Paragraph { text, .. }
                    if text.starts_with("15.") && !text.starts_with("15.1") =>
                {
                    Some(text.clone())
                }
                _ => None,
            })
            .collect();
        assert_eq!(labels, expected, "method {:?}", method);
    }
}
