//! StepSequence - Centralized ordering logic for wizard steps.
//!
//! The wizard progresses through 12 steps in a fixed order. This module
//! consolidates all ordering logic into a single location so navigation,
//! gating, and progress display agree on the sequence.

use super::WizardStep;

/// Central location for step ordering logic.
pub struct StepSequence;

impl StepSequence {
    /// The canonical order of wizard steps.
    pub const ORDER: [WizardStep; 12] = [
        WizardStep::BasicInfo,
        WizardStep::CompanyFormation,
        WizardStep::Equity,
        WizardStep::Roles,
        WizardStep::Vesting,
        WizardStep::Capital,
        WizardStep::Compensation,
        WizardStep::IpConfidentiality,
        WizardStep::TransferExit,
        WizardStep::DisputeMisc,
        WizardStep::Review,
        WizardStep::Articles,
    ];

    /// Returns all steps in order.
    pub fn all() -> &'static [WizardStep; 12] {
        &Self::ORDER
    }

    /// Returns the number of steps.
    pub fn len() -> usize {
        Self::ORDER.len()
    }

    /// Returns the 0-based index of a step in the sequence.
    #[inline]
    pub fn order_index(step: WizardStep) -> usize {
        Self::ORDER
            .iter()
            .position(|&s| s == step)
            .expect("All WizardStep variants must be in ORDER")
    }

    /// Returns the next step in the sequence, or None if at the end.
    pub fn next(step: WizardStep) -> Option<WizardStep> {
        let idx = Self::order_index(step);
        Self::ORDER.get(idx + 1).copied()
    }

    /// Returns the previous step in the sequence, or None if at the start.
    pub fn previous(step: WizardStep) -> Option<WizardStep> {
        let idx = Self::order_index(step);
        if idx > 0 {
            Self::ORDER.get(idx - 1).copied()
        } else {
            None
        }
    }

    /// Returns the first step in the sequence.
    pub fn first() -> WizardStep {
        Self::ORDER[0]
    }

    /// Returns the last step in the sequence.
    pub fn last() -> WizardStep {
        Self::ORDER[Self::ORDER.len() - 1]
    }

    /// Returns true if this is the first step in the sequence.
    pub fn is_first(step: WizardStep) -> bool {
        step == Self::first()
    }

    /// Returns true if this is the last step in the sequence.
    pub fn is_last(step: WizardStep) -> bool {
        step == Self::last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_contains_all_twelve_steps() {
        assert_eq!(StepSequence::ORDER.len(), 12);
        assert_eq!(StepSequence::len(), 12);
    }

    #[test]
    fn order_index_returns_correct_position() {
        assert_eq!(StepSequence::order_index(WizardStep::BasicInfo), 0);
        assert_eq!(StepSequence::order_index(WizardStep::CompanyFormation), 1);
        assert_eq!(StepSequence::order_index(WizardStep::Equity), 2);
        assert_eq!(StepSequence::order_index(WizardStep::Roles), 3);
        assert_eq!(StepSequence::order_index(WizardStep::Vesting), 4);
        assert_eq!(StepSequence::order_index(WizardStep::Capital), 5);
        assert_eq!(StepSequence::order_index(WizardStep::Compensation), 6);
        assert_eq!(StepSequence::order_index(WizardStep::IpConfidentiality), 7);
        assert_eq!(StepSequence::order_index(WizardStep::TransferExit), 8);
        assert_eq!(StepSequence::order_index(WizardStep::DisputeMisc), 9);
        assert_eq!(StepSequence::order_index(WizardStep::Review), 10);
        assert_eq!(StepSequence::order_index(WizardStep::Articles), 11);
    }

    #[test]
    fn next_returns_subsequent_step() {
        assert_eq!(
            StepSequence::next(WizardStep::BasicInfo),
            Some(WizardStep::CompanyFormation)
        );
        assert_eq!(
            StepSequence::next(WizardStep::Review),
            Some(WizardStep::Articles)
        );
    }

    #[test]
    fn next_returns_none_for_last_step() {
        assert_eq!(StepSequence::next(WizardStep::Articles), None);
    }

    #[test]
    fn previous_returns_preceding_step() {
        assert_eq!(
            StepSequence::previous(WizardStep::Equity),
            Some(WizardStep::CompanyFormation)
        );
    }

    #[test]
    fn previous_returns_none_for_first_step() {
        assert_eq!(StepSequence::previous(WizardStep::BasicInfo), None);
    }

    #[test]
    fn first_and_last_bracket_the_sequence() {
        assert_eq!(StepSequence::first(), WizardStep::BasicInfo);
        assert_eq!(StepSequence::last(), WizardStep::Articles);
        assert!(StepSequence::is_first(WizardStep::BasicInfo));
        assert!(StepSequence::is_last(WizardStep::Articles));
        assert!(!StepSequence::is_last(WizardStep::Review));
    }
}
