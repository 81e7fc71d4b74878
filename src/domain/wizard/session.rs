//! Wizard session aggregate.
//!
//! A session owns one in-progress AgreementRecord plus the articles
//! parameters and the navigation cursor. It lives for one sitting and is
//! never persisted; all state is discarded with the session.

use serde::{Deserialize, Serialize};

use crate::domain::agreement::{AgreementRecord, ArticlesParams, SectionPatch};
use crate::domain::foundation::{SessionId, Timestamp, ValidationError};

use super::{blockers, StepSequence, WizardStep};

/// One user's pass through the wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardSession {
    id: SessionId,
    record: AgreementRecord,
    articles: ArticlesParams,
    current_step: WizardStep,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl WizardSession {
    /// Starts a fresh session at the first step with an empty record.
    pub fn new() -> Self {
        let now = Timestamp::now();
        Self {
            id: SessionId::new(),
            record: AgreementRecord::new(),
            articles: ArticlesParams::default(),
            current_step: StepSequence::first(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Read-only view of the accumulated record.
    pub fn record(&self) -> &AgreementRecord {
        &self.record
    }

    /// Read-only view of the articles parameters.
    pub fn articles(&self) -> &ArticlesParams {
        &self.articles
    }

    /// The current step.
    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    /// Zero-based index of the current step.
    pub fn current_step_index(&self) -> usize {
        StepSequence::order_index(self.current_step)
    }

    /// When the session was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// When the session was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Shallow-merges a section patch into the record.
    ///
    /// Inputs are already validated by the calling step; merging never
    /// fails and does not move the cursor.
    pub fn merge_section(&mut self, patch: SectionPatch) {
        self.record.merge_section(patch);
        self.touch();
    }

    /// Replaces the articles parameters (the articles step's own state).
    pub fn set_articles(&mut self, params: ArticlesParams) {
        self.articles = params;
        self.touch();
    }

    /// Moves to the next step; a no-op at the last step.
    pub fn advance(&mut self) {
        if let Some(next) = StepSequence::next(self.current_step) {
            self.current_step = next;
            self.touch();
        }
    }

    /// Moves to the previous step; a no-op at the first step.
    pub fn retreat(&mut self) {
        if let Some(previous) = StepSequence::previous(self.current_step) {
            self.current_step = previous;
            self.touch();
        }
    }

    /// Everything blocking the current step from advancing.
    pub fn current_blockers(&self) -> Vec<ValidationError> {
        blockers(self.current_step, &self.record)
    }

    /// Whether the current step's gate is satisfied.
    pub fn can_advance(&self) -> bool {
        self.current_blockers().is_empty()
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}
