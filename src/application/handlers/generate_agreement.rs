//! GenerateAgreementHandler - Command handler for agreement generation.
//!
//! Generates the preliminary or comprehensive co-founder agreement from a
//! wizard session. Generation refuses to run while any step gate up to the
//! review step still reports blockers; the blockers are returned as data,
//! never thrown.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::adapters::document::export_filename;
use crate::domain::document::{comprehensive, preliminary, DocumentKind};
use crate::domain::foundation::ValidationError;
use crate::domain::wizard::{blockers, WizardSession, WizardStep};
use crate::ports::{DocumentFileStorage, DocumentRenderer, ExportError, RenderError};

use super::GeneratedDocument;

/// Which agreement document to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgreementVariant {
    /// Short summary agreement.
    Preliminary,
    /// Full 21-section agreement.
    Comprehensive,
}

impl AgreementVariant {
    fn kind(&self) -> DocumentKind {
        match self {
            AgreementVariant::Preliminary => DocumentKind::PreliminaryAgreement,
            AgreementVariant::Comprehensive => DocumentKind::ComprehensiveAgreement,
        }
    }
}

/// Command to generate an agreement document.
#[derive(Debug, Clone)]
pub struct GenerateAgreementCommand {
    /// Which variant to produce.
    pub variant: AgreementVariant,
    /// The date rendered on the document.
    pub generated_on: NaiveDate,
}

impl GenerateAgreementCommand {
    /// Command dated today.
    pub fn new(variant: AgreementVariant) -> Self {
        Self {
            variant,
            generated_on: Local::now().date_naive(),
        }
    }

    /// Command with an explicit date.
    pub fn on_date(variant: AgreementVariant, generated_on: NaiveDate) -> Self {
        Self {
            variant,
            generated_on,
        }
    }
}

/// Error type for agreement generation.
#[derive(Debug)]
pub enum GenerateAgreementError {
    /// One or more step gates still report blockers.
    Blocked(Vec<ValidationError>),
    /// The renderer rejected the instruction sequence.
    Render(RenderError),
    /// The storage adapter failed to save the document.
    Export(ExportError),
}

impl std::fmt::Display for GenerateAgreementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateAgreementError::Blocked(blockers) => {
                write!(f, "Generation blocked by {} unmet step gate(s)", blockers.len())
            }
            GenerateAgreementError::Render(err) => write!(f, "{}", err),
            GenerateAgreementError::Export(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for GenerateAgreementError {}

impl From<RenderError> for GenerateAgreementError {
    fn from(err: RenderError) -> Self {
        GenerateAgreementError::Render(err)
    }
}

impl From<ExportError> for GenerateAgreementError {
    fn from(err: ExportError) -> Self {
        GenerateAgreementError::Export(err)
    }
}

/// Handler for generating agreement documents.
pub struct GenerateAgreementHandler {
    renderer: Arc<dyn DocumentRenderer>,
    storage: Arc<dyn DocumentFileStorage>,
}

impl GenerateAgreementHandler {
    /// Creates a new handler.
    pub fn new(renderer: Arc<dyn DocumentRenderer>, storage: Arc<dyn DocumentFileStorage>) -> Self {
        Self { renderer, storage }
    }

    /// Generates the requested agreement from the session's record.
    #[tracing::instrument(skip(self, session), fields(session_id = %session.id()))]
    pub fn handle(
        &self,
        session: &WizardSession,
        command: GenerateAgreementCommand,
    ) -> Result<GeneratedDocument, GenerateAgreementError> {
        let record = session.record();

        let unmet = blockers(WizardStep::Review, record);
        if !unmet.is_empty() {
            tracing::debug!(blocker_count = unmet.len(), "generation blocked");
            return Err(GenerateAgreementError::Blocked(unmet));
        }

        let kind = command.variant.kind();
        let sequence = match command.variant {
            AgreementVariant::Preliminary => preliminary::project(record, command.generated_on),
            AgreementVariant::Comprehensive => comprehensive::project(record, command.generated_on),
        };
        let fingerprint = sequence.fingerprint();

        let contents = self.renderer.render(&sequence)?;
        let filename = export_filename(
            &record.company.company_name,
            kind,
            self.renderer.extension(),
        );
        let path = self.storage.save(&filename, &contents)?;

        tracing::info!(%filename, instructions = sequence.len(), "agreement generated");

        Ok(GeneratedDocument {
            kind,
            filename,
            path,
            fingerprint,
            generated_on: command.generated_on,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::document::{LocalFileStorage, MarkdownRenderer};
    use crate::domain::agreement::{
        CompanyFormation, CompanyIdentity, CompanyType, Founder, GoverningLaw, SectionPatch,
    };

    fn ready_session() -> WizardSession {
        let mut session = WizardSession::new();
        session.merge_section(SectionPatch::BasicInfo(CompanyIdentity {
            company_name: "Acme Inc".to_string(),
            company_type: Some(CompanyType::Llc),
            founders: vec![
                Founder::new("Jane Doe", "jane@acme.test", "CEO"),
                Founder::new("Omar Khan", "omar@acme.test", "CTO"),
            ],
        }));
        session.merge_section(SectionPatch::Formation(CompanyFormation {
            business_purpose: "Widget manufacture".to_string(),
            registered_address: "1 Main St".to_string(),
            jurisdiction: Some(GoverningLaw::Delaware),
        }));
        session
    }

    fn handler(dir: &std::path::Path) -> GenerateAgreementHandler {
        GenerateAgreementHandler::new(
            Arc::new(MarkdownRenderer::new()),
            Arc::new(LocalFileStorage::new(dir)),
        )
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    #[test]
    fn generates_comprehensive_agreement_file() {
        let dir = tempfile::tempdir().unwrap();
        let generated = handler(dir.path())
            .handle(
                &ready_session(),
                GenerateAgreementCommand::on_date(AgreementVariant::Comprehensive, date()),
            )
            .unwrap();

        assert_eq!(generated.filename, "Acme_Inc_Co-Founder_Agreement.md");
        assert!(generated.path.exists());
        assert_eq!(generated.kind, DocumentKind::ComprehensiveAgreement);
    }

    #[test]
    fn incomplete_record_is_blocked_with_gate_errors() {
        let dir = tempfile::tempdir().unwrap();
        let session = WizardSession::new();

        let err = handler(dir.path())
            .handle(
                &session,
                GenerateAgreementCommand::on_date(AgreementVariant::Comprehensive, date()),
            )
            .unwrap_err();

        match err {
            GenerateAgreementError::Blocked(blockers) => assert!(!blockers.is_empty()),
            other => panic!("expected Blocked, got {}", other),
        }
    }

    #[test]
    fn same_session_and_date_give_same_fingerprint() {
        let dir = tempfile::tempdir().unwrap();
        let session = ready_session();
        let handler = handler(dir.path());

        let first = handler
            .handle(
                &session,
                GenerateAgreementCommand::on_date(AgreementVariant::Comprehensive, date()),
            )
            .unwrap();
        let second = handler
            .handle(
                &session,
                GenerateAgreementCommand::on_date(AgreementVariant::Comprehensive, date()),
            )
            .unwrap();

        assert_eq!(first.fingerprint, second.fingerprint);
    }

    #[test]
    fn preliminary_and_comprehensive_share_a_filename() {
        let dir = tempfile::tempdir().unwrap();
        let session = ready_session();
        let handler = handler(dir.path());

        let preliminary = handler
            .handle(
                &session,
                GenerateAgreementCommand::on_date(AgreementVariant::Preliminary, date()),
            )
            .unwrap();
        let comprehensive = handler
            .handle(
                &session,
                GenerateAgreementCommand::on_date(AgreementVariant::Comprehensive, date()),
            )
            .unwrap();

        assert_eq!(preliminary.filename, comprehensive.filename);
        assert_ne!(preliminary.fingerprint, comprehensive.fingerprint);
    }
}
