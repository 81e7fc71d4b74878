//! GenerateArticlesHandler - Command handler for articles of association.
//!
//! Runs after the review step: the agreement gates must be satisfied, then
//! the articles projector consumes the record plus the session's parallel
//! articles parameters.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::adapters::document::export_filename;
use crate::domain::document::{articles, DocumentKind};
use crate::domain::foundation::ValidationError;
use crate::domain::wizard::{blockers, WizardSession, WizardStep};
use crate::ports::{DocumentFileStorage, DocumentRenderer, ExportError, RenderError};

use super::GeneratedDocument;

/// Command to generate articles of association.
#[derive(Debug, Clone)]
pub struct GenerateArticlesCommand {
    /// The incorporation date rendered on the document.
    pub generated_on: NaiveDate,
}

impl GenerateArticlesCommand {
    /// Command dated today.
    pub fn new() -> Self {
        Self {
            generated_on: Local::now().date_naive(),
        }
    }

    /// Command with an explicit date.
    pub fn on_date(generated_on: NaiveDate) -> Self {
        Self { generated_on }
    }
}

impl Default for GenerateArticlesCommand {
    fn default() -> Self {
        Self::new()
    }
}

/// Error type for articles generation.
#[derive(Debug)]
pub enum GenerateArticlesError {
    /// One or more step gates still report blockers.
    Blocked(Vec<ValidationError>),
    /// The renderer rejected the instruction sequence.
    Render(RenderError),
    /// The storage adapter failed to save the document.
    Export(ExportError),
}

impl std::fmt::Display for GenerateArticlesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateArticlesError::Blocked(blockers) => {
                write!(f, "Generation blocked by {} unmet step gate(s)", blockers.len())
            }
            GenerateArticlesError::Render(err) => write!(f, "{}", err),
            GenerateArticlesError::Export(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for GenerateArticlesError {}

impl From<RenderError> for GenerateArticlesError {
    fn from(err: RenderError) -> Self {
        GenerateArticlesError::Render(err)
    }
}

impl From<ExportError> for GenerateArticlesError {
    fn from(err: ExportError) -> Self {
        GenerateArticlesError::Export(err)
    }
}

/// Handler for generating articles of association.
pub struct GenerateArticlesHandler {
    renderer: Arc<dyn DocumentRenderer>,
    storage: Arc<dyn DocumentFileStorage>,
}

impl GenerateArticlesHandler {
    /// Creates a new handler.
    pub fn new(renderer: Arc<dyn DocumentRenderer>, storage: Arc<dyn DocumentFileStorage>) -> Self {
        Self { renderer, storage }
    }

    /// Generates the articles from the session's record and parameters.
    #[tracing::instrument(skip(self, session), fields(session_id = %session.id()))]
    pub fn handle(
        &self,
        session: &WizardSession,
        command: GenerateArticlesCommand,
    ) -> Result<GeneratedDocument, GenerateArticlesError> {
        let record = session.record();

        let unmet = blockers(WizardStep::Review, record);
        if !unmet.is_empty() {
            tracing::debug!(blocker_count = unmet.len(), "generation blocked");
            return Err(GenerateArticlesError::Blocked(unmet));
        }

        let params = session.articles();
        let sequence = articles::project(record, params, command.generated_on);
        let fingerprint = sequence.fingerprint();

        let contents = self.renderer.render(&sequence)?;
        // The articles step carries its own company name copy; fall back to
        // the agreement's when the step never edited it.
        let name = if params.company_name.is_empty() {
            &record.company.company_name
        } else {
            &params.company_name
        };
        let filename = export_filename(
            name,
            DocumentKind::ArticlesOfAssociation,
            self.renderer.extension(),
        );
        let path = self.storage.save(&filename, &contents)?;

        tracing::info!(%filename, instructions = sequence.len(), "articles generated");

        Ok(GeneratedDocument {
            kind: DocumentKind::ArticlesOfAssociation,
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
        ArticlesParams, CompanyFormation, CompanyIdentity, CompanyType, Founder, GoverningLaw,
        SectionPatch,
    };

    fn ready_session() -> WizardSession {
        let mut session = WizardSession::new();
        session.merge_section(SectionPatch::BasicInfo(CompanyIdentity {
            company_name: "Acme Inc".to_string(),
            company_type: Some(CompanyType::Llc),
            founders: vec![Founder::new("Jane Doe", "jane@acme.test", "CEO")],
        }));
        session.merge_section(SectionPatch::Formation(CompanyFormation {
            business_purpose: "Widgets".to_string(),
            registered_address: "1 Main St".to_string(),
            jurisdiction: Some(GoverningLaw::Delaware),
        }));
        session
    }

    fn handler(dir: &std::path::Path) -> GenerateArticlesHandler {
        GenerateArticlesHandler::new(
            Arc::new(MarkdownRenderer::new()),
            Arc::new(LocalFileStorage::new(dir)),
        )
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    #[test]
    fn generates_articles_file_with_convention_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = ready_session();
        session.set_articles(ArticlesParams {
            company_name: "Acme Inc".to_string(),
            ..ArticlesParams::default()
        });

        let generated = handler(dir.path())
            .handle(&session, GenerateArticlesCommand::on_date(date()))
            .unwrap();

        assert_eq!(generated.filename, "Acme_Inc_Articles_of_Association.md");
        assert!(generated.path.exists());
    }

    #[test]
    fn falls_back_to_agreement_company_name() {
        let dir = tempfile::tempdir().unwrap();
        let generated = handler(dir.path())
            .handle(&ready_session(), GenerateArticlesCommand::on_date(date()))
            .unwrap();

        assert_eq!(generated.filename, "Acme_Inc_Articles_of_Association.md");
    }

    #[test]
    fn incomplete_record_is_blocked() {
        let dir = tempfile::tempdir().unwrap();
        let err = handler(dir.path())
            .handle(&WizardSession::new(), GenerateArticlesCommand::on_date(date()))
            .unwrap_err();
        assert!(matches!(err, GenerateArticlesError::Blocked(_)));
    }
}
