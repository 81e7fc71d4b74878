//! GenerateEmploymentContractHandler - Command handler for employment
//! contracts.
//!
//! Employment contracts are generated from a standalone employee record,
//! independent of the wizard session.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::adapters::document::export_filename;
use crate::domain::agreement::EmployeeRecord;
use crate::domain::document::{employment, DocumentKind};
use crate::ports::{DocumentFileStorage, DocumentRenderer, ExportError, RenderError};

use super::GeneratedDocument;

/// Command to generate an employment contract.
#[derive(Debug, Clone)]
pub struct GenerateEmploymentContractCommand {
    /// The date rendered on the contract.
    pub generated_on: NaiveDate,
}

impl GenerateEmploymentContractCommand {
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

impl Default for GenerateEmploymentContractCommand {
    fn default() -> Self {
        Self::new()
    }
}

/// Error type for employment contract generation.
#[derive(Debug)]
pub enum GenerateEmploymentContractError {
    /// The renderer rejected the instruction sequence.
    Render(RenderError),
    /// The storage adapter failed to save the document.
    Export(ExportError),
}

impl std::fmt::Display for GenerateEmploymentContractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateEmploymentContractError::Render(err) => write!(f, "{}", err),
            GenerateEmploymentContractError::Export(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for GenerateEmploymentContractError {}

impl From<RenderError> for GenerateEmploymentContractError {
    fn from(err: RenderError) -> Self {
        GenerateEmploymentContractError::Render(err)
    }
}

impl From<ExportError> for GenerateEmploymentContractError {
    fn from(err: ExportError) -> Self {
        GenerateEmploymentContractError::Export(err)
    }
}

/// Handler for generating employment contracts.
pub struct GenerateEmploymentContractHandler {
    renderer: Arc<dyn DocumentRenderer>,
    storage: Arc<dyn DocumentFileStorage>,
}

impl GenerateEmploymentContractHandler {
    /// Creates a new handler.
    pub fn new(renderer: Arc<dyn DocumentRenderer>, storage: Arc<dyn DocumentFileStorage>) -> Self {
        Self { renderer, storage }
    }

    /// Generates the contract for one employee.
    #[tracing::instrument(skip(self, employee), fields(employee = %employee.full_name))]
    pub fn handle(
        &self,
        employee: &EmployeeRecord,
        command: GenerateEmploymentContractCommand,
    ) -> Result<GeneratedDocument, GenerateEmploymentContractError> {
        let sequence = employment::project(employee, command.generated_on);
        let fingerprint = sequence.fingerprint();

        let contents = self.renderer.render(&sequence)?;
        let filename = export_filename(
            &employee.full_name,
            DocumentKind::EmploymentContract,
            self.renderer.extension(),
        );
        let path = self.storage.save(&filename, &contents)?;

        tracing::info!(%filename, instructions = sequence.len(), "contract generated");

        Ok(GeneratedDocument {
            kind: DocumentKind::EmploymentContract,
            filename,
            path,
            fingerprint,
            generated_on: command.generated_on,
        })
    }
}
