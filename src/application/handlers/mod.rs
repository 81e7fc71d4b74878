//! Generation command handlers.
//!
//! Each handler verifies the relevant gates, projects the record, renders
//! through the DocumentRenderer port, and stores the result through the
//! DocumentFileStorage port.

mod generate_agreement;
mod generate_articles;
mod generate_employment;

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::domain::document::DocumentKind;

pub use generate_agreement::{
    AgreementVariant, GenerateAgreementCommand, GenerateAgreementError, GenerateAgreementHandler,
};
pub use generate_articles::{
    GenerateArticlesCommand, GenerateArticlesError, GenerateArticlesHandler,
};
pub use generate_employment::{
    GenerateEmploymentContractCommand, GenerateEmploymentContractError,
    GenerateEmploymentContractHandler,
};

/// Result of a successful generation action.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    /// Which document was generated.
    pub kind: DocumentKind,
    /// Export filename, `{Name}_{Kind}.{extension}`.
    pub filename: String,
    /// Where the storage adapter put the file.
    pub path: PathBuf,
    /// Fingerprint of the projected instruction sequence.
    pub fingerprint: String,
    /// The date rendered on the document.
    pub generated_on: NaiveDate,
}
