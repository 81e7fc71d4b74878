//! Document Renderer Port - instruction sequence to file bytes.
//!
//! Projectors emit layout instructions; a renderer owns actual pagination,
//! measurement, and the output format. The bundled adapter renders
//! markdown; a PDF-drawing implementation plugs in behind the same trait.

use thiserror::Error;

use crate::domain::document::InstructionSequence;

/// Port for rendering an instruction sequence into a document file.
///
/// # Contract
///
/// Implementations must be deterministic: the same instruction sequence
/// yields byte-identical output. Pagination hints (`PageBreak`, paragraph
/// `max_width`) may be honored or ignored as the format allows, but
/// instruction order must be preserved.
pub trait DocumentRenderer: Send + Sync {
    /// Renders the sequence into file contents.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the sequence cannot be expressed in the
    /// target format.
    fn render(&self, document: &InstructionSequence) -> Result<Vec<u8>, RenderError>;

    /// File extension for the produced format, without the dot.
    fn extension(&self) -> &'static str;
}

/// Errors that can occur during rendering.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    /// An instruction has no representation in the target format.
    #[error("Unsupported instruction: {reason}")]
    Unsupported { reason: String },

    /// Internal renderer failure.
    #[error("Rendering failed: {0}")]
    Internal(String),
}

impl RenderError {
    /// Creates an unsupported-instruction error.
    pub fn unsupported(reason: impl Into<String>) -> Self {
        Self::Unsupported {
            reason: reason.into(),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_their_reason() {
        let err = RenderError::unsupported("nested tables");
        assert!(err.to_string().contains("nested tables"));

        let err = RenderError::internal("out of glyphs");
        assert!(err.to_string().contains("out of glyphs"));
    }

    #[test]
    fn renderer_is_object_safe() {
        fn check<T: DocumentRenderer + ?Sized>() {}
        check::<dyn DocumentRenderer>();
    }
}
