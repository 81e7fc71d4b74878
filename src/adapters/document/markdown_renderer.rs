//! Markdown renderer adapter.
//!
//! The in-repo implementation of the DocumentRenderer port: deterministic
//! markdown for previews, tests, and plain-text exports. A PDF-drawing
//! collaborator implements the same port externally.

use crate::domain::document::{DocInstruction, InstructionSequence};
use crate::ports::{DocumentRenderer, RenderError};

/// Renders instruction sequences as markdown.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Creates a new markdown renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders to a string. Markdown reflows text, so paragraph width
    /// hints are not encoded in the output.
    pub fn render_to_string(&self, document: &InstructionSequence) -> String {
        let mut out = String::new();

        for instruction in document.iter() {
            match instruction {
                DocInstruction::SectionHeading { title } => {
                    out.push_str("## ");
                    out.push_str(title);
                    out.push_str("\n\n");
                }
                DocInstruction::Paragraph { text, .. } => {
                    out.push_str(text);
                    out.push_str("\n\n");
                }
                DocInstruction::Table { headers, rows } => {
                    out.push_str(&table_row(headers));
                    out.push('|');
                    for _ in headers {
                        out.push_str("---|");
                    }
                    out.push('\n');
                    for row in rows {
                        out.push_str(&table_row(row));
                    }
                    out.push('\n');
                }
                DocInstruction::PageBreak => {
                    out.push_str("---\n\n");
                }
                DocInstruction::SignatureLine { label } => {
                    out.push_str(label);
                    out.push_str(": _______________________    Date: ____________\n\n");
                }
            }
        }

        out
    }
}

fn table_row(cells: &[String]) -> String {
    let mut row = String::from("|");
    for cell in cells {
        row.push(' ');
        // Pipes would break the table grid.
        row.push_str(&cell.replace('|', "\\|"));
        row.push_str(" |");
    }
    row.push('\n');
    row
}

impl DocumentRenderer for MarkdownRenderer {
    fn render(&self, document: &InstructionSequence) -> Result<Vec<u8>, RenderError> {
        Ok(self.render_to_string(document).into_bytes())
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}
