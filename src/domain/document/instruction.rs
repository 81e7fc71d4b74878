//! Layout instructions and the builder projectors write through.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// One draw operation for the external renderer.
///
/// The renderer owns vertical measurement and exact positioning; the
/// instruction stream only says what to draw and in what order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "op")]
pub enum DocInstruction {
    /// A numbered (or standalone) section heading.
    SectionHeading { title: String },
    /// Body text; `max_width` caps the line width in renderer units.
    Paragraph {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_width: Option<u32>,
    },
    /// A table with a header row.
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Begin a new page before the next instruction.
    PageBreak,
    /// A signature line with its label.
    SignatureLine { label: String },
}

/// The ordered instruction list a projector produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionSequence {
    instructions: Vec<DocInstruction>,
}

impl InstructionSequence {
    /// Returns the instructions in order.
    pub fn instructions(&self) -> &[DocInstruction] {
        &self.instructions
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// True when no instructions were emitted.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Iterates over the instructions.
    pub fn iter(&self) -> impl Iterator<Item = &DocInstruction> {
        self.instructions.iter()
    }

    /// SHA-256 fingerprint of the serialized sequence.
    ///
    /// Two projections of the same record on the same date produce the same
    /// fingerprint; callers use this for change detection.
    pub fn fingerprint(&self) -> String {
        let serialized = serde_json::to_vec(&self.instructions).unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(&serialized);
        format!("{:x}", hasher.finalize())
    }

    /// All section headings, in order. Convenient for outline assertions.
    pub fn headings(&self) -> Vec<&str> {
        self.instructions
            .iter()
            .filter_map(|i| match i {
                DocInstruction::SectionHeading { title } => Some(title.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of page breaks in the sequence.
    pub fn page_break_count(&self) -> usize {
        self.instructions
            .iter()
            .filter(|i| matches!(i, DocInstruction::PageBreak))
            .count()
    }
}

impl IntoIterator for InstructionSequence {
    type Item = DocInstruction;
    type IntoIter = std::vec::IntoIter<DocInstruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.into_iter()
    }
}

/// Accumulates instructions during projection.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    instructions: Vec<DocInstruction>,
}

impl DocumentBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits a section heading.
    pub fn heading(&mut self, title: impl Into<String>) {
        self.instructions.push(DocInstruction::SectionHeading {
            title: title.into(),
        });
    }

    /// Emits a paragraph.
    pub fn paragraph(&mut self, text: impl Into<String>) {
        self.instructions.push(DocInstruction::Paragraph {
            text: text.into(),
            max_width: None,
        });
    }

    /// Emits a width-capped paragraph.
    pub fn paragraph_wrapped(&mut self, text: impl Into<String>, max_width: u32) {
        self.instructions.push(DocInstruction::Paragraph {
            text: text.into(),
            max_width: Some(max_width),
        });
    }

    /// Emits a table.
    pub fn table(&mut self, headers: Vec<String>, rows: Vec<Vec<String>>) {
        self.instructions.push(DocInstruction::Table { headers, rows });
    }

    /// Emits a page break.
    pub fn page_break(&mut self) {
        self.instructions.push(DocInstruction::PageBreak);
    }

    /// Emits a signature line.
    pub fn signature_line(&mut self, label: impl Into<String>) {
        self.instructions.push(DocInstruction::SignatureLine {
            label: label.into(),
        });
    }

    /// Finishes the build.
    pub fn finish(self) -> InstructionSequence {
        InstructionSequence {
            instructions: self.instructions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InstructionSequence {
        let mut doc = DocumentBuilder::new();
        doc.heading("1. DEFINITIONS");
        doc.paragraph("In this Agreement:");
        doc.table(
            vec!["Term".to_string(), "Definition".to_string()],
            vec![vec!["Company".to_string(), "Acme Inc".to_string()]],
        );
        doc.page_break();
        doc.signature_line("Co-Founder: Jane Doe");
        doc.finish()
    }

    #[test]
    fn builder_preserves_order() {
        let seq = sample();
        assert_eq!(seq.len(), 5);
        assert!(matches!(
            seq.instructions()[0],
            DocInstruction::SectionHeading { .. }
        ));
        assert!(matches!(seq.instructions()[3], DocInstruction::PageBreak));
    }

    #[test]
    fn fingerprint_is_stable() {
        assert_eq!(sample().fingerprint(), sample().fingerprint());
    }

    #[test]
    fn fingerprint_changes_with_content() {
        let a = sample();
        let mut builder = DocumentBuilder::new();
        builder.heading("1. DEFINITIONS");
        let b = builder.finish();
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn headings_extracts_titles_in_order() {
        let mut doc = DocumentBuilder::new();
        doc.heading("1. FIRST");
        doc.paragraph("body");
        doc.heading("2. SECOND");
        let seq = doc.finish();
        assert_eq!(seq.headings(), vec!["1. FIRST", "2. SECOND"]);
    }

    #[test]
    fn wrapped_paragraph_skips_width_when_absent() {
        let mut doc = DocumentBuilder::new();
        doc.paragraph("plain");
        doc.paragraph_wrapped("wrapped", 150);
        let json = serde_json::to_string(&doc.finish()).unwrap();
        assert_eq!(json.matches("max_width").count(), 1);
    }
}
