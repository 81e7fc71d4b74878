//! Export filename convention.
//!
//! `{CompanyOrPersonName with whitespace runs replaced by underscores}_{DocumentKind}.{extension}`,
//! e.g. `Acme_Inc_Co-Founder_Agreement.pdf`.

use crate::domain::document::DocumentKind;

/// Builds the export filename for a document.
pub fn export_filename(name: &str, kind: DocumentKind, extension: &str) -> String {
    format!(
        "{}_{}.{}",
        underscore_whitespace(name),
        kind.file_label(),
        extension
    )
}

/// Replaces each run of whitespace with a single underscore.
fn underscore_whitespace(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push('_');
                in_whitespace = true;
            }
        } else {
            out.push(ch);
            in_whitespace = false;
        }
    }
    out
}
