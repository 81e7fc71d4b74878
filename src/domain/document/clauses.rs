//! Contiguous numbering for conditional sub-clauses.
//!
//! Optional sub-clauses (transfer protections, dispute providers) are
//! declared as an ordered list of (enabled, title, body) entries. Numbering
//! filters by the flag and counts up from the starting sub-number, so the
//! emitted labels never have gaps regardless of which subset is enabled.

/// One candidate sub-clause in fixed priority order.
#[derive(Debug, Clone)]
pub struct ConditionalClause {
    pub enabled: bool,
    pub title: &'static str,
    pub body: String,
}

impl ConditionalClause {
    /// Creates a candidate sub-clause.
    pub fn new(enabled: bool, title: &'static str, body: impl Into<String>) -> Self {
        Self {
            enabled,
            title,
            body: body.into(),
        }
    }
}

/// Numbers the enabled clauses contiguously.
///
/// `base` is the section number and `first_sub` the first sub-number to
/// assign (e.g. base 12, first_sub 2 yields "12.2", "12.3", ...). Returns
/// `(numbered_title, body)` pairs for the enabled clauses only.
pub fn numbered_clauses(
    base: u32,
    first_sub: u32,
    clauses: Vec<ConditionalClause>,
) -> Vec<(String, String)> {
    clauses
        .into_iter()
        .filter(|c| c.enabled)
        .enumerate()
        .map(|(offset, clause)| {
            let label = format!("{}.{} {}", base, first_sub + offset as u32, clause.title);
            (label, clause.body)
        })
        .collect()
}
