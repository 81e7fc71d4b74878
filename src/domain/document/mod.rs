//! Document module - layout instruction model and the projectors.
//!
//! Projectors are pure functions from a record (plus the generation date)
//! to an ordered instruction sequence. An external renderer turns the
//! sequence into a paginated file; nothing here does I/O.

mod clauses;
mod instruction;
mod kind;
mod prose;

pub mod articles;
pub mod comprehensive;
pub mod employment;
pub mod preliminary;

pub use clauses::{numbered_clauses, ConditionalClause};
pub use instruction::{DocInstruction, DocumentBuilder, InstructionSequence};
pub use kind::DocumentKind;
pub use prose::fmt_amount;
