//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the Founders Pact domain.

mod equity_percent;
mod errors;
mod ids;
mod timestamp;

pub use equity_percent::{EquityPercent, EQUITY_SUM_TOLERANCE};
pub use errors::ValidationError;
pub use ids::{RecordId, SessionId};
pub use timestamp::Timestamp;
