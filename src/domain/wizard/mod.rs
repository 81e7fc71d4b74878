//! Wizard module - step ordering, the session aggregate, and step gates.

mod gates;
mod session;
mod step;
mod step_sequence;

pub use gates::{blockers, step_is_complete};
pub use session::WizardSession;
pub use step::WizardStep;
pub use step_sequence::StepSequence;
