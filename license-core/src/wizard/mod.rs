//! The seven-step license order wizard.

mod action;
mod session;
mod state;
mod step;

pub use action::WizardAction;
pub use session::{SubmissionError, WizardSession};
pub use state::WizardState;
pub use step::WizardStep;
