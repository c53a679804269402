pub mod backend;
pub mod calculations;
pub mod models;
pub mod wizard;

pub use backend::repository::{OrderRepository, RepositoryError};
pub use calculations::{describe_configuration, describe_order_configuration};
pub use models::*;
pub use wizard::{SubmissionError, WizardAction, WizardSession, WizardState, WizardStep};
