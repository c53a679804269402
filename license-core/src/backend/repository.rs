use async_trait::async_trait;
use thiserror::Error;

use crate::models::{LicenseOrder, NewLicenseOrder};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The backend answered but refused the request.
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Where license orders are created and listed.
///
/// The checkout step is the only caller of `create_order`; `list_orders`
/// backs the "my licenses" view.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create_order(&self, order: NewLicenseOrder) -> Result<LicenseOrder, RepositoryError>;

    async fn get_order(&self, id: i64) -> Result<LicenseOrder, RepositoryError>;

    /// All orders, newest first.
    async fn list_orders(&self) -> Result<Vec<LicenseOrder>, RepositoryError>;
}
