pub mod factory;
pub mod repository;

pub use factory::{BackendConfig, RepositoryFactory, RepositoryRegistry};
pub use repository::{OrderRepository, RepositoryError};
