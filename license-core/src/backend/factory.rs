use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use super::repository::{OrderRepository, RepositoryError};

/// Where orders are stored: a backend name and a backend-specific address.
///
/// | backend  | connection_string                  |
/// |----------|------------------------------------|
/// | `sqlite` | `licenses.db`, `:memory:`          |
/// | `http`   | `https://licence.example.com/api`  |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub backend: String,
    /// Handed to the backend's factory as is.
    pub connection_string: String,
}

/// An unconfigured binary keeps orders in a throwaway SQLite database.
impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            backend: "sqlite".to_string(),
            connection_string: ":memory:".to_string(),
        }
    }
}

/// Opens an [`OrderRepository`] for one backend.
#[async_trait]
pub trait RepositoryFactory: Send + Sync {
    /// Name matched against [`BackendConfig::backend`].
    fn backend_name(&self) -> &'static str;

    async fn create(
        &self,
        config: &BackendConfig,
    ) -> Result<Box<dyn OrderRepository>, RepositoryError>;
}

/// Order backends the binary was built with, looked up by name.
#[derive(Default)]
pub struct RepositoryRegistry {
    factories: HashMap<&'static str, Box<dyn RepositoryFactory>>,
}

impl RepositoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a backend; a later factory with the same name wins.
    pub fn register(&mut self, factory: Box<dyn RepositoryFactory>) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Sorted backend names, for help text and error messages.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Opens the repository for `config.backend`.
    ///
    /// An unregistered name is a [`RepositoryError::Configuration`] that lists
    /// the backends on offer. Factory errors pass through.
    pub async fn create(
        &self,
        config: &BackendConfig,
    ) -> Result<Box<dyn OrderRepository>, RepositoryError> {
        let Some(factory) = self.factories.get(config.backend.as_str()) else {
            return Err(RepositoryError::Configuration(format!(
                "unknown backend '{}'; available: {}",
                config.backend,
                self.available_backends().join(", ")
            )));
        };
        debug!(backend = factory.backend_name(), "opening order repository");
        factory.create(config).await
    }
}
