use async_trait::async_trait;

use license_core::backend::{BackendConfig, RepositoryFactory};
use license_core::{OrderRepository, RepositoryError};

use crate::repository::SqliteOrderRepository;

/// [`RepositoryFactory`] for SQLite.
///
/// Register this with a [`license_core::backend::RepositoryRegistry`] to make
/// the `"sqlite"` backend available:
///
/// ```rust,no_run
/// use license_core::backend::RepositoryRegistry;
/// use license_db_sqlite::SqliteRepositoryFactory;
///
/// let mut registry = RepositoryRegistry::new();
/// registry.register(Box::new(SqliteRepositoryFactory));
/// ```
pub struct SqliteRepositoryFactory;

#[async_trait]
impl RepositoryFactory for SqliteRepositoryFactory {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    /// Open the database described by `config.connection_string`.
    ///
    /// Accepted connection-string values:
    /// * A bare file path, e.g. `"licenses.db"`.  The file is created if it
    ///   does not exist.
    /// * `":memory:"` for an ephemeral in-memory database.
    ///
    /// Migrations run on every open.
    async fn create(
        &self,
        config: &BackendConfig,
    ) -> Result<Box<dyn OrderRepository>, RepositoryError> {
        let repo = SqliteOrderRepository::new(&config.connection_string)
            .await
            .map_err(|e| RepositoryError::Connection(format!("{e:#}")))?;
        repo.run_migrations()
            .await
            .map_err(|e| RepositoryError::Database(format!("{e:#}")))?;
        Ok(Box::new(repo))
    }
}
