use async_trait::async_trait;

use license_core::backend::{BackendConfig, RepositoryFactory};
use license_core::{OrderRepository, RepositoryError};

use crate::repository::HttpOrderRepository;

/// [`RepositoryFactory`] for the remote order service.
///
/// `connection_string` is the service base URL, e.g.
/// `https://licence.example.com/api`.
pub struct HttpRepositoryFactory;

#[async_trait]
impl RepositoryFactory for HttpRepositoryFactory {
    fn backend_name(&self) -> &'static str {
        "http"
    }

    async fn create(
        &self,
        config: &BackendConfig,
    ) -> Result<Box<dyn OrderRepository>, RepositoryError> {
        let repo = HttpOrderRepository::new(&config.connection_string)?;
        Ok(Box::new(repo))
    }
}
