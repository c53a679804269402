//! Wiring between the command line, the backends and the console.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Context;
use license_core::backend::{BackendConfig, RepositoryRegistry};
use license_core::calculations::quote;
use license_core::{
    BillingCycle, BundleType, Edition, LicenseModel, LicenseOrder, OrderRecord, OrderRepository,
    ValidationError, WizardSession, WizardState, describe_configuration,
};
use license_db_sqlite::SqliteRepositoryFactory;
use license_http::HttpRepositoryFactory;
use tracing::{debug, info};

use crate::console::Console;
use crate::csv_export;
use crate::utils::format_currency;
use crate::views::render_licenses;

/// Registry with every backend this binary ships.
pub fn build_registry() -> RepositoryRegistry {
    let mut registry = RepositoryRegistry::new();
    registry.register(Box::new(SqliteRepositoryFactory));
    registry.register(Box::new(HttpRepositoryFactory));
    registry
}

pub async fn open_repository(config: &BackendConfig) -> anyhow::Result<Box<dyn OrderRepository>> {
    debug!("connecting to {} backend", config.backend);
    build_registry()
        .create(config)
        .await
        .with_context(|| format!("Failed to open {} backend", config.backend))
}

/// Runs the interactive wizard until an order is placed or the user quits.
pub async fn run_order<R: BufRead, W: Write>(
    repo: &dyn OrderRepository,
    input: R,
    output: W,
) -> anyhow::Result<Option<LicenseOrder>> {
    let mut console = Console::new(input, output, WizardSession::new(WizardState::default()));
    let placed = console.run(repo).await?;
    match &placed {
        Some(order) => info!(order_id = order.id, "order placed"),
        None => info!("wizard closed without an order"),
    }
    Ok(placed)
}

/// One-shot price for a configuration, outside the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    pub edition: Edition,
    pub license_model: LicenseModel,
    pub billing_cycle: BillingCycle,
    pub user_count: Option<u32>,
    pub bundle_type: Option<BundleType>,
}

/// Prices `request` and renders the breakdown.
pub fn render_quote(request: &QuoteRequest) -> Result<String, ValidationError> {
    let record = OrderRecord {
        edition: Some(request.edition),
        license_model: Some(request.license_model),
        billing_cycle: request.billing_cycle,
        user_count: request.user_count,
        bundle_type: request.bundle_type,
        ..OrderRecord::new()
    };
    record.require_sizing()?;
    let input = record
        .pricing_input()
        .ok_or(ValidationError::InvalidUserCount)?;
    let result = quote(&input, record.billing_cycle);

    let mut out = format!(
        "Configuration: {}\nEdition:       {}\nBilling:       {}\nBase price:    {}\n",
        describe_configuration(&record),
        request.edition.label(),
        request.billing_cycle.label(),
        format_currency(result.base_price),
    );
    if !result.discount.is_zero() {
        out.push_str(&format!("Discount:      -{}\n", format_currency(result.discount)));
    }
    out.push_str(&format!("Price:         {}\n", format_currency(result.price)));
    Ok(out)
}

/// Prints "my licenses" and optionally exports them as CSV.
pub async fn run_licenses<W: Write>(
    repo: &dyn OrderRepository,
    csv_path: Option<&Path>,
    mut output: W,
) -> anyhow::Result<()> {
    let orders = repo.list_orders().await.context("Failed to list licenses")?;
    write!(output, "{}", render_licenses(&orders))?;

    if let Some(path) = csv_path {
        csv_export::export_to_file(path, &orders)
            .with_context(|| format!("Failed to export licenses to {}", path.display()))?;
        info!(count = orders.len(), path = %path.display(), "exported licenses");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use license_core::RepositoryError;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registry_has_both_backends() {
        assert_eq!(build_registry().available_backends(), vec!["http", "sqlite"]);
    }

    #[tokio::test]
    async fn unknown_backend_is_reported() {
        let config = BackendConfig {
            backend: "oracle".to_string(),
            connection_string: String::new(),
        };

        let err = open_repository(&config).await.err().expect("should fail");

        let text = format!("{err:#}");
        assert!(text.contains("Failed to open oracle backend"));
        assert!(text.contains("available: http, sqlite"));
    }

    #[tokio::test]
    async fn default_backend_opens_empty_sqlite() {
        let repo = open_repository(&BackendConfig::default()).await.unwrap();

        assert!(repo.list_orders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn http_backend_needs_a_web_address() {
        let config = BackendConfig {
            backend: "http".to_string(),
            connection_string: "licenses.db".to_string(),
        };

        let result = build_registry().create(&config).await;

        assert!(matches!(result, Err(RepositoryError::Configuration(_))));
    }

    #[test]
    fn quote_shows_discount_for_yearly_users() {
        let request = QuoteRequest {
            edition: Edition::Professional,
            license_model: LicenseModel::Named,
            billing_cycle: BillingCycle::Yearly,
            user_count: Some(5),
            bundle_type: None,
        };

        assert_eq!(
            render_quote(&request).unwrap(),
            "Configuration: 5 named users\n\
             Edition:       Professional\n\
             Billing:       Yearly (15% off)\n\
             Base price:    $9,850.00\n\
             Discount:      -$1,477.50\n\
             Price:         $8,373.00\n"
        );
    }

    #[test]
    fn quote_needs_bundle_for_bundled_model() {
        let request = QuoteRequest {
            edition: Edition::Enterprise,
            license_model: LicenseModel::Bundled,
            billing_cycle: BillingCycle::Monthly,
            user_count: Some(5),
            bundle_type: None,
        };

        assert_eq!(render_quote(&request), Err(ValidationError::MissingBundleType));
    }

    #[test]
    fn quote_rejects_zero_users() {
        let request = QuoteRequest {
            edition: Edition::Enterprise,
            license_model: LicenseModel::Concurrent,
            billing_cycle: BillingCycle::Monthly,
            user_count: Some(0),
            bundle_type: None,
        };

        assert_eq!(render_quote(&request), Err(ValidationError::InvalidUserCount));
    }
}
