use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use license_cli::app::{self, QuoteRequest};
use license_cli::{config, logging};
use license_core::{BillingCycle, BundleType, Edition, LicenseModel};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// License order wizard.
///
/// Walks through ordering a software license, prices it, and submits it to
/// the configured order backend.
#[derive(Debug, Parser)]
struct Cli {
    /// Configuration file. Defaults to `license.toml` when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Order backend to use (`sqlite` or `http`).
    #[arg(long, global = true)]
    backend: Option<String>,

    /// Backend connection string.
    /// For SQLite this is a file path (e.g. `licenses.db`) or `:memory:`;
    /// for HTTP the order service base URL.
    #[arg(long, global = true)]
    connection: Option<String>,

    /// Log level or filter directive, e.g. `debug`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Place an order interactively (the default).
    Order,

    /// Price a configuration without placing an order.
    Quote {
        #[arg(long, value_parser = parse_edition)]
        edition: Edition,

        #[arg(long, value_parser = parse_model)]
        model: LicenseModel,

        /// Named or concurrent users.
        #[arg(long)]
        users: Option<u32>,

        #[arg(long, value_parser = parse_bundle)]
        bundle: Option<BundleType>,

        #[arg(long, value_parser = parse_billing, default_value = "yearly")]
        billing: BillingCycle,
    },

    /// List placed orders ("my licenses").
    Licenses {
        /// Also write the listing to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

// ─── argument parsers ────────────────────────────────────────────────────────

fn wire_value<T: Copy>(
    s: &str,
    parse: fn(&str) -> Option<T>,
    all: &[T],
    name: fn(&T) -> &'static str,
) -> Result<T, String> {
    parse(&s.to_ascii_lowercase()).ok_or_else(|| {
        let names: Vec<_> = all.iter().map(name).collect();
        format!("expected one of: {}", names.join(", "))
    })
}

fn parse_edition(s: &str) -> Result<Edition, String> {
    wire_value(s, Edition::parse, Edition::all(), Edition::as_str)
}

fn parse_model(s: &str) -> Result<LicenseModel, String> {
    wire_value(s, LicenseModel::parse, LicenseModel::all(), LicenseModel::as_str)
}

fn parse_bundle(s: &str) -> Result<BundleType, String> {
    wire_value(s, BundleType::parse, BundleType::all(), BundleType::as_str)
}

fn parse_billing(s: &str) -> Result<BillingCycle, String> {
    wire_value(s, BillingCycle::parse, BillingCycle::all(), BillingCycle::as_str)
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = config::load_or_default(cli.config.as_deref())?;
    if let Some(backend) = cli.backend {
        config.backend.name = backend;
    }
    if let Some(connection) = cli.connection {
        config.backend.connection = connection;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    logging::init_logging(&config.logging);
    debug!(?config, "configuration loaded");

    match cli.command.unwrap_or(Command::Order) {
        Command::Order => {
            let repo = app::open_repository(&config.backend_config()).await?;
            app::run_order(&*repo, io::stdin().lock(), io::stdout()).await?;
        }
        Command::Quote {
            edition,
            model,
            users,
            bundle,
            billing,
        } => {
            let request = QuoteRequest {
                edition,
                license_model: model,
                billing_cycle: billing,
                user_count: users,
                bundle_type: bundle,
            };
            let text = app::render_quote(&request).context("Cannot price this configuration")?;
            print!("{text}");
        }
        Command::Licenses { csv } => {
            let repo = app::open_repository(&config.backend_config()).await?;
            app::run_licenses(&*repo, csv.as_deref(), io::stdout()).await?;
        }
    }

    Ok(())
}
