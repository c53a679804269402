//! `license.toml` configuration.
//!
//! ```toml
//! [backend]
//! name = "sqlite"            # or "http"
//! connection = "licenses.db" # file path, ":memory:", or the order service URL
//!
//! [logging]
//! level = "info"
//! file = "license-orders.log"
//! console = true
//! ```
//!
//! Every key is optional. Command-line flags override the file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use license_core::backend::BackendConfig;
use serde::Deserialize;

/// File read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "license.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend: BackendSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BackendSection {
    pub name: String,
    pub connection: String,
}

impl Default for BackendSection {
    fn default() -> Self {
        Self {
            name: "sqlite".to_string(),
            connection: "licenses.db".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub file: Option<PathBuf>,
    pub console: bool,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            console: true,
        }
    }
}

impl AppConfig {
    pub fn backend_config(&self) -> BackendConfig {
        BackendConfig {
            backend: self.backend.name.clone(),
            connection_string: self.backend.connection.clone(),
        }
    }
}

/// Reads and parses a TOML configuration file.
pub fn load_config(path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Loads `path` when given; otherwise [`DEFAULT_CONFIG_FILE`] if present, or defaults.
///
/// An explicitly named file must exist.
pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) => load_config(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                load_config(default_path)
            } else {
                Ok(AppConfig::default())
            }
        }
    }
}
