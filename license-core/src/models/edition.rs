use serde::{Deserialize, Serialize};

/// Product tier. Drives both per-user rates and bundle prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Edition {
    Professional,
    Enterprise,
}

impl Edition {
    pub fn all() -> &'static [Edition] {
        &[Edition::Professional, Edition::Enterprise]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Enterprise => "enterprise",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "professional" => Some(Self::Professional),
            "enterprise" => Some(Self::Enterprise),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Professional => "Professional",
            Self::Enterprise => "Enterprise",
        }
    }
}
