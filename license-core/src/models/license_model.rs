use serde::{Deserialize, Serialize};

/// How seats are counted for a license.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LicenseModel {
    Named,
    Concurrent,
    Bundled,
}

impl LicenseModel {
    pub fn all() -> &'static [LicenseModel] {
        &[
            LicenseModel::Named,
            LicenseModel::Concurrent,
            LicenseModel::Bundled,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Named => "named",
            Self::Concurrent => "concurrent",
            Self::Bundled => "bundled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "named" => Some(Self::Named),
            "concurrent" => Some(Self::Concurrent),
            "bundled" => Some(Self::Bundled),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Named => "Named User",
            Self::Concurrent => "Concurrent User",
            Self::Bundled => "Bundled",
        }
    }

    /// Bundled licenses are sized by [`BundleType`]; the others by user count.
    pub fn uses_bundle(&self) -> bool {
        matches!(self, Self::Bundled)
    }
}

/// A fixed pairing of named and concurrent seats sold as one SKU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BundleType {
    Small,
    Medium,
    Large,
}

impl BundleType {
    pub fn all() -> &'static [BundleType] {
        &[BundleType::Small, BundleType::Medium, BundleType::Large]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }

    /// `(named_users, concurrent_users)` included in the bundle.
    pub fn seats(&self) -> (u32, u32) {
        match self {
            Self::Small => (5, 2),
            Self::Medium => (10, 5),
            Self::Large => (20, 10),
        }
    }
}
