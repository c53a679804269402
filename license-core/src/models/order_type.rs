use serde::{Deserialize, Serialize};

/// Kind of order being placed. Chosen on the first wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    #[serde(rename = "demo-license")]
    Demo,
    #[serde(rename = "new-license")]
    New,
    #[serde(rename = "renewal")]
    Renewal,
    #[serde(rename = "upgrade")]
    Upgrade,
}

impl OrderType {
    pub fn all() -> &'static [OrderType] {
        &[
            OrderType::Demo,
            OrderType::New,
            OrderType::Renewal,
            OrderType::Upgrade,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Demo => "demo-license",
            Self::New => "new-license",
            Self::Renewal => "renewal",
            Self::Upgrade => "upgrade",
        }
    }

    /// Accepts the wire strings plus the bare `demo` / `new` shorthands.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "demo-license" | "demo" => Some(Self::Demo),
            "new-license" | "new" => Some(Self::New),
            "renewal" => Some(Self::Renewal),
            "upgrade" => Some(Self::Upgrade),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Demo => "Demo License",
            Self::New => "New License",
            Self::Renewal => "License Renewal",
            Self::Upgrade => "License Upgrade",
        }
    }

    /// Demo orders only get a badge; they never change step gating.
    pub fn is_demo(&self) -> bool {
        matches!(self, Self::Demo)
    }
}
