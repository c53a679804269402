use serde::{Deserialize, Serialize};

/// The seven wizard screens, in the only order they can be visited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    #[default]
    OrderType,
    Edition,
    LicenseModel,
    Setup,
    Details,
    Review,
    Checkout,
}

impl WizardStep {
    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::OrderType,
            WizardStep::Edition,
            WizardStep::LicenseModel,
            WizardStep::Setup,
            WizardStep::Details,
            WizardStep::Review,
            WizardStep::Checkout,
        ]
    }

    /// 1-based position, as shown to the user.
    pub fn number(&self) -> u8 {
        match self {
            Self::OrderType => 1,
            Self::Edition => 2,
            Self::LicenseModel => 3,
            Self::Setup => 4,
            Self::Details => 5,
            Self::Review => 6,
            Self::Checkout => 7,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::OrderType => "Order Type",
            Self::Edition => "Edition",
            Self::LicenseModel => "License Model",
            Self::Setup => "License Setup",
            Self::Details => "License Details",
            Self::Review => "Review & Confirm",
            Self::Checkout => "Checkout",
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            Self::OrderType => Some(Self::Edition),
            Self::Edition => Some(Self::LicenseModel),
            Self::LicenseModel => Some(Self::Setup),
            Self::Setup => Some(Self::Details),
            Self::Details => Some(Self::Review),
            Self::Review => Some(Self::Checkout),
            Self::Checkout => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::OrderType => None,
            Self::Edition => Some(Self::OrderType),
            Self::LicenseModel => Some(Self::Edition),
            Self::Setup => Some(Self::LicenseModel),
            Self::Details => Some(Self::Setup),
            Self::Review => Some(Self::Details),
            Self::Checkout => Some(Self::Review),
        }
    }
}
