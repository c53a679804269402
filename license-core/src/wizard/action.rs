use chrono::NaiveDate;

use crate::{BillingCycle, BundleType, Edition, LicenseModel, OrderType};

/// Everything that can happen to a wizard, replayable through
/// [`WizardState::reduce`](super::WizardState::reduce).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    SetOrderType(OrderType),
    SetEdition(Edition),
    SetLicenseModel(LicenseModel),
    SetBillingCycle(BillingCycle),
    SetUserCount(u32),
    SetBundleType(BundleType),
    SetCustomerName(String),
    SetExpirationDate(Option<NaiveDate>),
    SetNotes(String),
    Advance,
    Retreat,
    Reset,
}
