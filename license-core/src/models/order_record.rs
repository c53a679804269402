use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{BillingCycle, BundleType, Edition, LicenseModel, OrderType, ValidationError};
use crate::calculations::pricing::{self, PricingInput, Seats};

/// The license order being assembled by the wizard.
///
/// Every field starts empty except `billing_cycle`, which defaults to yearly.
/// `price` and `total` are derived and only ever written by [`OrderRecord::reprice`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_type: Option<OrderType>,
    pub edition: Option<Edition>,
    pub license_model: Option<LicenseModel>,
    pub billing_cycle: BillingCycle,
    /// Only meaningful for named and concurrent licenses.
    pub user_count: Option<u32>,
    /// Only meaningful for bundled licenses.
    pub bundle_type: Option<BundleType>,
    pub customer_name: String,
    pub expiration_date: Option<NaiveDate>,
    pub notes: String,
    pub price: Decimal,
    pub total: Decimal,
}

impl OrderRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pricing inputs, or `None` while edition, model or sizing is missing.
    pub fn pricing_input(&self) -> Option<PricingInput> {
        let edition = self.edition?;
        let seats = match self.license_model? {
            LicenseModel::Bundled => Seats::Bundled(self.bundle_type?),
            LicenseModel::Named => Seats::Named(self.user_count.filter(|n| *n >= 1)?),
            LicenseModel::Concurrent => Seats::Concurrent(self.user_count.filter(|n| *n >= 1)?),
        };
        Some(PricingInput { edition, seats })
    }

    /// Recomputes `price` and `total` from the current inputs.
    ///
    /// Incomplete inputs price at zero.
    pub fn reprice(&mut self) {
        self.price = self
            .pricing_input()
            .map(|input| pricing::quote(&input, self.billing_cycle).price)
            .unwrap_or(Decimal::ZERO);
        self.total = self.price;
    }

    pub fn require_order_type(&self) -> Result<OrderType, ValidationError> {
        self.order_type.ok_or(ValidationError::MissingOrderType)
    }

    pub fn require_edition(&self) -> Result<Edition, ValidationError> {
        self.edition.ok_or(ValidationError::MissingEdition)
    }

    pub fn require_license_model(&self) -> Result<LicenseModel, ValidationError> {
        self.license_model.ok_or(ValidationError::MissingLicenseModel)
    }

    /// Checks the sizing field that matches the chosen license model.
    pub fn require_sizing(&self) -> Result<(), ValidationError> {
        match self.require_license_model()? {
            LicenseModel::Bundled => self
                .bundle_type
                .map(|_| ())
                .ok_or(ValidationError::MissingBundleType),
            LicenseModel::Named | LicenseModel::Concurrent => match self.user_count {
                Some(n) if n >= 1 => Ok(()),
                _ => Err(ValidationError::InvalidUserCount),
            },
        }
    }

    pub fn require_customer_name(&self) -> Result<&str, ValidationError> {
        let name = self.customer_name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingCustomerName);
        }
        Ok(name)
    }

    pub fn require_expiration_date(&self) -> Result<NaiveDate, ValidationError> {
        self.expiration_date
            .ok_or(ValidationError::MissingExpirationDate)
    }
}
