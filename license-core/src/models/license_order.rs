use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    BillingCycle, BundleType, Edition, LicenseModel, OrderRecord, OrderType, ValidationError,
};

/// A stored license order, as returned by an [`OrderRepository`](crate::OrderRepository).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseOrder {
    pub id: i64,
    #[serde(flatten)]
    pub order: NewLicenseOrder,
    pub created_at: DateTime<Utc>,
}

/// For creating new orders (no id or timestamp).
///
/// Unlike [`OrderRecord`] every required field is present, so a value of this
/// type is always safe to submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLicenseOrder {
    pub order_type: OrderType,
    pub edition: Edition,
    pub license_model: LicenseModel,
    pub billing_cycle: BillingCycle,
    pub user_count: Option<u32>,
    pub bundle_type: Option<BundleType>,
    pub customer_name: String,
    pub expiration_date: NaiveDate,
    pub notes: String,
    pub price: Decimal,
    pub total: Decimal,
}

impl TryFrom<&OrderRecord> for NewLicenseOrder {
    type Error = ValidationError;

    /// Fails with the first missing field, in wizard step order.
    fn try_from(record: &OrderRecord) -> Result<Self, Self::Error> {
        let order_type = record.require_order_type()?;
        let edition = record.require_edition()?;
        let license_model = record.require_license_model()?;
        record.require_sizing()?;
        let customer_name = record.require_customer_name()?.to_string();
        let expiration_date = record.require_expiration_date()?;

        // Drop whichever sizing field the model does not use.
        let (user_count, bundle_type) = if license_model.uses_bundle() {
            (None, record.bundle_type)
        } else {
            (record.user_count, None)
        };

        Ok(Self {
            order_type,
            edition,
            license_model,
            billing_cycle: record.billing_cycle,
            user_count,
            bundle_type,
            customer_name,
            expiration_date,
            notes: record.notes.trim().to_string(),
            price: record.price,
            total: record.total,
        })
    }
}
