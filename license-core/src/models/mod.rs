mod billing_cycle;
mod edition;
mod license_model;
mod license_order;
mod order_record;
mod order_type;
mod validation;

pub use billing_cycle::BillingCycle;
pub use edition::Edition;
pub use license_model::{BundleType, LicenseModel};
pub use license_order::{LicenseOrder, NewLicenseOrder};
pub use order_record::OrderRecord;
pub use order_type::OrderType;
pub use validation::ValidationError;
