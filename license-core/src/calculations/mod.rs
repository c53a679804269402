//! Pricing and derived display values for license orders.

pub mod checkout;
pub mod common;
pub mod configuration;
pub mod pricing;

pub use checkout::CheckoutSummary;
pub use configuration::{describe_configuration, describe_order_configuration};
pub use pricing::{PriceQuote, PricingInput, Seats, quote};
