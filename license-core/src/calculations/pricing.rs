//! License pricing.
//!
//! Prices come from two fixed yearly tables:
//!
//! | Model      | Professional | Enterprise |
//! |------------|-------------:|-----------:|
//! | Named      | 1970 / user  | 2470 / user |
//! | Concurrent | 1800 / user  | 2300 / user |
//!
//! | Bundle | Professional | Enterprise |
//! |--------|-------------:|-----------:|
//! | Small  | 13200        | 16500      |
//! | Medium | 21120        | 26400      |
//! | Large  | 31680        | 39600      |
//!
//! Per-user licenses billed yearly get a 15% discount. Monthly billing uses the
//! same undiscounted base; it is not divided by twelve. Bundle prices are flat
//! and never discounted. Every price is rounded to a whole currency unit.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use license_core::calculations::pricing::{quote, PricingInput, Seats};
//! use license_core::{BillingCycle, Edition};
//!
//! let input = PricingInput { edition: Edition::Enterprise, seats: Seats::Named(4) };
//! let result = quote(&input, BillingCycle::Yearly);
//!
//! // 2470 × 4 × 0.85 = 8398
//! assert_eq!(result.price, dec!(8398));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::round_whole;
use crate::{BillingCycle, BundleType, Edition};

/// How the license is sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seats {
    Named(u32),
    Concurrent(u32),
    Bundled(BundleType),
}

/// Everything the price depends on except the billing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingInput {
    pub edition: Edition,
    pub seats: Seats,
}

/// Result of pricing an order, with the intermediate values for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Undiscounted yearly price.
    pub base_price: Decimal,
    /// Amount taken off `base_price` before rounding.
    pub discount: Decimal,
    /// Final price, rounded to a whole unit.
    pub price: Decimal,
}

/// Yearly rate per named or concurrent user.
///
/// Returns `None` for bundles, which are priced by [`bundle_price`].
pub fn per_user_rate(seats: Seats, edition: Edition) -> Option<Decimal> {
    let rate = match (seats, edition) {
        (Seats::Named(_), Edition::Enterprise) => 2470,
        (Seats::Named(_), Edition::Professional) => 1970,
        (Seats::Concurrent(_), Edition::Enterprise) => 2300,
        (Seats::Concurrent(_), Edition::Professional) => 1800,
        (Seats::Bundled(_), _) => return None,
    };
    Some(Decimal::from(rate))
}

/// Flat yearly price for a bundle.
pub fn bundle_price(edition: Edition, bundle: BundleType) -> Decimal {
    let price = match (edition, bundle) {
        (Edition::Enterprise, BundleType::Small) => 16500,
        (Edition::Enterprise, BundleType::Medium) => 26400,
        (Edition::Enterprise, BundleType::Large) => 39600,
        (Edition::Professional, BundleType::Small) => 13200,
        (Edition::Professional, BundleType::Medium) => 21120,
        (Edition::Professional, BundleType::Large) => 31680,
    };
    Decimal::from(price)
}

/// Fraction taken off per-user prices for the given billing cycle.
pub fn billing_discount_rate(billing_cycle: BillingCycle) -> Decimal {
    match billing_cycle {
        BillingCycle::Yearly => Decimal::new(15, 2),
        BillingCycle::Monthly => Decimal::ZERO,
    }
}

/// Prices an order. Never fails: every input combination has a price.
pub fn quote(input: &PricingInput, billing_cycle: BillingCycle) -> PriceQuote {
    let result = match input.seats {
        Seats::Bundled(bundle) => {
            let base_price = bundle_price(input.edition, bundle);
            PriceQuote {
                base_price,
                discount: Decimal::ZERO,
                price: round_whole(base_price),
            }
        }
        Seats::Named(users) | Seats::Concurrent(users) => {
            let rate = per_user_rate(input.seats, input.edition).unwrap_or(Decimal::ZERO);
            let base_price = rate * Decimal::from(users);
            let discount = base_price * billing_discount_rate(billing_cycle);
            PriceQuote {
                base_price,
                discount,
                price: round_whole(base_price - discount),
            }
        }
    };

    debug!(
        edition = input.edition.as_str(),
        seats = ?input.seats,
        billing_cycle = billing_cycle.as_str(),
        price = %result.price,
        "priced license order"
    );

    result
}
