//! Display-only totals for the checkout screen.
//!
//! The tax figure shown at checkout is never written back to the order; the
//! stored `total` keeps mirroring the price.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;

/// Sales tax rate applied on the checkout screen.
pub fn checkout_tax_rate() -> Decimal {
    Decimal::new(8, 2)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSummary {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl CheckoutSummary {
    /// # Examples
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use license_core::calculations::CheckoutSummary;
    ///
    /// let summary = CheckoutSummary::from_price(dec!(8373));
    ///
    /// assert_eq!(summary.tax, dec!(669.84));
    /// assert_eq!(summary.total, dec!(9042.84));
    /// ```
    pub fn from_price(price: Decimal) -> Self {
        let tax = round_half_up(price * checkout_tax_rate());
        Self {
            subtotal: price,
            tax,
            total: price + tax,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn adds_eight_percent_tax() {
        let summary = CheckoutSummary::from_price(dec!(16500));

        assert_eq!(summary.subtotal, dec!(16500));
        assert_eq!(summary.tax, dec!(1320.00));
        assert_eq!(summary.total, dec!(17820.00));
    }

    #[test]
    fn zero_price_has_zero_tax() {
        let summary = CheckoutSummary::from_price(Decimal::ZERO);

        assert_eq!(summary.tax, Decimal::ZERO);
        assert_eq!(summary.total, Decimal::ZERO);
    }

    #[test]
    fn tax_is_rounded_to_cents() {
        // 1531 × 0.08 = 122.48
        let summary = CheckoutSummary::from_price(dec!(1531));

        assert_eq!(summary.tax, dec!(122.48));
    }
}
