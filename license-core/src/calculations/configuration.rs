//! Human-readable description of how an order is sized.
//!
//! Setup, review, success and listing views all describe the configuration
//! through these functions so the wording never drifts between screens.

use crate::{BundleType, LicenseModel, LicenseOrder, OrderRecord};

const NOT_CONFIGURED: &str = "Not configured";

/// Describes the sizing of an in-progress order.
///
/// # Examples
///
/// ```
/// use license_core::{describe_configuration, BundleType, LicenseModel, OrderRecord};
///
/// let record = OrderRecord {
///     license_model: Some(LicenseModel::Bundled),
///     bundle_type: Some(BundleType::Small),
///     ..OrderRecord::new()
/// };
///
/// assert_eq!(
///     describe_configuration(&record),
///     "Small bundle (5 named + 2 concurrent users)"
/// );
/// ```
pub fn describe_configuration(record: &OrderRecord) -> String {
    match record.license_model {
        Some(model) => describe(model, record.user_count, record.bundle_type),
        None => NOT_CONFIGURED.to_string(),
    }
}

/// Describes the sizing of a submitted order.
pub fn describe_order_configuration(order: &LicenseOrder) -> String {
    describe(
        order.order.license_model,
        order.order.user_count,
        order.order.bundle_type,
    )
}

fn describe(
    model: LicenseModel,
    user_count: Option<u32>,
    bundle_type: Option<BundleType>,
) -> String {
    match model {
        LicenseModel::Bundled => match bundle_type {
            Some(bundle) => describe_bundle(bundle),
            None => NOT_CONFIGURED.to_string(),
        },
        LicenseModel::Named => describe_users(user_count, "named"),
        LicenseModel::Concurrent => describe_users(user_count, "concurrent"),
    }
}

/// Bundle name with its seat breakdown.
pub fn describe_bundle(bundle: BundleType) -> String {
    let (named, concurrent) = bundle.seats();
    format!(
        "{} bundle ({} named + {} concurrent users)",
        bundle.label(),
        named,
        concurrent
    )
}

fn describe_users(user_count: Option<u32>, kind: &str) -> String {
    match user_count {
        Some(1) => format!("1 {kind} user"),
        Some(n) if n > 1 => format!("{n} {kind} users"),
        _ => NOT_CONFIGURED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(model: LicenseModel, users: Option<u32>, bundle: Option<BundleType>) -> OrderRecord {
        OrderRecord {
            license_model: Some(model),
            user_count: users,
            bundle_type: bundle,
            ..OrderRecord::new()
        }
    }

    #[test]
    fn describes_named_and_concurrent_users() {
        assert_eq!(
            describe_configuration(&record(LicenseModel::Named, Some(5), None)),
            "5 named users"
        );
        assert_eq!(
            describe_configuration(&record(LicenseModel::Concurrent, Some(1), None)),
            "1 concurrent user"
        );
    }

    #[test]
    fn describes_bundles_with_seat_counts() {
        assert_eq!(
            describe_configuration(&record(LicenseModel::Bundled, Some(9), Some(BundleType::Large))),
            "Large bundle (20 named + 10 concurrent users)"
        );
    }

    #[test]
    fn incomplete_records_are_not_configured() {
        assert_eq!(describe_configuration(&OrderRecord::new()), "Not configured");
        assert_eq!(
            describe_configuration(&record(LicenseModel::Named, Some(0), None)),
            "Not configured"
        );
        assert_eq!(
            describe_configuration(&record(LicenseModel::Bundled, None, None)),
            "Not configured"
        );
    }
}
