//! CSV export of the "my licenses" listing.
//!
//! ## CSV Format
//!
//! One header row followed by one row per order, newest first.
//!
//! | Column            | Type    | Notes                                         |
//! |-------------------|---------|-----------------------------------------------|
//! | `id`              | integer |                                               |
//! | `created_at`      | string  | RFC 3339, UTC                                 |
//! | `order_type`      | string  | `demo-license`, `new-license`, `renewal`, `upgrade` |
//! | `edition`         | string  | `professional`, `enterprise`                  |
//! | `license_model`   | string  | `named`, `concurrent`, `bundled`              |
//! | `billing_cycle`   | string  | `monthly`, `yearly`                           |
//! | `user_count`      | integer | Empty for bundled licenses                    |
//! | `bundle_type`     | string  | Empty unless bundled                          |
//! | `configuration`   | string  | e.g. `5 named users`                          |
//! | `customer_name`   | string  |                                               |
//! | `expiration_date` | string  | `YYYY-MM-DD`                                  |
//! | `notes`           | string  |                                               |
//! | `price`           | decimal |                                               |
//! | `total`           | decimal |                                               |
//!
//! ### Example
//!
//! ```csv
//! id,created_at,order_type,edition,license_model,billing_cycle,user_count,bundle_type,configuration,customer_name,expiration_date,notes,price,total
//! 1,2026-10-15T09:00:00+00:00,new-license,professional,named,yearly,5,,5 named users,Severn Trent,2027-10-15,,8373,8373
//! ```
use std::io::Write;
use std::path::Path;

use license_core::{LicenseOrder, describe_order_configuration};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: i64,
    created_at: String,
    order_type: &'static str,
    edition: &'static str,
    license_model: &'static str,
    billing_cycle: &'static str,
    user_count: Option<u32>,
    bundle_type: Option<&'static str>,
    configuration: String,
    customer_name: &'a str,
    expiration_date: String,
    notes: &'a str,
    price: Decimal,
    total: Decimal,
}

impl<'a> From<&'a LicenseOrder> for CsvRow<'a> {
    fn from(order: &'a LicenseOrder) -> Self {
        let o = &order.order;
        Self {
            id: order.id,
            created_at: order.created_at.to_rfc3339(),
            order_type: o.order_type.as_str(),
            edition: o.edition.as_str(),
            license_model: o.license_model.as_str(),
            billing_cycle: o.billing_cycle.as_str(),
            user_count: o.user_count,
            bundle_type: o.bundle_type.map(|b| b.as_str()),
            configuration: describe_order_configuration(order),
            customer_name: &o.customer_name,
            expiration_date: o.expiration_date.to_string(),
            notes: &o.notes,
            price: o.price,
            total: o.total,
        }
    }
}

/// Errors that can occur while exporting licenses.
#[derive(Debug, thiserror::Error)]
pub enum CsvExportError {
    #[error("CSV write error: {0}")]
    Write(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes `orders` as CSV to `writer`, in the order given.
pub fn write_licenses<W: Write>(writer: W, orders: &[LicenseOrder]) -> Result<(), CsvExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for order in orders {
        csv_writer.serialize(CsvRow::from(order))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Convenience wrapper: create (or truncate) `path` and delegate to [write_licenses].
pub fn export_to_file(path: &Path, orders: &[LicenseOrder]) -> Result<(), CsvExportError> {
    let file = std::fs::File::create(path)?;
    write_licenses(file, orders)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use license_core::{
        BillingCycle, BundleType, Edition, LicenseModel, NewLicenseOrder, OrderType,
    };
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn named_order() -> LicenseOrder {
        LicenseOrder {
            id: 1,
            order: NewLicenseOrder {
                order_type: OrderType::New,
                edition: Edition::Professional,
                license_model: LicenseModel::Named,
                billing_cycle: BillingCycle::Yearly,
                user_count: Some(5),
                bundle_type: None,
                customer_name: "Severn Trent".to_string(),
                expiration_date: NaiveDate::from_ymd_opt(2027, 10, 15).unwrap(),
                notes: String::new(),
                price: dec!(8373),
                total: dec!(8373),
            },
            created_at: Utc.with_ymd_and_hms(2026, 10, 15, 9, 0, 0).unwrap(),
        }
    }

    fn export(orders: &[LicenseOrder]) -> String {
        let mut buf = Vec::new();
        write_licenses(&mut buf, orders).expect("export should succeed");
        String::from_utf8(buf).expect("CSV should be UTF-8")
    }

    #[test]
    fn writes_header_and_row() {
        let text = export(&[named_order()]);

        assert_eq!(
            text,
            "id,created_at,order_type,edition,license_model,billing_cycle,user_count,bundle_type,configuration,customer_name,expiration_date,notes,price,total\n\
             1,2026-10-15T09:00:00+00:00,new-license,professional,named,yearly,5,,5 named users,Severn Trent,2027-10-15,,8373,8373\n"
        );
    }

    #[test]
    fn bundled_rows_leave_user_count_empty() {
        let mut order = named_order();
        order.order.license_model = LicenseModel::Bundled;
        order.order.user_count = None;
        order.order.bundle_type = Some(BundleType::Medium);
        order.order.notes = "Includes, a comma".to_string();

        let text = export(&[order]);
        let row = text.lines().nth(1).unwrap();

        assert!(row.contains(",bundled,yearly,,medium,"));
        assert!(row.contains("\"Includes, a comma\""));
        assert!(row.contains("Medium bundle (10 named + 5 concurrent users)"));
    }

    #[test]
    fn empty_listing_writes_nothing() {
        assert_eq!(export(&[]), "");
    }

    #[test]
    fn export_to_file_creates_the_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("licenses.csv");

        export_to_file(&path, &[named_order()]).expect("export should succeed");

        let contents = std::fs::read_to_string(&path).expect("file should exist");
        assert_eq!(contents.lines().count(), 2);
    }
}
