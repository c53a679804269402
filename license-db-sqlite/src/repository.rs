use std::str::FromStr;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use license_core::{
    BillingCycle, BundleType, Edition, LicenseModel, LicenseOrder, NewLicenseOrder,
    OrderRepository, OrderType, RepositoryError,
};
use sqlx::{
    Row,
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
};
use tracing::debug;

use crate::decimal::{decimal_to_text, get_decimal};

const SELECT_ORDER: &str = "SELECT id, order_type, edition, license_model, billing_cycle,
        user_count, bundle_type, customer_name, expiration_date, notes,
        price, total, created_at
 FROM license_orders";

pub struct SqliteOrderRepository {
    pool: SqlitePool,
}

impl SqliteOrderRepository {
    /// Connects to `database_url`, creating the database file if it is missing.
    ///
    /// Accepts a bare path (`licenses.db`), `:memory:`, or a sqlx URL
    /// (`sqlite:licenses.db`).
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid database URL: {}", database_url))?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to connect to database: {}", database_url))?;
        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run database migrations")?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn db_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Database(e.to_string())
}

fn get_text(row: &sqlx::sqlite::SqliteRow, column: &str) -> Result<String, RepositoryError> {
    row.try_get(column)
        .map_err(|e| RepositoryError::Database(format!("Failed to get {}: {}", column, e)))
}

/// Reads a TEXT column and maps it through one of the enum `parse` functions.
fn get_enum<T>(
    row: &sqlx::sqlite::SqliteRow,
    column: &str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, RepositoryError> {
    let value = get_text(row, column)?;
    parse(&value).ok_or_else(|| {
        RepositoryError::Database(format!("Invalid {} value: {}", column, value))
    })
}

fn row_to_license_order(row: &sqlx::sqlite::SqliteRow) -> Result<LicenseOrder, RepositoryError> {
    let user_count = row
        .try_get::<Option<i64>, _>("user_count")
        .map_err(db_error)?
        .map(|n| {
            u32::try_from(n).map_err(|_| {
                RepositoryError::Database(format!("Invalid user_count value: {}", n))
            })
        })
        .transpose()?;
    let bundle_type = row
        .try_get::<Option<String>, _>("bundle_type")
        .map_err(db_error)?
        .map(|s| {
            BundleType::parse(&s)
                .ok_or_else(|| RepositoryError::Database(format!("Invalid bundle_type value: {}", s)))
        })
        .transpose()?;

    Ok(LicenseOrder {
        id: row.try_get("id").map_err(db_error)?,
        order: NewLicenseOrder {
            order_type: get_enum(row, "order_type", OrderType::parse)?,
            edition: get_enum(row, "edition", Edition::parse)?,
            license_model: get_enum(row, "license_model", LicenseModel::parse)?,
            billing_cycle: get_enum(row, "billing_cycle", BillingCycle::parse)?,
            user_count,
            bundle_type,
            customer_name: get_text(row, "customer_name")?,
            expiration_date: row
                .try_get::<NaiveDate, _>("expiration_date")
                .map_err(|e| {
                    RepositoryError::Database(format!("Failed to get expiration_date: {}", e))
                })?,
            notes: get_text(row, "notes")?,
            price: get_decimal(row, "price")?,
            total: get_decimal(row, "total")?,
        },
        created_at: row
            .try_get::<DateTime<Utc>, _>("created_at")
            .map_err(|e| RepositoryError::Database(format!("Failed to get created_at: {}", e)))?,
    })
}

#[async_trait]
impl OrderRepository for SqliteOrderRepository {
    async fn create_order(
        &self,
        order: NewLicenseOrder,
    ) -> Result<LicenseOrder, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO license_orders (
                order_type, edition, license_model, billing_cycle,
                user_count, bundle_type, customer_name, expiration_date, notes,
                price, total, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(order.order_type.as_str())
        .bind(order.edition.as_str())
        .bind(order.license_model.as_str())
        .bind(order.billing_cycle.as_str())
        .bind(order.user_count.map(i64::from))
        .bind(order.bundle_type.map(|b| b.as_str()))
        .bind(&order.customer_name)
        .bind(order.expiration_date)
        .bind(&order.notes)
        .bind(decimal_to_text(order.price))
        .bind(decimal_to_text(order.total))
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        let id = result.last_insert_rowid();
        debug!(id, customer = %order.customer_name, "stored license order");

        self.get_order(id).await
    }

    async fn get_order(&self, id: i64) -> Result<LicenseOrder, RepositoryError> {
        let row = sqlx::query(&format!("{SELECT_ORDER} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?
            .ok_or(RepositoryError::NotFound)?;

        row_to_license_order(&row)
    }

    async fn list_orders(&self) -> Result<Vec<LicenseOrder>, RepositoryError> {
        let rows = sqlx::query(&format!("{SELECT_ORDER} ORDER BY created_at DESC, id DESC"))
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;

        rows.iter().map(row_to_license_order).collect()
    }
}
