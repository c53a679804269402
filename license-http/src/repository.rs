use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use license_core::{LicenseOrder, NewLicenseOrder, OrderRepository, RepositoryError};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Order repository backed by the remote order service.
///
/// | Operation     | Request                |
/// |---------------|------------------------|
/// | create_order  | `POST {base}/orders`   |
/// | list_orders   | `GET {base}/orders`    |
/// | get_order     | `GET {base}/orders/{id}` |
///
/// For `create_order` the status is the only thing that decides success. The
/// returned order is the one that was sent, with `id` and `createdAt` taken
/// from the response body when it carries them and assigned locally otherwise.
///
/// Requests are sent once: there is no retry and no timeout beyond the
/// client's defaults.
pub struct HttpOrderRepository {
    client: Client,
    base_url: String,
    next_local_id: AtomicI64,
}

/// Error body the service sends with non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// The parts of a creation response we use, if present.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CreatedBody {
    id: Option<i64>,
    created_at: Option<DateTime<Utc>>,
}

impl HttpOrderRepository {
    pub fn new(base_url: &str) -> Result<Self, RepositoryError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, RepositoryError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(RepositoryError::Configuration(format!(
                "order service URL must start with http:// or https://, got '{}'",
                base_url
            )));
        }
        Ok(Self {
            client,
            base_url: trimmed.to_string(),
            next_local_id: AtomicI64::new(1),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn orders_url(&self) -> String {
        format!("{}/orders", self.base_url)
    }

    /// Passes 2xx responses through; maps everything else to a [`RepositoryError`].
    async fn check_status(response: Response) -> Result<Response, RepositoryError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(RepositoryError::NotFound);
        }
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.message)
            .unwrap_or(body);
        warn!(status = status.as_u16(), %message, "order service rejected request");
        Err(RepositoryError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RepositoryError> {
        Self::check_status(response)
            .await?
            .json::<T>()
            .await
            .map_err(|e| RepositoryError::Connection(format!("invalid response body: {}", e)))
    }
}

fn connection_error(e: reqwest::Error) -> RepositoryError {
    RepositoryError::Connection(e.to_string())
}

#[async_trait]
impl OrderRepository for HttpOrderRepository {
    async fn create_order(
        &self,
        order: NewLicenseOrder,
    ) -> Result<LicenseOrder, RepositoryError> {
        let url = self.orders_url();
        debug!(%url, customer = %order.customer_name, "submitting license order");
        let response = self
            .client
            .post(&url)
            .json(&order)
            .send()
            .await
            .map_err(connection_error)?;
        let response = Self::check_status(response).await?;

        // The order is placed; an unreadable body only costs us the service's id.
        let body = response.text().await.unwrap_or_default();
        let created = serde_json::from_str::<CreatedBody>(&body).unwrap_or_default();
        let id = match created.id {
            Some(id) => id,
            None => {
                let id = self.next_local_id.fetch_add(1, Ordering::Relaxed);
                debug!(id, "order service returned no id; using a local one");
                id
            }
        };
        Ok(LicenseOrder {
            id,
            order,
            created_at: created.created_at.unwrap_or_else(Utc::now),
        })
    }

    async fn get_order(&self, id: i64) -> Result<LicenseOrder, RepositoryError> {
        let response = self
            .client
            .get(format!("{}/{}", self.orders_url(), id))
            .send()
            .await
            .map_err(connection_error)?;
        Self::read_json(response).await
    }

    async fn list_orders(&self) -> Result<Vec<LicenseOrder>, RepositoryError> {
        let response = self
            .client
            .get(self.orders_url())
            .send()
            .await
            .map_err(connection_error)?;
        let mut orders: Vec<LicenseOrder> = Self::read_json(response).await?;
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone};
    use license_core::{BillingCycle, Edition, LicenseModel, OrderType};
    use mockito::{Matcher, Server};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;

    fn new_order() -> NewLicenseOrder {
        NewLicenseOrder {
            order_type: OrderType::New,
            edition: Edition::Professional,
            license_model: LicenseModel::Named,
            billing_cycle: BillingCycle::Yearly,
            user_count: Some(5),
            bundle_type: None,
            customer_name: "Affinity Water".to_string(),
            expiration_date: NaiveDate::from_ymd_opt(2027, 10, 15).unwrap(),
            notes: String::new(),
            price: dec!(8373),
            total: dec!(8373),
        }
    }

    fn order_json(id: i64, created_at: &str) -> serde_json::Value {
        json!({
            "id": id,
            "orderType": "new-license",
            "edition": "professional",
            "licenseModel": "named",
            "billingCycle": "yearly",
            "userCount": 5,
            "bundleType": null,
            "customerName": "Affinity Water",
            "expirationDate": "2027-10-15",
            "notes": "",
            "price": "8373",
            "total": "8373",
            "createdAt": created_at,
        })
    }

    #[tokio::test]
    async fn create_order_posts_camel_case_json() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/orders")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(json!({
                "orderType": "new-license",
                "licenseModel": "named",
                "userCount": 5,
                "customerName": "Affinity Water",
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(order_json(42, "2026-10-15T09:00:00Z").to_string())
            .create_async()
            .await;
        let repo = HttpOrderRepository::new(&format!("{}/api/", server.url())).unwrap();

        let created = repo.create_order(new_order()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(created.id, 42);
        assert_eq!(created.order, new_order());
    }

    #[tokio::test]
    async fn created_order_keeps_service_timestamp() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/orders")
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":9,"createdAt":"2026-10-15T09:00:00Z"}"#)
            .create_async()
            .await;
        let repo = HttpOrderRepository::new(&server.url()).unwrap();

        let created = repo.create_order(new_order()).await.unwrap();

        assert_eq!(created.id, 9);
        assert_eq!(
            created.created_at,
            Utc.with_ymd_and_hms(2026, 10, 15, 9, 0, 0).unwrap()
        );
    }

    #[tokio::test]
    async fn any_success_body_places_the_order() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/orders")
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success":true,"orderId":"ORD-77"}"#)
            .create_async()
            .await;
        let repo = HttpOrderRepository::new(&server.url()).unwrap();

        let first = repo.create_order(new_order()).await.unwrap();
        let second = repo.create_order(new_order()).await.unwrap();

        assert_eq!(first.order, new_order());
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn empty_success_body_places_the_order() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/orders")
            .with_status(204)
            .create_async()
            .await;
        let repo = HttpOrderRepository::new(&server.url()).unwrap();

        let created = repo.create_order(new_order()).await;

        assert!(matches!(created, Ok(order) if order.order == new_order()));
    }

    #[tokio::test]
    async fn server_error_becomes_rejection_with_message() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/orders")
            .with_status(422)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"customer is on credit hold"}"#)
            .create_async()
            .await;
        let repo = HttpOrderRepository::new(&server.url()).unwrap();

        let result = repo.create_order(new_order()).await;

        assert_eq!(
            result,
            Err(RepositoryError::Rejected {
                status: 422,
                message: "customer is on credit hold".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn plain_text_error_body_is_kept() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/orders")
            .with_status(502)
            .with_body("bad gateway")
            .create_async()
            .await;
        let repo = HttpOrderRepository::new(&server.url()).unwrap();

        let result = repo.create_order(new_order()).await;

        assert!(matches!(
            result,
            Err(RepositoryError::Rejected { status: 502, message }) if message == "bad gateway"
        ));
    }

    #[tokio::test]
    async fn missing_order_is_not_found() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/orders/7")
            .with_status(404)
            .create_async()
            .await;
        let repo = HttpOrderRepository::new(&server.url()).unwrap();

        assert_eq!(repo.get_order(7).await, Err(RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn list_orders_sorts_newest_first() {
        let mut server = Server::new_async().await;
        let body = json!([
            order_json(1, "2026-09-01T08:00:00Z"),
            order_json(2, "2026-10-01T08:00:00Z"),
        ]);
        let _mock = server
            .mock("GET", "/orders")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;
        let repo = HttpOrderRepository::new(&server.url()).unwrap();

        let orders = repo.list_orders().await.unwrap();

        let ids: Vec<i64> = orders.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn unreachable_service_is_connection_error() {
        // Port 9 (discard) is not expected to accept HTTP connections.
        let repo = HttpOrderRepository::new("http://127.0.0.1:9").unwrap();

        let result = repo.list_orders().await;

        assert!(matches!(result, Err(RepositoryError::Connection(_))));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let repo = HttpOrderRepository::new("https://licence.example.com/api/").unwrap();

        assert_eq!(repo.base_url(), "https://licence.example.com/api");
    }
}
