//! A running wizard together with its checkout outcome.

use thiserror::Error;
use tracing::{error, info};

use super::{WizardAction, WizardState, WizardStep};
use crate::backend::{OrderRepository, RepositoryError};
use crate::{LicenseOrder, NewLicenseOrder, ValidationError};

/// Errors from completing an order at checkout.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("orders can only be submitted from the checkout step")]
    NotAtCheckout,

    #[error("order is incomplete: {0}")]
    Incomplete(#[from] ValidationError),

    #[error("order submission failed: {0}")]
    Rejected(#[from] RepositoryError),
}

/// Owns the wizard state between screens.
///
/// A failed submission keeps the order intact and records the message in
/// [`checkout_error`](Self::checkout_error) so the checkout screen can show it
/// and the user can retry. A successful submission resets the wizard and keeps
/// the created order for the success screen.
#[derive(Debug, Clone, Default)]
pub struct WizardSession {
    state: WizardState,
    checkout_error: Option<String>,
    last_order: Option<LicenseOrder>,
}

impl WizardSession {
    pub fn new(state: WizardState) -> Self {
        Self {
            state,
            checkout_error: None,
            last_order: None,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn checkout_error(&self) -> Option<&str> {
        self.checkout_error.as_deref()
    }

    pub fn last_order(&self) -> Option<&LicenseOrder> {
        self.last_order.as_ref()
    }

    /// Applies an action. Any previous checkout error is cleared once the user
    /// changes something.
    pub fn dispatch(&mut self, action: WizardAction) {
        if matches!(action, WizardAction::Reset) {
            self.last_order = None;
        }
        self.checkout_error = None;
        self.state = self.state.clone().reduce(action);
    }

    /// Sends the order to `repo`. Payment details are never part of it.
    pub async fn submit(
        &mut self,
        repo: &dyn OrderRepository,
    ) -> Result<LicenseOrder, SubmissionError> {
        if self.state.step() != WizardStep::Checkout {
            return Err(SubmissionError::NotAtCheckout);
        }

        let new_order = match NewLicenseOrder::try_from(self.state.order()) {
            Ok(order) => order,
            Err(e) => {
                self.checkout_error = Some(e.to_string());
                return Err(e.into());
            }
        };

        match repo.create_order(new_order).await {
            Ok(order) => {
                info!(order_id = order.id, total = %order.order.total, "license order submitted");
                self.checkout_error = None;
                self.last_order = Some(order.clone());
                self.state = WizardState::new(self.state.today());
                Ok(order)
            }
            Err(e) => {
                error!(error = %e, "license order submission failed");
                self.checkout_error = Some(e.to_string());
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{NaiveDate, TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{Edition, LicenseModel, OrderType};

    /// Records submitted orders, or rejects everything when `reject` is set.
    #[derive(Default)]
    struct RecordingRepository {
        reject: bool,
        created: Mutex<Vec<NewLicenseOrder>>,
    }

    #[async_trait]
    impl OrderRepository for RecordingRepository {
        async fn create_order(
            &self,
            order: NewLicenseOrder,
        ) -> Result<LicenseOrder, RepositoryError> {
            if self.reject {
                return Err(RepositoryError::Rejected {
                    status: 503,
                    message: "service unavailable".to_string(),
                });
            }
            let mut created = self.created.lock().unwrap();
            created.push(order.clone());
            Ok(LicenseOrder {
                id: created.len() as i64,
                order,
                created_at: Utc.with_ymd_and_hms(2026, 10, 15, 9, 0, 0).unwrap(),
            })
        }

        async fn get_order(&self, _id: i64) -> Result<LicenseOrder, RepositoryError> {
            Err(RepositoryError::NotFound)
        }

        async fn list_orders(&self) -> Result<Vec<LicenseOrder>, RepositoryError> {
            Ok(Vec::new())
        }
    }

    fn session_at_checkout() -> WizardSession {
        let today = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        let mut session = WizardSession::new(WizardState::new(today));
        for action in [
            WizardAction::SetOrderType(OrderType::New),
            WizardAction::SetEdition(Edition::Professional),
            WizardAction::Advance,
            WizardAction::SetLicenseModel(LicenseModel::Named),
            WizardAction::Advance,
            WizardAction::SetUserCount(5),
            WizardAction::Advance,
            WizardAction::SetCustomerName("Wessex Water".to_string()),
            WizardAction::Advance,
            WizardAction::Advance,
        ] {
            session.dispatch(action);
        }
        assert_eq!(session.state().step(), WizardStep::Checkout);
        session
    }

    #[tokio::test]
    async fn submit_outside_checkout_is_refused() {
        let repo = RecordingRepository::default();
        let mut session = WizardSession::default();

        let result = session.submit(&repo).await;

        assert!(matches!(result, Err(SubmissionError::NotAtCheckout)));
        assert!(repo.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn successful_submit_resets_and_keeps_order() {
        let repo = RecordingRepository::default();
        let mut session = session_at_checkout();

        let order = session.submit(&repo).await.unwrap();

        assert_eq!(order.order.customer_name, "Wessex Water");
        assert_eq!(order.order.price, dec!(8373));
        assert_eq!(session.last_order(), Some(&order));
        assert_eq!(session.state().step(), WizardStep::OrderType);
        assert_eq!(session.checkout_error(), None);
    }

    #[tokio::test]
    async fn rejected_submit_preserves_order_and_shows_error() {
        let repo = RecordingRepository {
            reject: true,
            ..Default::default()
        };
        let mut session = session_at_checkout();
        let before = session.state().clone();

        let result = session.submit(&repo).await;

        assert!(matches!(result, Err(SubmissionError::Rejected(_))));
        assert_eq!(session.state(), &before);
        assert!(session.checkout_error().unwrap().contains("service unavailable"));
    }

    #[tokio::test]
    async fn retry_after_rejection_succeeds() {
        let mut session = session_at_checkout();
        let failing = RecordingRepository {
            reject: true,
            ..Default::default()
        };
        let _ = session.submit(&failing).await;

        let working = RecordingRepository::default();
        let order = session.submit(&working).await.unwrap();

        assert_eq!(order.id, 1);
        assert_eq!(session.checkout_error(), None);
    }
}
