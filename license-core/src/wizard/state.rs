//! Step sequencer for the license order wizard.
//!
//! The wizard is a pure reducer: `state.reduce(action)` returns the next
//! state and never fails. Each field belongs to exactly one step and can only
//! be changed while that step is active. `Advance` is refused (the state is
//! returned unchanged) while the current step still has blocking validation
//! errors, so a front end only needs [`WizardState::advance_blockers`] to
//! decide whether its "next" control is enabled.

use chrono::{Local, Months, NaiveDate};
use tracing::{debug, warn};

use super::{WizardAction, WizardStep};
use crate::{OrderRecord, ValidationError};

/// Current step plus the order being assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    step: WizardStep,
    order: OrderRecord,
    /// Reference date for the default expiration.
    today: NaiveDate,
}

impl WizardState {
    /// A fresh wizard on step 1 with an empty order.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            step: WizardStep::OrderType,
            order: OrderRecord::new(),
            today,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn order(&self) -> &OrderRecord {
        &self.order
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Default expiration: one year after `today`.
    pub fn default_expiration(&self) -> NaiveDate {
        self.today
            .checked_add_months(Months::new(12))
            .unwrap_or(self.today)
    }

    /// Fields the current step still needs before `Advance` is accepted.
    pub fn advance_blockers(&self) -> Vec<ValidationError> {
        let order = &self.order;
        let checks = match self.step {
            WizardStep::OrderType => vec![order.require_order_type().map(|_| ())],
            WizardStep::Edition => vec![order.require_edition().map(|_| ())],
            WizardStep::LicenseModel => vec![order.require_license_model().map(|_| ())],
            WizardStep::Setup => vec![order.require_sizing()],
            WizardStep::Details => vec![
                order.require_customer_name().map(|_| ()),
                order.require_expiration_date().map(|_| ()),
            ],
            WizardStep::Review | WizardStep::Checkout => Vec::new(),
        };
        checks.into_iter().filter_map(Result::err).collect()
    }

    /// True when `Advance` would move to another step.
    pub fn can_advance(&self) -> bool {
        self.step.next().is_some() && self.advance_blockers().is_empty()
    }

    /// Applies one action and returns the resulting state.
    pub fn reduce(mut self, action: WizardAction) -> Self {
        match action {
            WizardAction::SetOrderType(order_type) => {
                if self.accepts(WizardStep::OrderType, "order type") {
                    self.order.order_type = Some(order_type);
                    // Selecting the order type is the whole step.
                    self.step = WizardStep::Edition;
                    debug!(order_type = order_type.as_str(), "order type selected");
                }
            }
            WizardAction::SetEdition(edition) => {
                if self.accepts(WizardStep::Edition, "edition") {
                    self.order.edition = Some(edition);
                    self.order.reprice();
                }
            }
            WizardAction::SetLicenseModel(model) => {
                if self.accepts(WizardStep::LicenseModel, "license model") {
                    self.order.license_model = Some(model);
                    if !model.uses_bundle() {
                        self.order.bundle_type = None;
                    }
                    self.order.reprice();
                }
            }
            WizardAction::SetBillingCycle(cycle) => {
                if self.accepts(WizardStep::Setup, "billing cycle") {
                    self.order.billing_cycle = cycle;
                    self.order.reprice();
                }
            }
            WizardAction::SetUserCount(count) => {
                if self.accepts(WizardStep::Setup, "user count") && self.sized_by(false, "user count")
                {
                    self.order.user_count = Some(count);
                    self.order.reprice();
                }
            }
            WizardAction::SetBundleType(bundle) => {
                if self.accepts(WizardStep::Setup, "bundle type") && self.sized_by(true, "bundle type")
                {
                    self.order.bundle_type = Some(bundle);
                    self.order.reprice();
                }
            }
            WizardAction::SetCustomerName(name) => {
                if self.accepts(WizardStep::Details, "customer name") {
                    self.order.customer_name = name;
                }
            }
            WizardAction::SetExpirationDate(date) => {
                if self.accepts(WizardStep::Details, "expiration date") {
                    self.order.expiration_date = date;
                }
            }
            WizardAction::SetNotes(notes) => {
                if self.accepts(WizardStep::Details, "notes") {
                    self.order.notes = notes;
                }
            }
            WizardAction::Advance => self.advance(),
            WizardAction::Retreat => {
                if let Some(previous) = self.step.previous() {
                    debug!(from = self.step.number(), to = previous.number(), "wizard retreat");
                    self.step = previous;
                }
            }
            WizardAction::Reset => {
                debug!("wizard reset");
                self = Self::new(self.today);
            }
        }
        self
    }

    fn advance(&mut self) {
        let blockers = self.advance_blockers();
        if !blockers.is_empty() {
            debug!(step = self.step.number(), ?blockers, "advance blocked");
            return;
        }
        let Some(next) = self.step.next() else {
            return;
        };
        if next == WizardStep::Details && self.order.expiration_date.is_none() {
            self.order.expiration_date = Some(self.default_expiration());
        }
        debug!(from = self.step.number(), to = next.number(), "wizard advance");
        self.step = next;
    }

    fn accepts(&self, owner: WizardStep, field: &'static str) -> bool {
        if self.step == owner {
            return true;
        }
        warn!(
            field,
            step = self.step.number(),
            owner = owner.number(),
            "ignoring change to a field owned by another step"
        );
        false
    }
}

impl WizardState {
    /// True when the chosen model is sized by a bundle (`bundled`) or by users.
    fn sized_by(&self, bundled: bool, field: &'static str) -> bool {
        if self.order.license_model.is_some_and(|m| m.uses_bundle() == bundled) {
            return true;
        }
        warn!(
            field,
            model = ?self.order.license_model,
            "ignoring sizing field that does not apply to the license model"
        );
        false
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}
