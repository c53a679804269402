//! Final step: totals, local payment fields and order completion.
//!
//! The billing address and payment method are collected for display only.
//! They live in [`CheckoutForm`], outside the wizard, and are never submitted.

use license_core::WizardState;
use license_core::calculations::CheckoutSummary;

use super::hints::KeyHint;
use super::review::order_summary;
use super::{Command, InputError, StepContext, StepView, choose, split_command};
use crate::utils::format_currency;

pub struct CheckoutStep;

const HINTS: &[KeyHint] = &[
    KeyHint::new("address <text>", "Billing address"),
    KeyHint::new("payment <card|invoice|purchase-order>", "Payment method"),
    KeyHint::new("complete", "Place order"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Card,
    Invoice,
    PurchaseOrder,
}

impl PaymentMethod {
    pub fn all() -> &'static [PaymentMethod] {
        &[Self::Card, Self::Invoice, Self::PurchaseOrder]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Invoice => "invoice",
            Self::PurchaseOrder => "purchase-order",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Card => "Credit card",
            Self::Invoice => "Invoice",
            Self::PurchaseOrder => "Purchase order",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutInput {
    BillingAddress(String),
    PaymentMethod(PaymentMethod),
}

/// Checkout-only fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    pub billing_address: String,
    pub payment_method: Option<PaymentMethod>,
}

impl CheckoutForm {
    pub fn apply(&mut self, input: CheckoutInput) {
        match input {
            CheckoutInput::BillingAddress(address) => self.billing_address = address,
            CheckoutInput::PaymentMethod(method) => self.payment_method = Some(method),
        }
    }
}

impl StepView for CheckoutStep {
    fn render(&self, ctx: &StepContext<'_>) -> String {
        let order = ctx.state.order();
        let summary = CheckoutSummary::from_price(order.price);

        let mut out = order_summary(order);
        out.push('\n');
        out.push_str(&format!("  Subtotal:      {}\n", format_currency(summary.subtotal)));
        out.push_str(&format!("  Tax (8%):      {}\n", format_currency(summary.tax)));
        out.push_str(&format!("  Total:         {}\n", format_currency(summary.total)));
        out.push('\n');

        let address = if ctx.checkout.billing_address.is_empty() {
            "—"
        } else {
            ctx.checkout.billing_address.as_str()
        };
        out.push_str(&format!("  Billing address: {}\n", address));
        out.push_str(&format!(
            "  Payment method:  {}\n",
            ctx.checkout.payment_method.map_or("—", |m| m.label())
        ));

        if let Some(error) = ctx.checkout_error {
            out.push_str(&format!("\n  ! {}\n", error));
        }
        out
    }

    fn hints(&self) -> &'static [KeyHint] {
        HINTS
    }

    fn interpret(&self, _state: &WizardState, input: &str) -> Result<Command, InputError> {
        let (command, value) = split_command(input);
        match command.as_str() {
            "complete" => Ok(Command::Complete),
            "address" => {
                if value.is_empty() {
                    return Err(InputError::MissingValue("address"));
                }
                Ok(Command::Checkout(CheckoutInput::BillingAddress(value.to_string())))
            }
            "payment" => {
                if value.is_empty() {
                    return Err(InputError::MissingValue("payment"));
                }
                let method = choose(value, PaymentMethod::all(), PaymentMethod::as_str)?;
                Ok(Command::Checkout(CheckoutInput::PaymentMethod(method)))
            }
            _ => Err(InputError::UnknownCommand(input.to_string())),
        }
    }
}
