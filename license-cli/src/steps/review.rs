use license_core::{OrderRecord, WizardState, describe_configuration};

use super::hints::KeyHint;
use super::{Command, InputError, StepContext, StepView};
use crate::utils::{format_currency, opt_display};

pub struct ReviewStep;

const HINTS: &[KeyHint] = &[];

impl StepView for ReviewStep {
    fn render(&self, ctx: &StepContext<'_>) -> String {
        let mut out = order_summary(ctx.state.order());
        out.push_str("Type 'next' to continue to checkout.\n");
        out
    }

    fn hints(&self) -> &'static [KeyHint] {
        HINTS
    }

    fn interpret(&self, _state: &WizardState, input: &str) -> Result<Command, InputError> {
        Err(InputError::UnknownCommand(input.to_string()))
    }
}

/// Read-only order summary, shared with the checkout step.
pub(super) fn order_summary(order: &OrderRecord) -> String {
    let rows = [
        ("Order type", opt_display(order.order_type.map(|t| t.label()))),
        ("Edition", opt_display(order.edition.map(|e| e.label()))),
        ("License model", opt_display(order.license_model.map(|m| m.label()))),
        ("Billing", order.billing_cycle.label().to_string()),
        ("Configuration", describe_configuration(order)),
        ("Customer", order.customer_name.trim().to_string()),
        ("Expires", opt_display(order.expiration_date)),
        ("Notes", order.notes.clone()),
        ("Price", format_currency(order.price)),
    ];
    rows.iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| format!("  {:<14} {}\n", format!("{label}:"), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use license_core::{Edition, LicenseModel, OrderType, WizardAction};

    use super::*;
    use crate::steps::CheckoutForm;

    fn reviewed_order() -> WizardState {
        [
            WizardAction::SetOrderType(OrderType::Renewal),
            WizardAction::SetEdition(Edition::Enterprise),
            WizardAction::Advance,
            WizardAction::SetLicenseModel(LicenseModel::Concurrent),
            WizardAction::Advance,
            WizardAction::SetUserCount(3),
            WizardAction::Advance,
            WizardAction::SetCustomerName("Wessex Water".to_string()),
            WizardAction::Advance,
        ]
        .into_iter()
        .fold(
            WizardState::new(NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()),
            WizardState::reduce,
        )
    }

    #[test]
    fn summarises_the_whole_order() {
        let state = reviewed_order();
        let form = CheckoutForm::default();

        let text = ReviewStep.render(&StepContext {
            state: &state,
            checkout: &form,
            checkout_error: None,
        });

        assert!(text.contains("Order type:    License Renewal"));
        assert!(text.contains("Configuration: 3 concurrent users"));
        assert!(text.contains("Customer:      Wessex Water"));
        assert!(text.contains("Expires:       2027-10-15"));
        // 2300 × 3 × 0.85 = 5865
        assert!(text.contains("Price:         $5,865.00"));
        assert!(!text.contains("Notes:"));
    }

    #[test]
    fn review_accepts_only_common_commands() {
        let result = ReviewStep.interpret(&reviewed_order(), "edit");

        assert!(matches!(result, Err(InputError::UnknownCommand(_))));
    }
}
