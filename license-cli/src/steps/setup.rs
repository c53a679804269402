use license_core::calculations::configuration::describe_bundle;
use license_core::calculations::quote;
use license_core::{BillingCycle, BundleType, WizardAction, WizardState, describe_configuration};

use super::hints::KeyHint;
use super::{Command, InputError, StepContext, StepView, choose, render_choices, split_command};
use crate::utils::{format_currency, opt_display, parse_user_count};

pub struct SetupStep;

const HINTS: &[KeyHint] = &[
    KeyHint::new("billing <monthly|yearly>", "Billing cycle"),
    KeyHint::new("users <n>", "User count"),
    KeyHint::new("bundle <small|medium|large>", "Bundle size"),
];

impl StepView for SetupStep {
    fn render(&self, ctx: &StepContext<'_>) -> String {
        let order = ctx.state.order();
        let mut out = String::from("Billing cycle:\n");
        out.push_str(&render_choices(
            BillingCycle::all(),
            Some(&order.billing_cycle),
            |c| c.label().to_string(),
        ));

        if order.license_model.is_some_and(|m| m.uses_bundle()) {
            out.push_str("Bundle:\n");
            out.push_str(&render_choices(
                BundleType::all(),
                order.bundle_type.as_ref(),
                |b| describe_bundle(*b),
            ));
        } else {
            out.push_str(&format!("Users: {}\n", opt_display(order.user_count)));
        }

        out.push_str(&format!("Configuration: {}\n", describe_configuration(order)));
        match order.pricing_input() {
            Some(input) => {
                let result = quote(&input, order.billing_cycle);
                out.push_str(&format!("Base price: {}\n", format_currency(result.base_price)));
                if !result.discount.is_zero() {
                    out.push_str(&format!("Discount: -{}\n", format_currency(result.discount)));
                }
                out.push_str(&format!("Price: {}\n", format_currency(result.price)));
            }
            None => out.push_str(&format!("Price: {}\n", format_currency(order.price))),
        }
        out
    }

    fn hints(&self) -> &'static [KeyHint] {
        HINTS
    }

    fn interpret(&self, state: &WizardState, input: &str) -> Result<Command, InputError> {
        let (command, value) = split_command(input);
        let bundled = state.order().license_model.is_some_and(|m| m.uses_bundle());
        let applies = match command.as_str() {
            "users" => !bundled,
            "bundle" => bundled,
            _ => true,
        };
        if !applies {
            return Err(InputError::NotForModel {
                command: if bundled { "users" } else { "bundle" },
                model: state.order().license_model.map_or("unselected", |m| m.as_str()),
            });
        }
        let action = match command.as_str() {
            "billing" => {
                if value.is_empty() {
                    return Err(InputError::MissingValue("billing"));
                }
                WizardAction::SetBillingCycle(choose(value, BillingCycle::all(), BillingCycle::as_str)?)
            }
            "users" => {
                if value.is_empty() {
                    return Err(InputError::MissingValue("users"));
                }
                WizardAction::SetUserCount(parse_user_count(value)?)
            }
            "bundle" => {
                if value.is_empty() {
                    return Err(InputError::MissingValue("bundle"));
                }
                WizardAction::SetBundleType(choose(value, BundleType::all(), BundleType::as_str)?)
            }
            _ => return Err(InputError::UnknownCommand(input.to_string())),
        };
        Ok(Command::Dispatch(action))
    }
}
