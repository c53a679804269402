use license_core::{WizardAction, WizardState};

use super::hints::KeyHint;
use super::{Command, InputError, StepContext, StepView, split_command};
use crate::utils::{opt_display, parse_date};

pub struct DetailsStep;

const HINTS: &[KeyHint] = &[
    KeyHint::new("name <customer>", "Customer name"),
    KeyHint::new("expires <YYYY-MM-DD>", "Expiration date"),
    KeyHint::new("notes <text>", "Notes"),
];

impl StepView for DetailsStep {
    fn render(&self, ctx: &StepContext<'_>) -> String {
        let order = ctx.state.order();
        let name = if order.customer_name.trim().is_empty() {
            "—"
        } else {
            order.customer_name.as_str()
        };
        let notes = if order.notes.is_empty() {
            "—"
        } else {
            order.notes.as_str()
        };
        format!(
            "Customer:   {}\nExpires:    {}\nNotes:      {}\n",
            name,
            opt_display(order.expiration_date),
            notes
        )
    }

    fn hints(&self) -> &'static [KeyHint] {
        HINTS
    }

    fn interpret(&self, _state: &WizardState, input: &str) -> Result<Command, InputError> {
        let (command, value) = split_command(input);
        let action = match command.as_str() {
            "name" => {
                if value.is_empty() {
                    return Err(InputError::MissingValue("name"));
                }
                WizardAction::SetCustomerName(value.to_string())
            }
            "expires" => {
                if value.is_empty() {
                    return Err(InputError::MissingValue("expires"));
                }
                WizardAction::SetExpirationDate(Some(parse_date(value)?))
            }
            // An empty value clears the notes.
            "notes" => WizardAction::SetNotes(value.to_string()),
            _ => return Err(InputError::UnknownCommand(input.to_string())),
        };
        Ok(Command::Dispatch(action))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::steps::CheckoutForm;

    fn state() -> WizardState {
        WizardState::new(NaiveDate::from_ymd_opt(2026, 10, 15).unwrap())
    }

    #[test]
    fn parses_detail_commands() {
        let state = state();

        assert_eq!(
            DetailsStep.interpret(&state, "name  Anglian Water Services "),
            Ok(Command::Dispatch(WizardAction::SetCustomerName(
                "Anglian Water Services".to_string()
            )))
        );
        assert_eq!(
            DetailsStep.interpret(&state, "expires 2027-03-31"),
            Ok(Command::Dispatch(WizardAction::SetExpirationDate(
                NaiveDate::from_ymd_opt(2027, 3, 31)
            )))
        );
        assert_eq!(
            DetailsStep.interpret(&state, "notes"),
            Ok(Command::Dispatch(WizardAction::SetNotes(String::new())))
        );
    }

    #[test]
    fn rejects_bad_dates_and_empty_names() {
        let state = state();

        assert_eq!(
            DetailsStep.interpret(&state, "expires 31/03/2027"),
            Err(InputError::InvalidDate("31/03/2027".to_string()))
        );
        assert_eq!(
            DetailsStep.interpret(&state, "name"),
            Err(InputError::MissingValue("name"))
        );
    }

    #[test]
    fn empty_fields_render_as_dash() {
        let state = state();
        let form = CheckoutForm::default();

        let text = DetailsStep.render(&StepContext {
            state: &state,
            checkout: &form,
            checkout_error: None,
        });

        assert_eq!(text, "Customer:   —\nExpires:    —\nNotes:      —\n");
    }
}
