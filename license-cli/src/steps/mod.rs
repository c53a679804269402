//! Terminal renderings of the seven wizard steps.
//!
//! Each step is a pair of pure functions: `render` turns the current state into
//! text and `interpret` turns one line of input into a [`Command`]. Neither
//! touches the wizard directly; the console applies the command.

mod checkout;
mod details;
mod edition;
pub mod hints;
mod license_model;
mod order_type;
mod review;
mod setup;

use license_core::{WizardAction, WizardState, WizardStep};
use thiserror::Error;

pub use checkout::{CheckoutForm, CheckoutInput, PaymentMethod};

use hints::{KeyHint, common};

/// What one line of input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(WizardAction),
    /// Local-only checkout fields; never part of the order.
    Checkout(CheckoutInput),
    Complete,
    Help,
    Quit,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command '{0}'; type 'help' for options")]
    UnknownCommand(String),

    #[error("'{input}' is not one of: {options}")]
    InvalidChoice { input: String, options: String },

    #[error("'{0}' is not a whole number of users")]
    InvalidNumber(String),

    #[error("'{0}' is not a date in YYYY-MM-DD form")]
    InvalidDate(String),

    #[error("'{0}' needs a value")]
    MissingValue(&'static str),

    #[error("'{command}' does not apply to {model} licenses")]
    NotForModel {
        command: &'static str,
        model: &'static str,
    },
}

/// Everything a step may show.
pub struct StepContext<'a> {
    pub state: &'a WizardState,
    pub checkout: &'a CheckoutForm,
    pub checkout_error: Option<&'a str>,
}

pub trait StepView: Sync {
    fn render(&self, ctx: &StepContext<'_>) -> String;

    /// Step-specific commands, listed before the common ones.
    fn hints(&self) -> &'static [KeyHint];

    fn interpret(&self, state: &WizardState, input: &str) -> Result<Command, InputError>;
}

/// The view for `step`.
pub fn view_for(step: WizardStep) -> &'static dyn StepView {
    match step {
        WizardStep::OrderType => &order_type::OrderTypeStep,
        WizardStep::Edition => &edition::EditionStep,
        WizardStep::LicenseModel => &license_model::LicenseModelStep,
        WizardStep::Setup => &setup::SetupStep,
        WizardStep::Details => &details::DetailsStep,
        WizardStep::Review => &review::ReviewStep,
        WizardStep::Checkout => &checkout::CheckoutStep,
    }
}

/// Parses a line of input on the current step.
///
/// The common commands work everywhere; anything else goes to the step.
pub fn parse_command(state: &WizardState, input: &str) -> Result<Command, InputError> {
    let trimmed = input.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "next" | "n" => Ok(Command::Dispatch(WizardAction::Advance)),
        "back" | "b" => Ok(Command::Dispatch(WizardAction::Retreat)),
        "restart" => Ok(Command::Dispatch(WizardAction::Reset)),
        "help" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        _ => view_for(state.step()).interpret(state, trimmed),
    }
}

/// Screen header plus the step body.
pub fn render_step(ctx: &StepContext<'_>) -> String {
    let step = ctx.state.step();
    let mut out = format!(
        "── Step {} of {}: {} ──\n",
        step.number(),
        WizardStep::all().len(),
        step.title()
    );
    out.push_str(&view_for(step).render(ctx));
    out
}

/// Status bar for the current step.
pub fn render_hints(step: WizardStep) -> String {
    let mut all: Vec<KeyHint> = view_for(step).hints().to_vec();
    if step.next().is_some() {
        all.push(common::NEXT);
    }
    if step.previous().is_some() {
        all.push(common::BACK);
    }
    all.extend([common::RESTART, common::HELP, common::QUIT]);
    hints::build_status_bar(&all)
}

/// Splits `"users 5"` into `("users", "5")`.
fn split_command(input: &str) -> (String, &str) {
    match input.split_once(char::is_whitespace) {
        Some((head, rest)) => (head.to_ascii_lowercase(), rest.trim()),
        None => (input.to_ascii_lowercase(), ""),
    }
}

/// Picks an option by its 1-based number or its wire name.
fn choose<T: Copy>(
    input: &str,
    options: &[T],
    name: fn(&T) -> &'static str,
) -> Result<T, InputError> {
    let wanted = input.trim().to_ascii_lowercase();
    if let Ok(index) = wanted.parse::<usize>() {
        if let Some(option) = index.checked_sub(1).and_then(|i| options.get(i)) {
            return Ok(*option);
        }
    }
    options
        .iter()
        .find(|option| name(option) == wanted)
        .copied()
        .ok_or_else(|| InputError::InvalidChoice {
            input: input.trim().to_string(),
            options: options.iter().map(name).collect::<Vec<_>>().join(", "),
        })
}

/// Numbered option list; the selected option is marked.
fn render_choices<T: PartialEq>(
    options: &[T],
    selected: Option<&T>,
    label: fn(&T) -> String,
) -> String {
    options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let marker = if selected == Some(option) { "●" } else { "○" };
            format!("  {} {}. {}\n", marker, i + 1, label(option))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use license_core::{Edition, OrderType};
    use pretty_assertions::assert_eq;

    use super::*;

    fn fresh() -> WizardState {
        WizardState::new(NaiveDate::from_ymd_opt(2026, 10, 15).unwrap())
    }

    #[test]
    fn common_commands_work_on_every_step() {
        let state = fresh();

        assert_eq!(
            parse_command(&state, " NEXT "),
            Ok(Command::Dispatch(WizardAction::Advance))
        );
        assert_eq!(
            parse_command(&state, "b"),
            Ok(Command::Dispatch(WizardAction::Retreat))
        );
        assert_eq!(
            parse_command(&state, "restart"),
            Ok(Command::Dispatch(WizardAction::Reset))
        );
        assert_eq!(parse_command(&state, "?"), Ok(Command::Help));
        assert_eq!(parse_command(&state, "quit"), Ok(Command::Quit));
    }

    #[test]
    fn other_input_goes_to_the_step() {
        let state = fresh();

        assert_eq!(
            parse_command(&state, "2"),
            Ok(Command::Dispatch(WizardAction::SetOrderType(OrderType::New)))
        );
    }

    #[test]
    fn choose_accepts_number_or_name() {
        assert_eq!(
            choose("2", Edition::all(), Edition::as_str),
            Ok(Edition::Enterprise)
        );
        assert_eq!(
            choose("Professional", Edition::all(), Edition::as_str),
            Ok(Edition::Professional)
        );
    }

    #[test]
    fn choose_lists_options_on_error() {
        assert_eq!(
            choose("0", Edition::all(), Edition::as_str),
            Err(InputError::InvalidChoice {
                input: "0".to_string(),
                options: "professional, enterprise".to_string(),
            })
        );
    }

    #[test]
    fn first_step_hints_have_no_back() {
        let bar = render_hints(WizardStep::OrderType);

        assert!(!bar.contains("back"));
        assert!(bar.contains("quit"));
    }

    #[test]
    fn header_shows_position() {
        let state = fresh();
        let form = CheckoutForm::default();
        let ctx = StepContext {
            state: &state,
            checkout: &form,
            checkout_error: None,
        };

        assert!(render_step(&ctx).starts_with("── Step 1 of 7: Order Type ──"));
    }
}
