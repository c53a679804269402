use license_core::{OrderType, WizardAction, WizardState};

use super::hints::KeyHint;
use super::{Command, InputError, StepContext, StepView, choose, render_choices};

pub struct OrderTypeStep;

const HINTS: &[KeyHint] = &[KeyHint::new("1-4", "Choose order type")];

impl StepView for OrderTypeStep {
    fn render(&self, ctx: &StepContext<'_>) -> String {
        let mut out = String::from("What kind of order is this?\n");
        out.push_str(&render_choices(
            OrderType::all(),
            ctx.state.order().order_type.as_ref(),
            |t| t.label().to_string(),
        ));
        out
    }

    fn hints(&self) -> &'static [KeyHint] {
        HINTS
    }

    fn interpret(&self, _state: &WizardState, input: &str) -> Result<Command, InputError> {
        let order_type = match OrderType::parse(&input.to_ascii_lowercase()) {
            Some(order_type) => order_type,
            None => choose(input, OrderType::all(), OrderType::as_str)?,
        };
        Ok(Command::Dispatch(WizardAction::SetOrderType(order_type)))
    }
}
