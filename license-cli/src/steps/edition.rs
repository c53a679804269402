use license_core::{Edition, WizardAction, WizardState};

use super::hints::KeyHint;
use super::{Command, InputError, StepContext, StepView, choose, render_choices};

pub struct EditionStep;

const HINTS: &[KeyHint] = &[KeyHint::new("1-2", "Choose edition")];

impl StepView for EditionStep {
    fn render(&self, ctx: &StepContext<'_>) -> String {
        let order = ctx.state.order();
        let mut out = String::new();
        if order.order_type.is_some_and(|t| t.is_demo()) {
            out.push_str("[DEMO]\n");
        }
        out.push_str("Which edition?\n");
        out.push_str(&render_choices(
            Edition::all(),
            order.edition.as_ref(),
            |e| e.label().to_string(),
        ));
        out
    }

    fn hints(&self) -> &'static [KeyHint] {
        HINTS
    }

    fn interpret(&self, _state: &WizardState, input: &str) -> Result<Command, InputError> {
        let edition = choose(input, Edition::all(), Edition::as_str)?;
        Ok(Command::Dispatch(WizardAction::SetEdition(edition)))
    }
}
