use license_core::{LicenseModel, WizardAction, WizardState};

use super::hints::KeyHint;
use super::{Command, InputError, StepContext, StepView, choose, render_choices};

pub struct LicenseModelStep;

const HINTS: &[KeyHint] = &[KeyHint::new("1-3", "Choose license model")];

impl StepView for LicenseModelStep {
    fn render(&self, ctx: &StepContext<'_>) -> String {
        let mut out = String::from("How will the product be licensed?\n");
        out.push_str(&render_choices(
            LicenseModel::all(),
            ctx.state.order().license_model.as_ref(),
            |m| m.label().to_string(),
        ));
        out
    }

    fn hints(&self) -> &'static [KeyHint] {
        HINTS
    }

    fn interpret(&self, _state: &WizardState, input: &str) -> Result<Command, InputError> {
        let model = choose(input, LicenseModel::all(), LicenseModel::as_str)?;
        Ok(Command::Dispatch(WizardAction::SetLicenseModel(model)))
    }
}
