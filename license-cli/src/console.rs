//! Interactive wizard on a line-oriented terminal.
//!
//! Generic over its input and output so the whole order flow can be driven
//! from a script in tests.

use std::io::{BufRead, Write};

use anyhow::Context;
use license_core::{LicenseOrder, OrderRepository, WizardAction, WizardSession, WizardStep};
use tracing::{debug, warn};

use crate::steps::{self, CheckoutForm, Command, StepContext};
use crate::views::{render_licenses, render_success};

pub struct Console<R, W> {
    input: R,
    output: W,
    session: WizardSession,
    checkout: CheckoutForm,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, session: WizardSession) -> Self {
        Self {
            input,
            output,
            session,
            checkout: CheckoutForm::default(),
        }
    }

    pub fn session(&self) -> &WizardSession {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until an order is placed, the user quits, or input ends.
    ///
    /// Returns the placed order, if any.
    pub async fn run(&mut self, repo: &dyn OrderRepository) -> anyhow::Result<Option<LicenseOrder>> {
        let mut redraw = true;
        loop {
            if redraw {
                self.render()?;
            }
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read input")?;
            if read == 0 {
                debug!("input closed");
                writeln!(self.output)?;
                return Ok(None);
            }
            if line.trim().is_empty() {
                redraw = false;
                continue;
            }

            let command = match steps::parse_command(self.session.state(), &line) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.output, "  ! {}", e)?;
                    redraw = false;
                    continue;
                }
            };

            redraw = true;
            match command {
                Command::Dispatch(WizardAction::Advance) => self.advance()?,
                Command::Dispatch(action) => {
                    if matches!(action, WizardAction::Reset) {
                        self.checkout = CheckoutForm::default();
                    }
                    self.session.dispatch(action);
                }
                Command::Checkout(input) => self.checkout.apply(input),
                Command::Complete => {
                    if let Some(order) = self.complete(repo).await? {
                        return Ok(Some(order));
                    }
                }
                Command::Help => {
                    writeln!(self.output, "{}", steps::render_hints(self.session.state().step()))?;
                    redraw = false;
                }
                Command::Quit => return Ok(None),
            }
        }
    }

    fn render(&mut self) -> anyhow::Result<()> {
        let state = self.session.state();
        let ctx = StepContext {
            state,
            checkout: &self.checkout,
            checkout_error: self.session.checkout_error(),
        };
        let screen = steps::render_step(&ctx);
        let hints = steps::render_hints(state.step());
        writeln!(self.output, "\n{}{}", screen, hints)?;
        Ok(())
    }

    /// Advances, or explains what is missing.
    fn advance(&mut self) -> anyhow::Result<()> {
        let state = self.session.state();
        if state.step() == WizardStep::Checkout {
            writeln!(self.output, "  ! this is the last step; type 'complete' to place the order")?;
            return Ok(());
        }
        let blockers = state.advance_blockers();
        if !blockers.is_empty() {
            for blocker in blockers {
                writeln!(self.output, "  ! {}", blocker)?;
            }
            return Ok(());
        }
        self.session.dispatch(WizardAction::Advance);
        Ok(())
    }

    /// Submits the order. A rejection stays on the checkout screen.
    async fn complete(&mut self, repo: &dyn OrderRepository) -> anyhow::Result<Option<LicenseOrder>> {
        let order = match self.session.submit(repo).await {
            Ok(order) => order,
            Err(e) => {
                warn!(error = %e, "order not placed");
                return Ok(None);
            }
        };
        self.checkout = CheckoutForm::default();

        writeln!(self.output, "\n{}", render_success(&order))?;
        writeln!(self.output, "My licenses")?;
        match repo.list_orders().await {
            Ok(orders) => write!(self.output, "{}", render_licenses(&orders))?,
            Err(e) => writeln!(self.output, "  ! could not load licenses: {}", e)?,
        }
        Ok(Some(order))
    }
}
