//! Command hints shown under each step.

/// A command and what it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Build a one-line status bar from a list of hints.
pub fn build_status_bar(hints: &[KeyHint]) -> String {
    hints
        .iter()
        .map(|h| format!("{}: {}", h.key, h.action))
        .collect::<Vec<_>>()
        .join(" │ ")
}

/// Commands available on every step.
pub mod common {
    use super::KeyHint;

    pub const NEXT: KeyHint = KeyHint::new("next", "Continue");
    pub const BACK: KeyHint = KeyHint::new("back", "Previous step");
    pub const RESTART: KeyHint = KeyHint::new("restart", "Start over");
    pub const HELP: KeyHint = KeyHint::new("help", "Commands");
    pub const QUIT: KeyHint = KeyHint::new("quit", "Exit");
}
