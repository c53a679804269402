//! Screens shown outside the wizard steps.
//!
//! - `licenses` - the "my licenses" table and the order success screen

mod licenses;

pub use licenses::{render_licenses, render_success};
