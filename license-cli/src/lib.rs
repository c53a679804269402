pub mod app;
pub mod config;
pub mod console;
pub mod csv_export;
pub mod logging;
pub mod steps;
pub mod utils;
pub mod views;
