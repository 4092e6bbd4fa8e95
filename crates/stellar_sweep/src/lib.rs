//! Command-line front end for stellar error-table sweeps
//!
//! Runs a sweep with one of the built-in oracles, then shows the table in a
//! terminal viewer or writes it out as SVG, JSON or plain text.

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod output;
pub mod ui;

#[cfg(test)]
mod tests;

pub use app::App;
pub use cli::Args;
pub use config::{AppConfig, OracleConfig, OracleKind};
pub use logging::init_logging;
