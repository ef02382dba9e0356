//! CLI module for the food tracker
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP API
//! - list: One-shot list query printed as JSON
//! - get: One-shot lookup by location id printed as JSON

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{get, list, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_pretty;
