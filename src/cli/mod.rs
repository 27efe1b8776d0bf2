//! CLI module
//!
//! Provides command-line interface for:
//! - init: Create the data directory and empty collection files
//! - start: Serve the HTTP API

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, resolve_config, run, run_command, start, COLLECTIONS};
pub use errors::{CliError, CliResult};
