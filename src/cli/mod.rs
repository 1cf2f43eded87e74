//! CLI module for orderlink
//!
//! Provides command-line interface for:
//! - serve: Run the HTTP service
//! - extract: Debug a widget query token offline
//! - orders: Dump the dataset

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, ServeArgs};
pub use commands::{extract, orders, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
