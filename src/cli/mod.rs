//! CLI module
//!
//! Provides the `serve` command: resolve configuration, build the coupon
//! store and run the HTTP server.

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{build_state, resolve_config, run, run_command, serve, ServiceConfig};
pub use errors::{CliError, CliErrorCode, CliResult};
