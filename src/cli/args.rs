//! CLI argument definitions using clap
//!
//! Commands:
//! - couponapi serve [--config <path>] [--host <host>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// couponapi - in-memory coupon CRUD service
#[derive(Parser, Debug)]
#[command(name = "couponapi")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Optional JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind, overrides the config file
        #[arg(long)]
        host: Option<String>,

        /// Port to bind, overrides the config file
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
