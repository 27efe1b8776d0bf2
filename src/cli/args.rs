//! CLI argument definitions using clap
//!
//! Commands:
//! - freightline init [--config <path>] [--data-dir <dir>]
//! - freightline start [--config <path>] [--data-dir <dir>] [--port <port>]

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Freightline - logistics site backend
#[derive(Parser, Debug)]
#[command(name = "freightline")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the data directory and any missing collection files
    Init {
        /// Path to JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Data directory (overrides configuration)
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Start the HTTP server
    Start {
        /// Path to JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Data directory (overrides configuration)
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Port to listen on (overrides configuration)
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
