//! CLI command definitions and dispatch for the `explore` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod decision;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Record like/pass decisions and see who liked you.
#[derive(Parser)]
#[command(name = "explore", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log line format.
    #[arg(long, value_enum, default_value_t = LogFormatArg::Pretty, global = true, env = "EXPLORE_LOG_FORMAT")]
    pub log_format: LogFormatArg,

    /// Export spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true, env = "EXPLORE_OTEL")]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on (overrides config.toml).
        #[arg(short, long, env = "EXPLORE_PORT")]
        port: Option<u16>,

        /// Host to bind to (overrides config.toml).
        #[arg(long, env = "EXPLORE_HOST")]
        host: Option<String>,
    },

    /// Record a decision from one user about another (a like unless --pass).
    Put {
        /// User making the decision.
        actor: String,

        /// User the decision is about.
        recipient: String,

        /// Record a pass instead of a like.
        #[arg(long)]
        pass: bool,
    },

    /// List users who liked USER. Marks them as seen.
    Likes {
        /// User whose likes to list.
        user: String,

        /// Only likes USER has not been shown yet.
        #[arg(long)]
        new: bool,

        /// Pagination token from a previous page.
        #[arg(long, default_value = "")]
        token: String,
    },

    /// Count users who liked USER.
    Count {
        /// User whose likes to count.
        user: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
