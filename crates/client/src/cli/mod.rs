//! CLI command definitions.

pub mod pets;

use clap::{Parser, Subcommand, ValueEnum};

use crate::client::DEFAULT_BASE_URL;

/// CLI client for the pet store API.
#[derive(Debug, Parser)]
#[command(name = "petstore-client")]
#[command(about = "CLI client for the pet store API", long_about = None)]
pub struct Cli {
    /// Upstream base URL.
    #[arg(long, env = "PETSTORE_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, env = "PETSTORE_TIMEOUT_SECS", default_value = "5")]
    pub timeout_secs: u64,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Pet management.
    Pets(pets::PetsCommand),
}
