//! # strata-cli
//!
//! Inspect and query layered configuration files.
//!
//! This is the main entry point for the Strata CLI tool. It handles command parsing,
//! sets up logging and error handling, and dispatches to the appropriate command handlers.

use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;
use strata_core::error::StrataResult;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::CommandContext;
use output::errors::ErrorFormatter;

/// Load, merge and query configuration files
#[derive(Parser)]
#[command(name = "strata", version, about = "Layered configuration loader")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the merged configuration
    Show {
        /// Files or directories, later ones override earlier ones; prefix with '?' to allow missing
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<String>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json, env = "STRATA_FORMAT")]
        format: OutputFormat,
    },
    /// Print a single value by dotted key
    Get {
        key: String,
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<String>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json, env = "STRATA_FORMAT")]
        format: OutputFormat,
    },
    /// Verify that the configuration loads
    Check {
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<String>,
    },
    /// List supported file formats
    Formats,
}

/// Rendering for structured output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    setup_panic_handler();

    debug!("Starting Strata CLI v{}", env!("CARGO_PKG_VERSION"));

    match run_cli(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", ErrorFormatter::new().format_error(&err));
            ExitCode::FAILURE
        },
    }
}

fn run_cli(cli: Cli) -> StrataResult<()> {
    let ctx = CommandContext::new();
    commands::dispatch_command(cli.command, &ctx)
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "strata_cli={},strata_config={},strata_core={}",
            level, level, level
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("Strata encountered an unexpected error: {}", panic_info);
        eprintln!("Strata crashed! This is a bug.");
        eprintln!("Please report this at: https://github.com/strata-config/strata/issues");
        eprintln!("Error: {}", panic_info);
    }));
}
