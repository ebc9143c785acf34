//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// autobahn-report - summarize Autobahn WebSocket conformance results
///
/// Reads the per-case JSON result files written by the Autobahn test
/// suite, prints one line per case and an overall pass/fail verdict.
///
/// Examples:
///   autobahn-report --path reports/servers
///   autobahn-report -p reports/clients --fail-on-verdict
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the folder containing result JSON files
    #[arg(short, long, value_name = "DIR")]
    pub path: PathBuf,

    /// Path to configuration file
    ///
    /// If not specified, looks for .autobahn-report.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Exit with code 2 when any case failed
    ///
    /// By default the verdict is only printed and the exit code is 0.
    #[arg(long)]
    pub fail_on_verdict: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
