//! autobahn-report - Autobahn conformance result summarizer
//!
//! Reads the per-case JSON files produced by the Autobahn WebSocket
//! test suite and prints a per-case summary with an overall verdict.
//!
//! Exit codes:
//!   0 - Report printed (whatever the verdict, unless --fail-on-verdict is set)
//!   1 - Runtime error (unreadable results directory, bad config, etc.)
//!   2 - Verdict failed and --fail-on-verdict is set

mod analysis;
mod cli;
mod config;
mod models;
mod report;
mod scanner;

use anyhow::{Context, Result};
use cli::Args;
use config::Config;
use std::io::{self, Write};
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Initialize logging
    init_logging(&args);

    info!("autobahn-report v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    match run_report(&args) {
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
        Err(e) => {
            error!("Report failed: {:#}", e);
            eprintln!("\n❌ Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to stderr; stdout carries the report.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Scan the results directory and print the summary. Returns exit code (0 or 2).
fn run_report(args: &Args) -> Result<i32> {
    let mut config = load_config(args)?;
    config.merge_with_args(args);

    let scan_config = scanner::ScanConfig::from(&config.scanner);
    let result_scanner = scanner::ResultScanner::new(args.path.clone(), scan_config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let outcomes = result_scanner.scan(&mut out)?;

    for (behavior, count) in analysis::behavior_counts(&outcomes) {
        debug!("{}: {}", behavior, count);
    }

    let rules = analysis::VerdictRules::from(&config.verdict);
    let summary =
        report::write_summary(outcomes, &rules, &mut out).context("Failed to write summary")?;
    out.flush().context("Failed to flush stdout")?;

    info!(
        "Verdict: {:?} ({} of {} cases failing)",
        summary.verdict,
        summary.failures().count(),
        summary.total
    );

    let exit_code = summary.verdict.exit_code(config.verdict.fail_on_verdict);
    if exit_code != 0 {
        warn!("Conformance verdict failed (exit code {})", exit_code);
    }

    Ok(exit_code)
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default()? {
        Some(config) => {
            info!("Loaded default config from {}", config::DEFAULT_CONFIG_FILE);
            Ok(config)
        }
        None => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}
