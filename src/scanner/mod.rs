//! Result scanner for collecting per-case outcome files.
//!
//! This module lists a results directory (non-recursively), picks out
//! the per-case JSON files and parses each one into a [`TestOutcome`].
//! A file that cannot be read or parsed is reported and skipped.

use crate::models::TestOutcome;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Configuration for result scanning.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Suite-level manifest to skip (e.g., "index.json")
    pub manifest_file: String,
    /// Required file name suffix (e.g., ".json")
    pub extension: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            manifest_file: "index.json".to_string(),
            extension: ".json".to_string(),
        }
    }
}

impl From<&crate::config::ScannerConfig> for ScanConfig {
    fn from(config: &crate::config::ScannerConfig) -> Self {
        Self {
            manifest_file: config.manifest_file.clone(),
            extension: config.extension.clone(),
        }
    }
}

/// Failure to turn a single result file into an outcome.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("{0}")]
    Read(#[from] io::Error),

    #[error("{0}")]
    Malformed(#[from] serde_json::Error),
}

/// Scanner for a directory of per-case result files.
pub struct ResultScanner {
    config: ScanConfig,
    results_dir: PathBuf,
}

impl ResultScanner {
    /// Create a new result scanner.
    pub fn new(results_dir: PathBuf, config: ScanConfig) -> Self {
        Self {
            config,
            results_dir,
        }
    }

    /// Scan the directory and parse every qualifying result file.
    ///
    /// Files that fail to load produce an `Error reading` line on `out`
    /// and contribute no outcome. Outcomes are returned in listing order.
    pub fn scan<W: Write>(&self, out: &mut W) -> Result<Vec<TestOutcome>> {
        info!("Scanning results in {}", self.results_dir.display());

        let entries = fs::read_dir(&self.results_dir).with_context(|| {
            format!(
                "Failed to read results directory: {}",
                self.results_dir.display()
            )
        })?;

        let mut outcomes = Vec::new();
        let mut failed = 0usize;

        for entry in entries {
            let entry = entry.with_context(|| {
                format!(
                    "Failed to list results directory: {}",
                    self.results_dir.display()
                )
            })?;
            let name = entry.file_name().to_string_lossy().to_string();

            if !self.matches(&name) {
                continue;
            }

            match load_outcome(&entry.path()) {
                Ok(outcome) => {
                    debug!("Loaded {} ({})", name, outcome);
                    outcomes.push(outcome);
                }
                Err(e) => {
                    debug!("Rejected {}: {:?}", name, e);
                    writeln!(out, "Error reading {}: {}", name, e)
                        .context("Failed to write diagnostic")?;
                    failed += 1;
                }
            }
        }

        info!("Loaded {} results ({} rejected)", outcomes.len(), failed);
        Ok(outcomes)
    }

    /// Check if a directory entry name is a per-case result file.
    pub fn matches(&self, name: &str) -> bool {
        name != self.config.manifest_file && name.ends_with(&self.config.extension)
    }
}

/// Read and parse one result file.
///
/// The file is fully read (and its handle dropped) before parsing.
fn load_outcome(path: &Path) -> Result<TestOutcome, ScanError> {
    let content = fs::read(path)?;
    let outcome = serde_json::from_slice(&content)?;
    Ok(outcome)
}
