//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.autobahn-report.toml` files.

use crate::models::Behavior;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".autobahn-report.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Scanner settings.
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Verdict settings.
    #[serde(default)]
    pub verdict: VerdictConfig,
}

/// Result scanner settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Manifest file name excluded from aggregation.
    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,

    /// File name suffix of per-case result files.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            manifest_file: default_manifest_file(),
            extension: default_extension(),
        }
    }
}

fn default_manifest_file() -> String {
    "index.json".to_string()
}

fn default_extension() -> String {
    ".json".to_string()
}

/// Verdict handling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictConfig {
    /// Behavior labels counted as a pass (exact match).
    #[serde(default = "default_passing_behaviors")]
    pub passing_behaviors: Vec<String>,

    /// Exit with code 2 when the verdict is a failure.
    /// Off by default: the verdict is only reported by the marker line.
    #[serde(default)]
    pub fail_on_verdict: bool,
}

impl Default for VerdictConfig {
    fn default() -> Self {
        Self {
            passing_behaviors: default_passing_behaviors(),
            fail_on_verdict: false,
        }
    }
}

fn default_passing_behaviors() -> Vec<String> {
    Behavior::DEFAULT_PASSING
        .iter()
        .map(ToString::to_string)
        .collect()
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        Self::load_from_dir(Path::new("."))
    }

    /// Try to load the default config file from a directory.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(DEFAULT_CONFIG_FILE);

        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI flags only ever enable behavior; they never switch off a
    /// setting made in the config file.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if args.fail_on_verdict {
            self.verdict.fail_on_verdict = true;
        }
    }
}
