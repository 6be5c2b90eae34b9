//! Analyzer configuration
//!
//! Tunables for the text and log analyzers. Every field has a default, so a
//! configuration file only needs to name the values it overrides.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Keywords counted by substring in log files
pub const DEFAULT_KEYWORDS: [&str; 6] = ["error", "failed", "fail", "warning", "warn", "login"];

/// Options shared by the analyzers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Number of entries kept in `most_frequent_words`
    pub top_n: usize,

    /// Number of tokens kept in each token sample
    pub sample_limit: usize,

    /// Keywords counted in log files, in output order
    pub keywords: Vec<String>,

    /// Number of entries kept in `top_ip_counts`
    pub max_ips: usize,

    /// Number of entries kept in `repeated_failures`
    pub max_failures: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            sample_limit: 50,
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            max_ips: 20,
            max_failures: 10,
        }
    }
}

impl AnalyzerConfig {
    /// Load a configuration from a JSON file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON configuration file
    ///
    /// # Returns
    ///
    /// The parsed configuration, with defaults for any omitted field
    pub fn from_file(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
        Self::from_json(&config_str)
            .with_context(|| format!("Invalid JSON in configuration file: {}", path.display()))
    }

    /// Parse a configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
