//! Output formatter for run summaries
//!
//! Renders a `RunSummary` as indented JSON for stdout, and formats the single
//! line printed when a run fails.

use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::error::AnalysisError;
use crate::core::summary::RunSummary;

/// Render a summary as JSON with two-space indentation
///
/// # Arguments
///
/// * `summary` - The summary to render
///
/// # Returns
///
/// The rendered document
pub fn render_summary(summary: &RunSummary) -> Result<String> {
    serde_json::to_string_pretty(summary).context("Failed to render summary as JSON")
}

/// One-line description of a failed run
///
/// Colored when stdout is a terminal; plain otherwise.
pub fn format_error(err: &AnalysisError) -> String {
    let line = err.to_string();
    match err {
        AnalysisError::Unexpected(_) => line.red().bold().to_string(),
        _ => line.yellow().to_string(),
    }
}
