//! File Summarizer - textual statistics for a single file
//!
//! This library summarizes a file according to its kind: plain text files get
//! line and token statistics, log files additionally get keyword, IP, failure
//! and timeline statistics, and CSV files get a per-column table profile.

pub mod config;
pub mod core;
pub mod utils;

// Re-export main types for convenience
pub use crate::config::AnalyzerConfig;
pub use crate::core::analyzer::FileAnalyzer;
pub use crate::core::error::AnalysisError;
pub use crate::core::summary::RunSummary;
pub use crate::utils::file_utils::FileKind;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Summarize a single file with the default configuration
///
/// This is a convenience function for simple use cases.
///
/// # Arguments
///
/// * `file_path` - Path to the file to analyze
///
/// # Returns
///
/// The run summary, shaped by the file's kind
pub fn analyze_file<P: AsRef<std::path::Path>>(file_path: P) -> Result<RunSummary, AnalysisError> {
    FileAnalyzer::default().analyze_file(file_path.as_ref())
}
