//! Core file analyzer implementation
//!
//! `FileAnalyzer` runs the type-dispatch pipeline: check the input exists,
//! detect its kind, read it, run the matching analyzers and assemble the
//! `RunSummary`.

use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::config::AnalyzerConfig;
use crate::core::csv_analyzer::analyze_csv;
use crate::core::error::AnalysisError;
use crate::core::log_analyzer::analyze_log;
use crate::core::summary::RunSummary;
use crate::core::text_analyzer::analyze_text;
use crate::utils::file_utils::{self, FileKind};

/// Core file analyzer structure
#[derive(Debug, Clone, Default)]
pub struct FileAnalyzer {
    /// Tunables passed to the text and log analyzers
    config: AnalyzerConfig,
}

impl FileAnalyzer {
    /// Create a new FileAnalyzer instance
    ///
    /// # Arguments
    ///
    /// * `config` - Analyzer tunables
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Analyze a file and summarize it according to its kind
    ///
    /// # Arguments
    ///
    /// * `file_path` - Path to the file to analyze
    ///
    /// # Returns
    ///
    /// The summary of the file, or the category of failure
    pub fn analyze_file(&self, file_path: &Path) -> Result<RunSummary, AnalysisError> {
        if !file_path.exists() {
            return Err(AnalysisError::NotFound(file_path.to_path_buf()));
        }

        let kind = file_utils::detect_file_kind(file_path);
        info!("Analyzing {} as {}", file_path.display(), kind);
        self.analyze_as(file_path, kind)
    }

    /// Analyze a file as the given kind, bypassing extension detection
    pub fn analyze_as(&self, file_path: &Path, kind: FileKind) -> Result<RunSummary, AnalysisError> {
        let start_time = Instant::now();

        let summary = match kind {
            FileKind::Csv => RunSummary::Csv {
                csv: analyze_csv(file_path)?,
            },
            FileKind::Text | FileKind::Log => {
                let lines = file_utils::read_lines(file_path)
                    .map_err(|e| AnalysisError::from_io(e, file_path))?;
                let metadata = file_utils::get_file_metadata(file_path, &lines);
                let text = analyze_text(&lines, &self.config);

                if kind == FileKind::Log {
                    RunSummary::Log {
                        metadata,
                        text,
                        log: analyze_log(&lines, &self.config),
                    }
                } else {
                    RunSummary::Text { metadata, text }
                }
            }
        };

        debug!("Analysis completed in {:?}", start_time.elapsed());
        Ok(summary)
    }
}
