//! Failure categories of a run and their process exit codes

use std::io;
use std::path::{Path, PathBuf};

/// Error returned by the analysis pipeline
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The input path does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The CSV file could not be parsed into a table
    #[error("Failed to parse CSV: {0}")]
    CsvParse(String),

    /// The input exists but could not be read
    #[error("Permission denied reading file: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// Anything else
    #[error("Unexpected error: {0:#}")]
    Unexpected(#[from] anyhow::Error),
}

impl AnalysisError {
    /// Process exit code reported for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            AnalysisError::NotFound(_) => 2,
            AnalysisError::CsvParse(_) => 3,
            AnalysisError::PermissionDenied(_) => 4,
            AnalysisError::Unexpected(_) => 1,
        }
    }

    /// Classify an io error raised while reading `path`
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => AnalysisError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => AnalysisError::PermissionDenied(path.to_path_buf()),
            _ => AnalysisError::Unexpected(anyhow::Error::new(err)
                .context(format!("Failed to read {}", path.display()))),
        }
    }
}
