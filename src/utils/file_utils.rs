//! File handling utilities
//!
//! This module provides the boundary helpers the pipeline consumes: file kind
//! detection, lossy line reading and basic file metadata.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use log::{debug, warn};

use crate::core::summary::Metadata;

/// Kind of file being summarized, decided by extension alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Comma separated values (`.csv`)
    Csv,
    /// Log file (`.log`)
    Log,
    /// Anything else
    Text,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileKind::Csv => "csv",
            FileKind::Log => "log",
            FileKind::Text => "text",
        };
        f.write_str(name)
    }
}

/// Detect the file kind from the path's extension.
///
/// # Arguments
///
/// * `file_path` - Path to the file
///
/// # Returns
///
/// `Csv` for `.csv`, `Log` for `.log` (case-insensitive), `Text` otherwise
pub fn detect_file_kind(file_path: &Path) -> FileKind {
    let ext = file_path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => FileKind::Csv,
        "log" => FileKind::Log,
        _ => FileKind::Text,
    }
}

/// Read a file into lines.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than failing. Line endings are
/// normalized (`\r\n` and lone `\r` become `\n`) and every line keeps its
/// terminator; only the last line may lack one.
///
/// # Arguments
///
/// * `file_path` - Path to the file
///
/// # Returns
///
/// The lines of the file, or the io error from opening/reading it
pub fn read_lines(file_path: &Path) -> io::Result<Vec<String>> {
    let bytes = fs::read(file_path)?;
    let content = String::from_utf8_lossy(&bytes);
    if let std::borrow::Cow::Owned(_) = content {
        warn!(
            "{} is not valid UTF-8, undecodable bytes were replaced",
            file_path.display()
        );
    }

    let lines = split_lines(&content);
    debug!("Read {} lines from {}", lines.len(), file_path.display());
    Ok(lines)
}

/// Split text into lines, normalizing line endings to `\n`
pub fn split_lines(content: &str) -> Vec<String> {
    let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    normalized.split_inclusive('\n').map(str::to_string).collect()
}

/// Compute size, line, word and character counts.
///
/// The size comes from a filesystem stat; if the stat fails (e.g. the file was
/// removed after reading) it is reported as -1.
pub fn get_file_metadata(file_path: &Path, lines: &[String]) -> Metadata {
    let size_bytes = match fs::metadata(file_path) {
        Ok(meta) => i64::try_from(meta.len()).unwrap_or(i64::MAX),
        Err(e) => {
            warn!("Could not stat {}: {}", file_path.display(), e);
            -1
        }
    };

    Metadata {
        size_bytes,
        num_lines: lines.len(),
        num_words: lines.iter().map(|l| l.split_whitespace().count()).sum(),
        num_chars: lines.iter().map(|l| l.chars().count()).sum(),
    }
}
