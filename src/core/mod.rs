//! Core module for file analysis
//!
//! This module contains the analyzers for each file kind, the summary types
//! they produce, the shared patterns, and the pipeline tying them together.

pub mod analyzer;
pub mod csv_analyzer;
pub mod error;
pub mod log_analyzer;
pub mod patterns;
pub mod summary;
pub mod text_analyzer;
