//! Utility modules for the file summarizer
//!
//! File reading and kind detection, frequency counting, and rendering of the
//! finished summary.

pub mod counter;
pub mod file_utils;
pub mod output_formatter;
