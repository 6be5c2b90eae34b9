//! Plain text analysis
//!
//! Line level statistics (empty and duplicate lines) and token level
//! statistics (word frequencies, numeric vs textual token samples).

use log::debug;

use crate::config::AnalyzerConfig;
use crate::core::patterns::{self, TOKEN};
use crate::core::summary::TextSummary;
use crate::utils::counter::FrequencyCounter;

/// Analyze the lines of a text file.
///
/// # Arguments
///
/// * `lines` - Lines of the file, terminators included
/// * `config` - Supplies `top_n` and `sample_limit`
///
/// # Returns
///
/// The text summary for the lines
pub fn analyze_text(lines: &[String], config: &AnalyzerConfig) -> TextSummary {
    let empty_lines = lines.iter().filter(|l| l.trim().is_empty()).count();

    let line_counts: FrequencyCounter = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.strip_suffix('\n').unwrap_or(l))
        .collect();

    let mut numeric_tokens = Vec::new();
    let mut text_tokens = Vec::new();
    for line in lines {
        let lower = line.to_lowercase();
        for token in TOKEN.find_iter(&lower) {
            let token = token.as_str();
            if patterns::parses_as_float(token) {
                numeric_tokens.push(token.to_string());
            } else {
                text_tokens.push(token.to_string());
            }
        }
    }
    debug!(
        "Tokenized {} numeric and {} textual tokens",
        numeric_tokens.len(),
        text_tokens.len()
    );

    // the float check misses some digit-only tokens, so filter again
    let word_freq: FrequencyCounter = text_tokens
        .iter()
        .map(String::as_str)
        .filter(|t| !patterns::is_all_numeric(t))
        .collect();

    numeric_tokens.truncate(config.sample_limit);
    text_tokens.truncate(config.sample_limit);

    TextSummary {
        empty_lines,
        duplicate_lines: line_counts.repeated(),
        most_frequent_words: word_freq.most_common(config.top_n),
        numeric_tokens_sample: numeric_tokens,
        text_tokens_sample: text_tokens,
    }
}
