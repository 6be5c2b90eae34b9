//! Pattern definitions for the file summarizer
//!
//! Regexes shared by the text and log analyzers, compiled once, plus the small
//! token and timestamp helpers built on them.

use chrono::{NaiveDateTime, Timelike};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Words, numbers, contractions and hyphenated words as single tokens
    pub static ref TOKEN: Regex = Regex::new(r"[\w\-\.']+").unwrap();

    /// Whole-word "error"
    pub static ref ERROR_WORD: Regex = Regex::new(r"\berror\b").unwrap();

    /// Whole-word "warn" or "warning"
    pub static ref WARNING_WORD: Regex = Regex::new(r"\bwarn(?:ing)?\b").unwrap();

    /// Dotted quads without octet range validation
    pub static ref IPV4: Regex = Regex::new(r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b").unwrap();

    /// Lines reporting a failure or an authentication event
    pub static ref FAILURE_LINE: Regex = Regex::new(r"(?i)failed|fail|authentication").unwrap();

    /// ISO-like timestamp with a space or `T` separator
    pub static ref TIMESTAMP: Regex =
        Regex::new(r"\d{4}-\d{2}-\d{2}[ T]\d{2}:\d{2}:\d{2}").unwrap();
}

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const HOUR_BUCKET_FORMAT: &str = "%Y-%m-%d %H:00";

/// Check whether a token reads as a floating point number.
///
/// Accepts what a general float parser does: signs, decimals, exponents,
/// `inf`/`infinity`/`nan`, and underscores placed between two digits.
pub fn parses_as_float(token: &str) -> bool {
    if token.contains('_') {
        let chars: Vec<char> = token.chars().collect();
        let separators_ok = chars.iter().enumerate().all(|(i, &c)| {
            c != '_'
                || (i > 0
                    && chars[i - 1].is_ascii_digit()
                    && chars.get(i + 1).is_some_and(|n| n.is_ascii_digit()))
        });
        if !separators_ok {
            return false;
        }
        return token.replace('_', "").parse::<f64>().is_ok();
    }
    token.parse::<f64>().is_ok()
}

/// Check whether every character of a non-empty token is numeric
pub fn is_all_numeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_numeric)
}

/// Parse a timestamp matched by [`TIMESTAMP`], treating a space separator as `T`.
///
/// Returns `None` when the text is not a real date and time (month 13, hour 24,
/// leap seconds...).
pub fn parse_timestamp(candidate: &str) -> Option<NaiveDateTime> {
    let normalized = candidate.replacen(' ', "T", 1);
    let parsed = NaiveDateTime::parse_from_str(&normalized, TIMESTAMP_FORMAT).ok()?;
    // chrono represents :60 as a leap second
    if parsed.nanosecond() >= 1_000_000_000 {
        return None;
    }
    Some(parsed)
}

/// Truncate a timestamp to its `YYYY-MM-DD HH:00` histogram key
pub fn hour_bucket(timestamp: &NaiveDateTime) -> String {
    timestamp.format(HOUR_BUCKET_FORMAT).to_string()
}

/// Count non-overlapping occurrences of `needle` in `haystack`
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
