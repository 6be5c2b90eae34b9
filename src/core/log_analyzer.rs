//! Log file analysis
//!
//! Heuristic, regex based insights for log files: error and warning counts,
//! keyword counts, IP addresses, repeated failure lines and an hourly
//! timeline of timestamped lines.

use std::collections::BTreeMap;

use log::debug;

use crate::config::AnalyzerConfig;
use crate::core::patterns::{self, ERROR_WORD, FAILURE_LINE, IPV4, TIMESTAMP, WARNING_WORD};
use crate::core::summary::LogSummary;
use crate::utils::counter::FrequencyCounter;

/// Analyze the lines of a log file.
///
/// # Arguments
///
/// * `lines` - Lines of the file, terminators included
/// * `config` - Supplies the keyword list and the IP/failure list sizes
///
/// # Returns
///
/// The log summary for the lines
pub fn analyze_log(lines: &[String], config: &AnalyzerConfig) -> LogSummary {
    let text = lines.join("\n");
    let lower = text.to_lowercase();

    let error_count = ERROR_WORD.find_iter(&lower).count();
    let warning_count = WARNING_WORD.find_iter(&lower).count();

    let keyword_counts = config
        .keywords
        .iter()
        .map(|k| (k.clone(), patterns::count_occurrences(&lower, k)))
        .collect();

    let ips: FrequencyCounter = IPV4.find_iter(&text).map(|m| m.as_str()).collect();

    let failures: FrequencyCounter = lines
        .iter()
        .filter(|l| FAILURE_LINE.is_match(l))
        .map(String::as_str)
        .collect();

    LogSummary {
        error_count,
        warning_count,
        keyword_counts,
        top_ip_counts: ips.most_common(config.max_ips),
        repeated_failures: failures.most_common(config.max_failures),
        timeline_by_hour: timeline_by_hour(lines),
    }
}

/// Count timestamped lines per hour.
///
/// Only the first timestamp-looking match of each line is considered; lines
/// without one, or whose match is not a valid date and time, are skipped.
pub fn timeline_by_hour(lines: &[String]) -> BTreeMap<String, usize> {
    let mut timeline = BTreeMap::new();

    for (line_no, line) in lines.iter().enumerate() {
        let Some(found) = TIMESTAMP.find(line) else {
            continue;
        };
        match patterns::parse_timestamp(found.as_str()) {
            Some(timestamp) => {
                *timeline.entry(patterns::hour_bucket(&timestamp)).or_insert(0) += 1;
            }
            None => debug!(
                "Skipping unparseable timestamp {:?} on line {}",
                found.as_str(),
                line_no + 1
            ),
        }
    }

    timeline
}
