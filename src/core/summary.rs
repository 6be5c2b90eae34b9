//! Summary types produced by the analyzers
//!
//! Every analyzer returns one of these plain values; `RunSummary` composes
//! them into the single document printed for a run. Ordered mappings are kept
//! as `Vec<(key, value)>` and serialized as JSON objects so first-seen order
//! survives rendering.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::utils::file_utils::FileKind;

/// Serialize a list of pairs as a JSON object, preserving order
fn as_map<S, K, V>(pairs: &[(K, V)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    K: Serialize,
    V: Serialize,
{
    serializer.collect_map(pairs.iter().map(|(k, v)| (k, v)))
}

/// Basic size and count information for a line-oriented file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// File size from the filesystem, -1 when it could not be read
    pub size_bytes: i64,
    pub num_lines: usize,
    pub num_words: usize,
    pub num_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSummary {
    pub empty_lines: usize,
    #[serde(serialize_with = "as_map")]
    pub duplicate_lines: Vec<(String, usize)>,
    pub most_frequent_words: Vec<(String, usize)>,
    pub numeric_tokens_sample: Vec<String>,
    pub text_tokens_sample: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogSummary {
    pub error_count: usize,
    pub warning_count: usize,
    #[serde(serialize_with = "as_map")]
    pub keyword_counts: Vec<(String, usize)>,
    pub top_ip_counts: Vec<(String, usize)>,
    pub repeated_failures: Vec<(String, usize)>,
    /// Hour bucket (`YYYY-MM-DD HH:00`) to number of timestamped lines
    pub timeline_by_hour: BTreeMap<String, usize>,
}

impl LogSummary {
    /// Look up the count recorded for a keyword
    pub fn keyword_count(&self, keyword: &str) -> Option<usize> {
        self.keyword_counts
            .iter()
            .find(|(k, _)| k == keyword)
            .map(|(_, count)| *count)
    }
}

/// Inferred type of a CSV column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dtype {
    #[serde(rename = "int64")]
    Int64,
    #[serde(rename = "float64")]
    Float64,
    #[serde(rename = "bool")]
    Bool,
    #[serde(rename = "object")]
    Object,
}

impl Dtype {
    pub fn is_numeric(self) -> bool {
        matches!(self, Dtype::Int64 | Dtype::Float64)
    }

    pub fn label(self) -> &'static str {
        match self {
            Dtype::Int64 => "int64",
            Dtype::Float64 => "float64",
            Dtype::Bool => "bool",
            Dtype::Object => "object",
        }
    }
}

impl fmt::Display for Dtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Descriptive statistics of a numeric column
#[derive(Debug, Clone, PartialEq)]
pub struct NumericStats {
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation, `None` with fewer than two values
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub q50: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

/// Most frequent value of a non-numeric column
///
/// Boolean columns report a JSON boolean, everything else the cell text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TopValue {
    Bool(bool),
    Text(String),
}

/// Descriptive statistics of a non-numeric column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoricalStats {
    pub count: usize,
    pub unique: usize,
    /// Most frequent value, `None` when the column has no values
    pub top: Option<TopValue>,
    pub freq: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnStats {
    Numeric(NumericStats),
    Categorical(CategoricalStats),
}

impl ColumnStats {
    pub fn count(&self) -> usize {
        match self {
            ColumnStats::Numeric(stats) => stats.count,
            ColumnStats::Categorical(stats) => stats.count,
        }
    }

    pub fn as_numeric(&self) -> Option<&NumericStats> {
        match self {
            ColumnStats::Numeric(stats) => Some(stats),
            ColumnStats::Categorical(_) => None,
        }
    }

    pub fn as_categorical(&self) -> Option<&CategoricalStats> {
        match self {
            ColumnStats::Numeric(_) => None,
            ColumnStats::Categorical(stats) => Some(stats),
        }
    }
}

/// Per-column statistics for a whole table
///
/// Serialized the "describe all columns" way: every column carries the union
/// of the statistic keys used anywhere in the table, with `null` for keys
/// that don't apply to its type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatsTable(pub Vec<(String, ColumnStats)>);

impl StatsTable {
    pub fn get(&self, column: &str) -> Option<&ColumnStats> {
        self.0.iter().find(|(name, _)| name == column).map(|(_, stats)| stats)
    }
}

struct StatsRow<'a> {
    stats: &'a ColumnStats,
    numeric_keys: bool,
    categorical_keys: bool,
}

impl Serialize for StatsRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("count", &self.stats.count())?;

        if self.categorical_keys {
            let cat = self.stats.as_categorical();
            map.serialize_entry("unique", &cat.map(|c| c.unique))?;
            map.serialize_entry("top", &cat.and_then(|c| c.top.as_ref()))?;
            map.serialize_entry("freq", &cat.and_then(|c| c.freq))?;
        }

        if self.numeric_keys {
            let num = self.stats.as_numeric();
            map.serialize_entry("mean", &num.and_then(|n| n.mean))?;
            map.serialize_entry("std", &num.and_then(|n| n.std))?;
            map.serialize_entry("min", &num.and_then(|n| n.min))?;
            map.serialize_entry("25%", &num.and_then(|n| n.q25))?;
            map.serialize_entry("50%", &num.and_then(|n| n.q50))?;
            map.serialize_entry("75%", &num.and_then(|n| n.q75))?;
            map.serialize_entry("max", &num.and_then(|n| n.max))?;
        }

        map.end()
    }
}

impl Serialize for StatsTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let numeric_keys = self.0.iter().any(|(_, s)| s.as_numeric().is_some());
        let categorical_keys = self.0.iter().any(|(_, s)| s.as_categorical().is_some());

        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, stats) in &self.0 {
            let row = StatsRow {
                stats,
                numeric_keys,
                categorical_keys,
            };
            map.serialize_entry(name, &row)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CsvSummary {
    pub rows: usize,
    pub columns: usize,
    #[serde(serialize_with = "as_map")]
    pub missing_per_column: Vec<(String, usize)>,
    #[serde(serialize_with = "as_map")]
    pub dtypes: Vec<(String, Dtype)>,
    pub stats_sample: StatsTable,
}

impl CsvSummary {
    pub fn missing(&self, column: &str) -> Option<usize> {
        self.missing_per_column
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, count)| *count)
    }

    pub fn dtype(&self, column: &str) -> Option<Dtype> {
        self.dtypes
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, dtype)| *dtype)
    }
}

/// The complete result of one run, shaped by the detected file kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RunSummary {
    Csv {
        csv: CsvSummary,
    },
    Log {
        metadata: Metadata,
        text: TextSummary,
        log: LogSummary,
    },
    Text {
        metadata: Metadata,
        text: TextSummary,
    },
}

impl RunSummary {
    pub fn kind(&self) -> FileKind {
        match self {
            RunSummary::Csv { .. } => FileKind::Csv,
            RunSummary::Log { .. } => FileKind::Log,
            RunSummary::Text { .. } => FileKind::Text,
        }
    }
}
