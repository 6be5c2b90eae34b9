//! CSV analysis
//!
//! Parses a CSV file with a header row, infers a type per column and computes
//! "describe all columns" statistics: numeric columns get count, mean, std,
//! min, quartiles and max, the others get count, unique, top and freq.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use csv::ReaderBuilder;
use log::{debug, info};

use crate::core::error::AnalysisError;
use crate::core::summary::{
    CategoricalStats, ColumnStats, CsvSummary, Dtype, NumericStats, StatsTable, TopValue,
};
use crate::utils::counter::FrequencyCounter;

/// Cell values treated as missing
pub const NA_VALUES: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const BOOL_VALUES: [&str; 6] = ["True", "False", "TRUE", "FALSE", "true", "false"];

/// Values of one column collected during parsing
#[derive(Debug)]
struct Column {
    name: String,
    present: Vec<String>,
    missing: usize,
}

/// Analyze a CSV file.
///
/// # Arguments
///
/// * `file_path` - Path to the CSV file
///
/// # Returns
///
/// The CSV summary, or `CsvParse` when the file is not a well formed table
pub fn analyze_csv(file_path: &Path) -> Result<CsvSummary, AnalysisError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(file_path)
        .map_err(|e| csv_error(e, file_path))?;

    let headers = reader
        .headers()
        .map_err(|e| csv_error(e, file_path))?
        .clone();
    if headers.is_empty() {
        return Err(AnalysisError::CsvParse(
            "No columns to parse from file".to_string(),
        ));
    }

    let mut columns: Vec<Column> = column_names(headers.iter())
        .into_iter()
        .map(|name| Column {
            name,
            present: Vec::new(),
            missing: 0,
        })
        .collect();

    let mut rows = 0;
    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| csv_error(e, file_path))?;
        if record.len() == 1 && record[0].trim().is_empty() {
            continue;
        }
        if record.len() > columns.len() {
            // header is line 1
            return Err(AnalysisError::CsvParse(format!(
                "Expected {} fields in line {}, saw {}",
                columns.len(),
                idx + 2,
                record.len()
            )));
        }

        for (i, column) in columns.iter_mut().enumerate() {
            match record.get(i) {
                Some(cell) if !is_missing(cell) => column.present.push(cell.to_string()),
                _ => column.missing += 1,
            }
        }
        rows += 1;
    }
    info!(
        "Parsed {} rows and {} columns from {}",
        rows,
        columns.len(),
        file_path.display()
    );

    let mut missing_per_column = Vec::with_capacity(columns.len());
    let mut dtypes = Vec::with_capacity(columns.len());
    let mut stats = Vec::with_capacity(columns.len());
    for column in &columns {
        let dtype = infer_dtype(&column.present, column.missing);
        debug!("Column {:?} inferred as {}", column.name, dtype);

        let column_stats = if dtype.is_numeric() {
            ColumnStats::Numeric(describe_numeric(&column.present))
        } else {
            ColumnStats::Categorical(describe_categorical(&column.present, dtype))
        };

        missing_per_column.push((column.name.clone(), column.missing));
        dtypes.push((column.name.clone(), dtype));
        stats.push((column.name.clone(), column_stats));
    }

    Ok(CsvSummary {
        rows,
        columns: columns.len(),
        missing_per_column,
        dtypes,
        stats_sample: StatsTable(stats),
    })
}

/// Map a csv error onto the run's error categories
fn csv_error(err: csv::Error, file_path: &Path) -> AnalysisError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io_err)
            if matches!(
                io_err.kind(),
                io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied
            ) =>
        {
            AnalysisError::from_io(io_err, file_path)
        }
        _ => AnalysisError::CsvParse(message),
    }
}

/// Column names with blanks filled in and duplicates made unique
fn column_names<'a>(headers: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::new();

    for (i, header) in headers.enumerate() {
        let base = if header.is_empty() {
            format!("Unnamed: {}", i)
        } else {
            header.to_string()
        };

        let mut name = base.clone();
        while let Some(n) = seen.get_mut(&name) {
            *n += 1;
            name = format!("{}.{}", base, n);
        }
        seen.insert(name.clone(), 0);
        names.push(name);
    }

    names
}

pub fn is_missing(cell: &str) -> bool {
    NA_VALUES.contains(&cell)
}

/// Infer a column type from its present values.
///
/// Integer columns with missing cells become `float64`, boolean columns with
/// missing cells become `object`. A column whose cells are all missing is
/// `float64`, while a column of a header-only table is `object`.
pub fn infer_dtype(present: &[String], missing: usize) -> Dtype {
    if present.is_empty() {
        return if missing > 0 { Dtype::Float64 } else { Dtype::Object };
    }
    if present.iter().all(|v| v.trim().parse::<i64>().is_ok()) {
        return if missing > 0 { Dtype::Float64 } else { Dtype::Int64 };
    }
    if present.iter().all(|v| parse_number(v).is_some()) {
        return Dtype::Float64;
    }
    if present.iter().all(|v| BOOL_VALUES.contains(&v.as_str())) {
        return if missing > 0 { Dtype::Object } else { Dtype::Bool };
    }
    Dtype::Object
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

fn describe_numeric(present: &[String]) -> NumericStats {
    let mut values: Vec<f64> = present.iter().filter_map(|v| parse_number(v)).collect();
    values.sort_by(|a, b| a.total_cmp(b));

    let count = values.len();
    if count == 0 {
        return NumericStats {
            count,
            mean: None,
            std: None,
            min: None,
            q25: None,
            q50: None,
            q75: None,
            max: None,
        };
    }

    let mean = values.iter().sum::<f64>() / count as f64;
    let std = (count > 1).then(|| {
        let variance =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        variance.sqrt()
    });

    NumericStats {
        count,
        mean: Some(mean),
        std,
        min: values.first().copied(),
        q25: quantile(&values, 0.25),
        q50: quantile(&values, 0.5),
        q75: quantile(&values, 0.75),
        max: values.last().copied(),
    }
}

/// Linearly interpolated quantile of already sorted values
fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

fn describe_categorical(present: &[String], dtype: Dtype) -> CategoricalStats {
    let is_bool = dtype == Dtype::Bool;
    // "TRUE" and "true" are the same boolean
    let counts: FrequencyCounter = present
        .iter()
        .map(|v| if is_bool { bool_label(v) } else { v.as_str() })
        .collect();
    let top = counts.most_common(1).into_iter().next();

    CategoricalStats {
        count: present.len(),
        unique: counts.len(),
        freq: top.as_ref().map(|(_, freq)| *freq),
        top: top.map(|(value, _)| {
            if is_bool {
                TopValue::Bool(value == "true")
            } else {
                TopValue::Text(value)
            }
        }),
    }
}

fn bool_label(value: &str) -> &'static str {
    if value.eq_ignore_ascii_case("true") {
        "true"
    } else {
        "false"
    }
}
