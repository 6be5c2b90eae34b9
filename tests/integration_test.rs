//! Integration tests for the file summarizer
//!
//! These tests run the library pipeline and the built binary against real
//! files, checking summary shapes, rendered output and exit codes.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::{json, Value};

use file_summarizer::core::summary::Dtype;
use file_summarizer::{analyze_file, AnalysisError, FileKind, RunSummary};

fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

fn run_binary(args: &[&std::ffi::OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_file_summarizer"))
        .args(args)
        .output()
        .expect("Failed to run file_summarizer")
}

fn run_on(path: &Path) -> Output {
    run_binary(&[path.as_os_str()])
}

#[test]
fn test_text_file_scenario() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_file(temp_dir.path(), "notes.txt", b"a\na\nb\n\n");

    let summary = analyze_file(&path).expect("Failed to analyze text file");
    assert_eq!(summary.kind(), FileKind::Text);
    let RunSummary::Text { metadata, text } = summary else {
        panic!("expected a text summary");
    };
    assert_eq!(metadata.size_bytes, 7);
    assert_eq!(metadata.num_lines, 4);
    assert_eq!(metadata.num_words, 3);
    assert_eq!(metadata.num_chars, 7);
    assert_eq!(text.empty_lines, 1);
    assert_eq!(text.duplicate_lines, vec![("a".to_string(), 2)]);
}

#[test]
fn test_log_file_scenario() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let content = "2024-01-01 10:15:00 ERROR login failed\n\
                   2024-01-01 10:20:00 connection from 10.0.0.1 and 10.0.0.1 refused\n\
                   2024-01-01 11:02:03 WARNING disk almost full\n\
                   not a timestamped line, warn\n";
    let path = write_file(temp_dir.path(), "server.log", content.as_bytes());

    let RunSummary::Log { metadata, text, log } =
        analyze_file(&path).expect("Failed to analyze log file")
    else {
        panic!("expected a log summary");
    };

    assert_eq!(metadata.num_lines, 4);
    assert!(text.most_frequent_words.len() <= 10);
    assert_eq!(log.error_count, 1);
    assert_eq!(log.warning_count, 2);
    assert_eq!(log.keyword_count("failed"), Some(1));
    assert_eq!(log.top_ip_counts, vec![("10.0.0.1".to_string(), 2)]);
    assert_eq!(log.timeline_by_hour.get("2024-01-01 10:00"), Some(&2));
    assert_eq!(log.timeline_by_hour.get("2024-01-01 11:00"), Some(&1));
    assert_eq!(log.timeline_by_hour.values().sum::<usize>(), 3);
}

#[test]
fn test_csv_file_scenario() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_file(
        temp_dir.path(),
        "people.csv",
        b"name,age,email\nann,31,ann@example.com\nbob,42,\ncid,27,cid@example.com\ndee,35,\n",
    );

    let RunSummary::Csv { csv } = analyze_file(&path).expect("Failed to analyze CSV") else {
        panic!("expected a CSV summary");
    };
    assert_eq!(csv.rows, 4);
    assert_eq!(csv.columns, 3);
    assert_eq!(csv.missing("email"), Some(2));
    assert_eq!(csv.dtype("email"), Some(Dtype::Object));
    assert_eq!(csv.dtype("age"), Some(Dtype::Int64));
    for (_, missing) in &csv.missing_per_column {
        assert!(*missing <= csv.rows);
    }
}

#[test]
fn test_binary_prints_json_summary() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_file(
        temp_dir.path(),
        "app.log",
        b"2024-01-01 10:15:00 ERROR login failed\n",
    );

    let output = run_on(&path);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).expect("stdout is not UTF-8");
    assert!(stdout.starts_with("{\n  \"metadata\": {"));

    let value: Value = serde_json::from_str(&stdout).expect("stdout is not JSON");
    assert_eq!(value["log"]["error_count"], json!(1));
    assert_eq!(value["log"]["keyword_counts"]["failed"], json!(1));
    assert_eq!(value["log"]["timeline_by_hour"], json!({"2024-01-01 10:00": 1}));
    assert_eq!(value["text"]["empty_lines"], json!(0));
    assert!(value.get("csv").is_none());
}

#[test]
fn test_binary_csv_output_shape() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_file(temp_dir.path(), "t.csv", b"x,label\n1,a\n3,b\n");

    let output = run_on(&path);
    assert_eq!(output.status.code(), Some(0));

    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    let csv = &value["csv"];
    assert_eq!(csv["rows"], json!(2));
    assert_eq!(csv["dtypes"], json!({"x": "int64", "label": "object"}));
    assert_eq!(csv["stats_sample"]["x"]["mean"], json!(2.0));
    assert_eq!(csv["stats_sample"]["x"]["top"], json!(null));
    assert_eq!(csv["stats_sample"]["label"]["unique"], json!(2));
    assert_eq!(csv["stats_sample"]["label"]["max"], json!(null));
    assert!(value.get("metadata").is_none());
}

#[test]
fn test_missing_path_exits_2() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("does_not_exist.txt");

    let err = analyze_file(&missing).unwrap_err();
    assert!(matches!(err, AnalysisError::NotFound(_)));

    let output = run_on(&missing);
    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("File not found"));
}

#[test]
fn test_malformed_csv_exits_3() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_file(temp_dir.path(), "bad.csv", b"a,b\n1,2\n1,2,3,4\n");

    let output = run_on(&path);
    assert_eq!(output.status.code(), Some(3));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("Failed to parse CSV"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_exits_4() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_file(temp_dir.path(), "secret.txt", b"top secret\n");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();

    // root can read anything; nothing to check then
    if fs::read(&path).is_ok() {
        return;
    }

    let output = run_on(&path);
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Permission denied"));
}

#[test]
fn test_invalid_utf8_text_is_not_an_error() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_file(temp_dir.path(), "mixed.txt", b"caf\xe9 ok\nline two\n");

    let output = run_on(&path);
    assert_eq!(output.status.code(), Some(0));
    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_eq!(value["metadata"]["num_lines"], json!(2));
    assert_eq!(value["metadata"]["size_bytes"], json!(17));
}

#[test]
fn test_config_file_changes_output() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_file(temp_dir.path(), "auth.log", b"sshd denied\nsshd denied\n");
    let config = write_file(
        temp_dir.path(),
        "config.json",
        br#"{"keywords": ["denied"], "top_n": 1}"#,
    );

    let output = run_binary(&[
        path.as_os_str(),
        std::ffi::OsStr::new("--config"),
        config.as_os_str(),
    ]);
    assert_eq!(output.status.code(), Some(0));

    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_eq!(value["log"]["keyword_counts"], json!({"denied": 2}));
    assert_eq!(value["text"]["most_frequent_words"], json!([["sshd", 2]]));
}

#[test]
fn test_empty_text_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_file(temp_dir.path(), "empty.txt", b"");

    let RunSummary::Text { metadata, text } = analyze_file(&path).expect("Failed to analyze empty file")
    else {
        panic!("expected a text summary");
    };
    assert_eq!(metadata.size_bytes, 0);
    assert_eq!(metadata.num_lines, 0);
    assert_eq!(text.empty_lines, 0);
    assert!(text.most_frequent_words.is_empty());
}
