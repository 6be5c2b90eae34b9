//! File Summarizer - command line entry point
//!
//! Parses arguments, sets up logging, runs the analysis pipeline on one file
//! and prints either the summary or a single failure line to stdout. The
//! process exit code reflects the failure category.

use std::fs::File;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Result;
use clap::Parser;
use log::{error, info, LevelFilter};

use file_summarizer::utils::output_formatter;
use file_summarizer::{AnalysisError, AnalyzerConfig, FileAnalyzer, RunSummary};

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "file_summarizer",
    version,
    about = "Summarize a text, CSV or log file as structured statistics",
    long_about = "Summarize a single file as JSON. The analysis depends on the extension:
- .csv: row/column counts, missing values, column types and statistics
- .log: text statistics plus error/warning counts, keywords, IPs,
        repeated failures and an hourly timeline
- anything else: metadata, empty/duplicate lines and word frequencies"
)]
struct Args {
    /// Path to the file to analyze
    path: PathBuf,

    /// Path to a JSON configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Set logging level (default: WARN)
    #[arg(long = "log-level", default_value = "warn")]
    log_level: LevelFilter,

    /// Write logs to this file instead of stderr
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = setup_logging(&args) {
        eprintln!("Failed to set up logging: {:#}", e);
    }

    let config = load_config(args.config.as_deref());
    let analyzer = FileAnalyzer::new(config);

    match run(&analyzer, &args.path) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            if !std::io::stdout().is_terminal() {
                colored::control::set_override(false);
            }
            error!("Analysis of {} failed: {}", args.path.display(), e);
            println!("{}", output_formatter::format_error(&e));
            process::exit(e.exit_code());
        }
    }
}

/// Analyze the file and render the summary
fn run(analyzer: &FileAnalyzer, path: &Path) -> Result<String, AnalysisError> {
    let summary: RunSummary = analyzer.analyze_file(path)?;
    let rendered = output_formatter::render_summary(&summary)?;
    Ok(rendered)
}

/// Set up logging to stderr or to the requested log file
fn setup_logging(args: &Args) -> Result<()> {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(args.log_level);

    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(log_file) = &args.log_file {
        let file = File::create(log_file)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    } else {
        builder.target(env_logger::Target::Stderr);
    }

    builder.try_init()?;

    Ok(())
}

/// Load configuration from file if provided, falling back to defaults
fn load_config(config_path: Option<&Path>) -> AnalyzerConfig {
    match config_path {
        Some(path) => match AnalyzerConfig::from_file(path) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                error!("{:#}; using defaults", e);
                AnalyzerConfig::default()
            }
        },
        None => AnalyzerConfig::default(),
    }
}
