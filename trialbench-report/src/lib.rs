#![warn(missing_docs)]
//! TrialBench Report - Ranking and Rendering
//!
//! Builds a ranked [`BenchmarkReport`] from results and renders it as:
//! - Human-readable terminal text
//! - JSON (machine-readable, for plotting)
//! - CSV (spreadsheet-compatible)
//!
//! Rendering is pure: nothing here writes to stdout or touches the clock used
//! for measurement.

mod csv;
mod formatting;
mod json;
mod report;

pub use csv::generate_csv_report;
pub use formatting::{format_duration, format_human};
pub use json::{
    JsonReport, REPORT_SCHEMA, REPORT_SCHEMA_VERSION, ReportSchema, generate_json_report,
    parse_json_report,
};
pub use report::{BenchmarkReport, ReportEntry, compare};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Human,
    /// JSON with schema header
    Json,
    /// CSV for spreadsheets
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Render `report` in the requested format
pub fn render(report: &BenchmarkReport, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Human => Ok(format_human(report)),
        OutputFormat::Json => generate_json_report(report),
        OutputFormat::Csv => Ok(generate_csv_report(report)),
    }
}
