//! JSON Output

use crate::report::BenchmarkReport;
use serde::{Deserialize, Serialize};

/// Schema identifier written into every JSON report
pub const REPORT_SCHEMA: &str = "trialbench.report";

/// Schema version written into every JSON report
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// Schema information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSchema {
    /// Schema identifier
    pub schema: String,
    /// Schema version
    pub version: u32,
}

impl Default for ReportSchema {
    fn default() -> Self {
        Self {
            schema: REPORT_SCHEMA.to_string(),
            version: REPORT_SCHEMA_VERSION,
        }
    }
}

/// Top-level JSON document: schema header plus the report body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    /// Schema header
    #[serde(flatten)]
    pub schema: ReportSchema,
    /// Ranked results
    pub report: BenchmarkReport,
}

/// Generate a prettified JSON report.
///
/// The output is the structured record meant for plotting and other
/// downstream tooling.
pub fn generate_json_report(report: &BenchmarkReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        schema: ReportSchema::default(),
        report: report.clone(),
    })
}

/// Parse a document produced by [`generate_json_report`]
///
/// Fails on malformed JSON and on reports whose entries are empty, misranked
/// or internally inconsistent.
pub fn parse_json_report(json: &str) -> Result<JsonReport, serde_json::Error> {
    serde_json::from_str(json)
}
