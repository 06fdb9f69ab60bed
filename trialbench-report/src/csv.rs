//! CSV Output
//!
//! One row per ranked entry, durations in seconds.

use crate::report::BenchmarkReport;
use std::fmt::Write;

const HEADER: &str = "rank,name,trials,mean_s,median_s,min_s,max_s,std_dev_s,relative";

/// Generate a CSV report with a header row
pub fn generate_csv_report(report: &BenchmarkReport) -> String {
    let mut output = String::new();
    output.push_str(HEADER);
    output.push('\n');

    for entry in report.entries() {
        let relative = entry
            .relative
            .map(|r| format!("{r:.6}"))
            .unwrap_or_default();
        let _ = writeln!(
            output,
            "{},{},{},{:.9},{:.9},{:.9},{:.9},{:.9},{}",
            entry.rank,
            escape_field(&entry.name),
            entry.trials,
            entry.mean_s,
            entry.median_s,
            entry.min_s,
            entry.max_s,
            entry.std_dev_s,
            relative
        );
    }

    output
}

/// Quote a field if it contains a delimiter, quote or line break
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
