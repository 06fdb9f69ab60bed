//! Output Formatting
//!
//! Human-readable rendering of a ranked report:
//! - One row per benchmark, fastest first
//! - Mean, min, max and standard deviation with adaptive units
//! - Speed relative to the fastest entry
//! - A marker on entries whose spread is too wide to trust

use crate::report::BenchmarkReport;
use std::fmt::Write;
use trialbench_stats::DEFAULT_STABILITY_CV;

/// Format a duration given in seconds with an adaptive unit
///
/// ```
/// # use trialbench_report::format_duration;
/// assert_eq!(format_duration(1.5), "1.500 s");
/// assert_eq!(format_duration(0.0025), "2.500 ms");
/// assert_eq!(format_duration(0.000_004_2), "4.200 µs");
/// assert_eq!(format_duration(0.000_000_125), "125.000 ns");
/// ```
pub fn format_duration(seconds: f64) -> String {
    let abs = seconds.abs();
    if abs >= 1.0 {
        format!("{seconds:.3} s")
    } else if abs >= 1e-3 {
        format!("{:.3} ms", seconds * 1e3)
    } else if abs >= 1e-6 {
        format!("{:.3} µs", seconds * 1e6)
    } else {
        format!("{:.3} ns", seconds * 1e9)
    }
}

/// Format a report for human-readable terminal display
pub fn format_human(report: &BenchmarkReport) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("TrialBench Results\n");
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");

    let name_width = report
        .names()
        .map(|n| n.chars().count())
        .max()
        .unwrap_or(0)
        .max("Benchmark".len());

    let _ = writeln!(
        output,
        "  {:>4}  {:<width$}  {:>12}  {:>12}  {:>12}  {:>12}  {:>6}  {:>9}",
        "Rank",
        "Benchmark",
        "mean",
        "min",
        "max",
        "stddev",
        "trials",
        "relative",
        width = name_width
    );
    let _ = writeln!(output, "  {}", "-".repeat(name_width + 85));

    let mut noisy = 0;
    for entry in report.entries() {
        let relative = entry
            .relative
            .map(|r| format!("{r:.2}x"))
            .unwrap_or_else(|| "-".to_string());
        let cv = if entry.mean_s > 0.0 {
            entry.std_dev_s / entry.mean_s * 100.0
        } else {
            0.0
        };
        let marker = if cv >= DEFAULT_STABILITY_CV {
            noisy += 1;
            " ~"
        } else {
            ""
        };

        let _ = writeln!(
            output,
            "  {:>4}  {:<width$}  {:>12}  {:>12}  {:>12}  {:>12}  {:>6}  {:>9}{}",
            entry.rank,
            entry.name,
            format_duration(entry.mean_s),
            format_duration(entry.min_s),
            format_duration(entry.max_s),
            format_duration(entry.std_dev_s),
            entry.trials,
            relative,
            marker,
            width = name_width
        );
    }

    output.push('\n');
    let _ = writeln!(output, "  Fastest: {}", report.fastest().name);
    if noisy > 0 {
        let _ = writeln!(
            output,
            "  ~ {noisy} result(s) vary by more than {DEFAULT_STABILITY_CV:.0}% between trials"
        );
    }

    output
}
