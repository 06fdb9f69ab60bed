#![warn(missing_docs)]
//! # TrialBench
//!
//! Repeated-trial benchmarking for short, deterministic units of work.
//!
//! - **Runner**: executes a closure N times on the calling thread, timing each
//!   trial with a monotonic clock
//! - **Statistics**: mean, min, max and sample standard deviation derived from
//!   the trial durations
//! - **Reports**: rank results by mean and render them as text, JSON or CSV
//! - **Scoped timing**: log how long a block took, for one-off measurements
//! - **Configuration**: `trialbench.toml` discovery and logging setup
//!
//! ## Quick Start
//!
//! ```
//! use trialbench::{Runner, compare, format_human};
//!
//! let mut runner = Runner::new();
//! let iter = runner.measure("iter_sum", 5, || (0..1000u64).sum::<u64>()).unwrap();
//! let formula = runner.measure("closed_form", 5, || 999u64 * 1000 / 2).unwrap();
//!
//! let report = compare(&[iter, formula]).unwrap();
//! println!("{}", format_human(&report));
//! ```
//!
//! ## Fallible Work
//!
//! ```
//! use trialbench::{BenchError, Runner};
//!
//! let outcome = Runner::new().run("parse", 3, || "12x".parse::<u32>());
//! match outcome {
//!     Err(BenchError::MeasuredOperationFailed { trial, source, .. }) => {
//!         assert_eq!(trial, 1);
//!         println!("trial {trial} failed: {source}");
//!     }
//!     other => panic!("expected failure, got {other:?}"),
//! }
//! ```

mod config;
mod logging;

pub use config::{
    CONFIG_FILE_NAME, LoggingConfig, OutputConfig, RunnerConfig, TrialConfig,
};
pub use logging::{LogLevel, TracingSink, configure_logging};

// Re-export core types
pub use trialbench_core::{
    BenchError, BenchmarkResult, CountingSink, DEFAULT_REPEATS, NoSink, ReportSink, Runner,
    ScopeTimer, Timer, Trial, run, time_scope, validate_repeats,
};

// Re-export stats
pub use trialbench_stats::{Percentiles, SummaryStatistics, compute_summary};

// Re-export reporting
pub use trialbench_report::{
    BenchmarkReport, OutputFormat, ReportEntry, compare, format_duration, format_human,
    generate_csv_report, generate_json_report, parse_json_report, render,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        BenchError, BenchmarkReport, BenchmarkResult, OutputFormat, ReportSink, Runner,
        ScopeTimer, compare, render, time_scope,
    };
}
