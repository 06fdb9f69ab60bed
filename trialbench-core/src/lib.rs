#![warn(missing_docs)]
//! TrialBench Core - Trial Runner
//!
//! This crate measures units of work:
//! - `Runner` for repeated, sequential trials with a monotonic clock
//! - `BenchmarkResult` holding the durations, with derived statistics
//! - `ReportSink` for delivering results outside the timing loop
//! - `ScopeTimer` for one-off timing of a block, logged via `tracing`

mod error;
mod measure;
mod result;
mod runner;
mod scope;
mod sink;

pub use error::BenchError;
pub use measure::{Timer, Trial};
pub use result::BenchmarkResult;
pub use runner::{DEFAULT_REPEATS, Runner, run, validate_repeats};
pub use scope::{ScopeTimer, time_scope};
pub use sink::{CountingSink, NoSink, ReportSink};
