//! TrialBench Example
//!
//! Compares three ways of summing a range, then renders the ranking.
//!
//! Run with:
//!   cargo run --example sum_range            # human-readable table
//!   cargo run --example sum_range -- json    # JSON record for plotting
//!   cargo run --example sum_range -- csv     # CSV rows
//!
//! A `trialbench.toml` in the working directory (or any parent) sets the
//! repeat count, output format and log level.

use std::hint::black_box;
use trialbench::prelude::*;
use trialbench::{LogLevel, TracingSink, TrialConfig, configure_logging};

const N: u64 = 1000;

fn iterator_sum(n: u64) -> u64 {
    (0..n).sum()
}

fn loop_sum(n: u64) -> u64 {
    let mut total = 0;
    let mut i = 0;
    while i < n {
        total += black_box(i);
        i += 1;
    }
    total
}

fn closed_form(n: u64) -> u64 {
    n * (n - 1) / 2
}

fn main() {
    if let Err(e) = run_example() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_example() -> anyhow::Result<()> {
    let config = TrialConfig::discover().unwrap_or_default();
    configure_logging(config.log_level().unwrap_or(LogLevel::Info))?;

    let format = match std::env::args().nth(1) {
        Some(arg) => arg.parse().map_err(anyhow::Error::msg)?,
        None => config.output_format()?,
    };

    let mut runner = config.runner()?.with_sink(TracingSink::new(LogLevel::Debug));
    let repeats = config.runner.repeats;

    let results = {
        let _timer = ScopeTimer::start("sum_range suite");
        vec![
            runner.measure("iterator_sum", repeats, || iterator_sum(black_box(N)))?,
            runner.measure("loop_sum", repeats, || loop_sum(black_box(N)))?,
            runner.measure("closed_form", repeats, || closed_form(black_box(N)))?,
        ]
    };

    // Fallible work: the parse error comes back unchanged
    match runner.run("parse_bad_input", 3, || "12x".parse::<u64>()) {
        Err(BenchError::MeasuredOperationFailed { trial, source, .. }) => {
            tracing::warn!(trial, error = %source, "parse_bad_input aborted");
        }
        other => anyhow::bail!("expected parse failure, got {other:?}"),
    }

    let report = compare(&results)?;
    println!("{}", render(&report, format)?);
    Ok(())
}
