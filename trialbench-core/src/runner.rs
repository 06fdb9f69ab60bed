//! Runner - Repeated-Trial Execution
//!
//! Executes a unit of work a fixed number of times on the calling thread and
//! collects one duration per trial. The timing loop does no I/O; results are
//! handed to the optional [`ReportSink`] only after the last trial.

use crate::error::BenchError;
use crate::measure::Timer;
use crate::result::BenchmarkResult;
use crate::sink::{NoSink, ReportSink};
use std::convert::Infallible;

/// Repeat count used when none is configured
pub const DEFAULT_REPEATS: u64 = 10;

/// Upper bound on the duration buffer reserved up front
const PREALLOC_LIMIT: u64 = 1 << 16;

/// Validate a requested repeat count
///
/// Counts are signed so that zero and negative requests can be expressed and
/// rejected with `InvalidArgument`.
pub fn validate_repeats(repeats: i64) -> Result<u64, BenchError> {
    u64::try_from(repeats)
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| BenchError::invalid(format!("repeat count must be positive, got {repeats}")))
}

/// Executes units of work and records trial durations.
///
/// The sink type is part of the runner, so a collecting sink can be read back
/// with [`Runner::sink`] or [`Runner::into_sink`] after the runs.
///
/// ```
/// use trialbench_core::{BenchmarkResult, Runner};
///
/// let mut runner = Runner::new().with_sink(Vec::<BenchmarkResult>::new());
/// let result = runner
///     .measure("sum", 5, || (0..1000u64).sum::<u64>())
///     .unwrap();
///
/// assert_eq!(result.trials(), 5);
/// assert!(result.min() <= result.mean() && result.mean() <= result.max());
/// assert_eq!(runner.into_sink(), vec![result]);
/// ```
#[derive(Debug, Clone)]
pub struct Runner<S = NoSink> {
    repeats: u64,
    warmup: u64,
    sink: S,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

impl Runner {
    /// Runner with [`DEFAULT_REPEATS`], no warmup and no sink
    pub fn new() -> Self {
        Self {
            repeats: DEFAULT_REPEATS,
            warmup: 0,
            sink: NoSink,
        }
    }
}

impl<S> Runner<S> {
    /// Set the repeat count used by [`Runner::run_default`]
    pub fn with_repeats(mut self, repeats: i64) -> Result<Self, BenchError> {
        self.repeats = validate_repeats(repeats)?;
        Ok(self)
    }

    /// Run `warmup` untimed invocations before each measurement
    pub fn with_warmup(mut self, warmup: u64) -> Self {
        self.warmup = warmup;
        self
    }

    /// Deliver every successful result to `sink`, replacing the current one
    pub fn with_sink<T: ReportSink>(self, sink: T) -> Runner<T> {
        Runner {
            repeats: self.repeats,
            warmup: self.warmup,
            sink,
        }
    }

    /// Configured default repeat count
    pub fn repeats(&self) -> u64 {
        self.repeats
    }

    /// Configured warmup invocation count
    pub fn warmup(&self) -> u64 {
        self.warmup
    }

    /// Sink receiving completed results
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the sink, e.g. to drain collected results
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the runner and return its sink
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: ReportSink> Runner<S> {
    /// Execute `work` exactly `repeats` times and record each duration.
    ///
    /// The first `Err` returned by `work` aborts the run: remaining trials are
    /// skipped, collected durations are dropped, the sink is not called, and
    /// the error comes back unchanged inside
    /// [`BenchError::MeasuredOperationFailed`].
    pub fn run<T, E, F>(
        &mut self,
        name: impl Into<String>,
        repeats: i64,
        mut work: F,
    ) -> Result<BenchmarkResult, BenchError<E>>
    where
        F: FnMut() -> Result<T, E>,
    {
        let repeats = validate_repeats(repeats).map_err(|e| e.widen())?;

        for _ in 0..self.warmup {
            if let Err(source) = work() {
                return Err(BenchError::MeasuredOperationFailed {
                    trial: 0,
                    repeats,
                    source,
                });
            }
        }

        let mut durations = Vec::with_capacity(repeats.min(PREALLOC_LIMIT) as usize);
        for trial in 1..=repeats {
            let timer = Timer::start();
            let outcome = std::hint::black_box(work());
            let elapsed = timer.stop();

            match outcome {
                Ok(_) => durations.push(elapsed.seconds()),
                Err(source) => {
                    return Err(BenchError::MeasuredOperationFailed {
                        trial,
                        repeats,
                        source,
                    });
                }
            }
        }

        let result = BenchmarkResult::from_trusted(name.into(), durations);
        self.sink.record(&result);
        Ok(result)
    }

    /// [`Runner::run`] with the configured repeat count
    pub fn run_default<T, E, F>(
        &mut self,
        name: impl Into<String>,
        work: F,
    ) -> Result<BenchmarkResult, BenchError<E>>
    where
        F: FnMut() -> Result<T, E>,
    {
        // Validated on construction, always fits
        let repeats = i64::try_from(self.repeats).unwrap_or(i64::MAX);
        self.run(name, repeats, work)
    }

    /// [`Runner::run`] for work that cannot fail
    pub fn measure<T, F>(
        &mut self,
        name: impl Into<String>,
        repeats: i64,
        mut work: F,
    ) -> Result<BenchmarkResult, BenchError>
    where
        F: FnMut() -> T,
    {
        self.run(name, repeats, || Ok::<T, Infallible>(work()))
    }
}

/// Run `work` `repeats` times with a default [`Runner`]
pub fn run<T, E, F>(
    name: impl Into<String>,
    repeats: i64,
    work: F,
) -> Result<BenchmarkResult, BenchError<E>>
where
    F: FnMut() -> Result<T, E>,
{
    Runner::new().run(name, repeats, work)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::CountingSink;

    #[derive(Debug, PartialEq, Eq)]
    struct Boom(u64);

    fn sum_range() -> u64 {
        (0..1000u64).sum()
    }

    #[test]
    fn test_sum_range_example() {
        let result = Runner::new().measure("sum", 5, sum_range).unwrap();

        assert_eq!(result.name(), "sum");
        assert_eq!(result.trials(), 5);
        assert!(result.durations().iter().all(|&d| d >= 0.0));
        assert!(result.min() <= result.mean() && result.mean() <= result.max());
    }

    #[test]
    fn test_non_positive_repeats_rejected_without_running() {
        for repeats in [0, -1, i64::MIN] {
            let mut calls = 0;
            let err = Runner::new()
                .measure("never", repeats, || calls += 1)
                .unwrap_err();

            assert!(err.is_invalid_argument());
            assert_eq!(calls, 0);
        }
    }

    #[test]
    fn test_failure_aborts_remaining_trials() {
        let mut calls = 0u64;
        let err = Runner::new()
            .run("flaky", 10, || {
                calls += 1;
                if calls == 3 { Err(Boom(calls)) } else { Ok(calls) }
            })
            .unwrap_err();

        assert_eq!(calls, 3);
        match err {
            BenchError::MeasuredOperationFailed {
                trial,
                repeats,
                source,
            } => {
                assert_eq!(trial, 3);
                assert_eq!(repeats, 10);
                assert_eq!(source, Boom(3));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_failure_on_last_trial_returns_no_result() {
        let mut calls = 0;
        let outcome = run("last", 4, || {
            calls += 1;
            if calls == 4 { Err("late failure") } else { Ok(()) }
        });

        assert!(matches!(
            outcome,
            Err(BenchError::MeasuredOperationFailed { trial: 4, .. })
        ));
    }

    #[test]
    fn test_sink_called_only_on_success() {
        let mut runner = Runner::new().with_sink(Vec::<BenchmarkResult>::new());
        runner.measure("ok", 2, sum_range).unwrap();
        let _ = runner.run("fails", 2, || Err::<(), _>("nope"));

        let seen = runner.into_sink();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].name(), "ok");
        assert_eq!(seen[0].trials(), 2);
    }

    #[test]
    fn test_counting_sink_is_readable() {
        let mut runner = Runner::new().with_sink(CountingSink::default());
        runner.measure("x", 2, || 1).unwrap();
        runner.measure("y", 2, || 2).unwrap();

        assert_eq!(runner.sink().count, 2);
        runner.sink_mut().count = 0;
        assert_eq!(runner.sink().count, 0);
    }

    #[test]
    fn test_borrowed_sink() {
        let mut collected: Vec<BenchmarkResult> = Vec::new();
        {
            let mut runner = Runner::new().with_warmup(1).with_sink(&mut collected);
            runner.measure("borrowed", 3, sum_range).unwrap();
            assert_eq!(runner.warmup(), 1);
        }

        assert_eq!(collected.len(), 1);
        assert_eq!(collected[0].name(), "borrowed");
    }

    #[test]
    fn test_warmup_runs_untimed() {
        let mut calls = 0;
        let result = Runner::new()
            .with_warmup(3)
            .measure("warm", 4, || calls += 1)
            .unwrap();

        assert_eq!(calls, 7);
        assert_eq!(result.trials(), 4);
    }

    #[test]
    fn test_warmup_failure_reports_trial_zero() {
        let err = Runner::new()
            .with_warmup(1)
            .run("cold", 3, || Err::<(), _>(Boom(0)))
            .unwrap_err();

        assert!(matches!(
            err,
            BenchError::MeasuredOperationFailed { trial: 0, .. }
        ));
    }

    #[test]
    fn test_run_default_uses_configured_repeats() {
        let mut runner = Runner::new().with_repeats(3).unwrap();
        let result = runner.run_default("cfg", || Ok::<_, Infallible>(sum_range())).unwrap();

        assert_eq!(result.trials(), 3);
        assert_eq!(Runner::new().repeats(), DEFAULT_REPEATS);
        assert!(Runner::new().with_repeats(0).is_err());
    }

    #[test]
    fn test_single_trial_has_zero_std_dev() {
        let result = Runner::new().measure("once", 1, sum_range).unwrap();
        assert_eq!(result.std_dev(), 0.0);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(32))]

            #[test]
            fn yields_exactly_n_non_negative_trials(n in 1i64..64) {
                let result = Runner::new().measure("prop", n, sum_range).unwrap();

                prop_assert_eq!(result.trials() as i64, n);
                prop_assert!(result.durations().iter().all(|&d| d >= 0.0));
                prop_assert!(result.min() <= result.mean());
                prop_assert!(result.mean() <= result.max());
            }

            #[test]
            fn failure_on_kth_trial_stops_there(n in 1u64..32, k_seed in any::<u64>()) {
                let k = k_seed % n + 1;
                let mut calls = 0u64;
                let outcome = Runner::new().run("prop", n as i64, || {
                    calls += 1;
                    if calls == k { Err(Boom(k)) } else { Ok(()) }
                });

                prop_assert_eq!(calls, k);
                let is_expected_failure = matches!(
                    outcome,
                    Err(BenchError::MeasuredOperationFailed { trial, .. }) if trial == k
                );
                prop_assert!(is_expected_failure);
            }
        }
    }
}
