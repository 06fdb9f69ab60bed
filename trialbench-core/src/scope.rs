//! Scoped Timing
//!
//! Times a single block of code and emits a `tracing` event when it ends.
//! Useful for coarse, one-off measurements such as model fitting inside a
//! script; use [`Runner`](crate::Runner) when statistics are needed.

use crate::measure::Timer;
use std::time::Duration;

/// Guard that logs the elapsed time of its scope on drop
///
/// ```
/// use trialbench_core::ScopeTimer;
///
/// {
///     let _timer = ScopeTimer::start("fitting model");
///     // ... work ...
/// } // "fitting model finished" logged here
/// ```
#[derive(Debug)]
#[must_use = "the scope is timed until the guard is dropped"]
pub struct ScopeTimer {
    label: String,
    timer: Option<Timer>,
}

impl ScopeTimer {
    /// Start timing a scope labelled `label`
    pub fn start(label: impl Into<String>) -> Self {
        let label = label.into();
        tracing::debug!(label = %label, "scope started");
        Self {
            label,
            timer: Some(Timer::start()),
        }
    }

    /// Label given at start
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Time elapsed so far
    pub fn elapsed(&self) -> Duration {
        self.timer.as_ref().map(Timer::elapsed).unwrap_or_default()
    }

    /// End the scope now and return its duration
    pub fn stop(mut self) -> Duration {
        self.finish()
    }

    fn finish(&mut self) -> Duration {
        let Some(timer) = self.timer.take() else {
            return Duration::ZERO;
        };
        // Clock is read before the event is emitted
        let elapsed = timer.stop().duration();
        tracing::info!(
            label = %self.label,
            elapsed_s = elapsed.as_secs_f64(),
            "{} finished in {:.6} s",
            self.label,
            elapsed.as_secs_f64()
        );
        elapsed
    }
}

impl Drop for ScopeTimer {
    fn drop(&mut self) {
        self.finish();
    }
}

/// Run `f` inside a [`ScopeTimer`] and return its output with the elapsed time
pub fn time_scope<T>(label: impl Into<String>, f: impl FnOnce() -> T) -> (T, Duration) {
    let timer = ScopeTimer::start(label);
    let value = f();
    (value, timer.stop())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_returns_elapsed() {
        let timer = ScopeTimer::start("sleep");
        std::thread::sleep(Duration::from_millis(5));
        let elapsed = timer.stop();

        assert!(elapsed >= Duration::from_millis(4));
    }

    #[test]
    fn test_time_scope_returns_value() {
        let (value, elapsed) = time_scope("sum", || (1..=10u32).sum::<u32>());

        assert_eq!(value, 55);
        assert!(elapsed >= Duration::ZERO);
    }

    #[test]
    fn test_label_and_elapsed() {
        let timer = ScopeTimer::start("label");
        assert_eq!(timer.label(), "label");
        assert!(timer.elapsed() <= Duration::from_secs(60));
    }
}
