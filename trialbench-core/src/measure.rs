//! Monotonic Timing
//!
//! Every measurement is taken with `std::time::Instant`, which is monotonic and
//! unaffected by wall-clock adjustments.

use std::time::{Duration, Instant};

/// One timed execution of a unit of work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trial {
    start: Instant,
    end: Instant,
}

impl Trial {
    /// Instant the execution began
    #[inline]
    pub fn start(&self) -> Instant {
        self.start
    }

    /// Instant the execution finished
    #[inline]
    pub fn end(&self) -> Instant {
        self.end
    }

    /// Elapsed time between start and end
    #[inline]
    pub fn duration(&self) -> Duration {
        self.end.saturating_duration_since(self.start)
    }

    /// Elapsed time in seconds, never negative
    #[inline]
    pub fn seconds(&self) -> f64 {
        self.duration().as_secs_f64()
    }
}

/// Timer for a single trial
#[derive(Debug)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Time elapsed so far, without stopping
    #[inline(always)]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer and return the completed trial
    #[inline(always)]
    pub fn stop(self) -> Trial {
        Trial {
            start: self.start,
            end: Instant::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer() {
        let timer = Timer::start();
        std::thread::sleep(Duration::from_millis(10));
        let trial = timer.stop();

        // Should be at least 5ms
        assert!(trial.duration() >= Duration::from_millis(5));
        assert!(trial.seconds() >= 0.005);
    }

    #[test]
    fn test_trial_endpoints_are_ordered() {
        let trial = Timer::start().stop();

        assert!(trial.end() >= trial.start());
        assert!(trial.seconds() >= 0.0);
    }
}
