#![warn(missing_docs)]
//! TrialBench Statistical Engine
//!
//! Pure functions over trial durations:
//! - Mean, min, max and sample standard deviation
//! - Median and tail percentiles via linear interpolation
//! - Coefficient of variation as a stability signal

mod percentiles;
mod summary;

pub use percentiles::{Percentiles, compute_percentile, compute_percentiles};
pub use summary::{SummaryStatistics, compute_mean, compute_summary, sample_std_dev};

/// Coefficient of variation (percent) below which a result is considered stable
pub const DEFAULT_STABILITY_CV: f64 = 5.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!((DEFAULT_STABILITY_CV - 5.0).abs() < f64::EPSILON);
    }
}
