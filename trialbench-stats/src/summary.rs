//! Summary Statistics
//!
//! Every statistic is computed from the full trial sequence; no samples are
//! discarded as outliers. Each call recomputes from scratch, so the same input
//! always yields the same output.

use crate::percentiles::{Percentiles, percentile_of_sorted};
use serde::{Deserialize, Serialize};

/// Summary of a sequence of trial durations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Arithmetic mean, always within `[min, max]`
    pub mean: f64,
    /// Median (p50)
    pub median: f64,
    /// Sample standard deviation (n - 1 denominator); 0 for fewer than 2 samples
    pub std_dev: f64,
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
    /// Tail percentiles
    pub percentiles: Percentiles,
    /// Number of samples summarized
    pub sample_count: usize,
}

/// Compute summary statistics over `samples`
///
/// An empty slice yields an all-zero summary with `sample_count == 0`.
pub fn compute_summary(samples: &[f64]) -> SummaryStatistics {
    if samples.is_empty() {
        return SummaryStatistics {
            mean: 0.0,
            median: 0.0,
            std_dev: 0.0,
            min: 0.0,
            max: 0.0,
            percentiles: Percentiles {
                p50: 0.0,
                p90: 0.0,
                p95: 0.0,
                p99: 0.0,
            },
            sample_count: 0,
        };
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    let mean = compute_mean(samples).clamp(min, max);
    let std_dev = sample_std_dev(samples, mean);

    let percentiles = Percentiles {
        p50: percentile_of_sorted(&sorted, 50.0),
        p90: percentile_of_sorted(&sorted, 90.0),
        p95: percentile_of_sorted(&sorted, 95.0),
        p99: percentile_of_sorted(&sorted, 99.0),
    };

    SummaryStatistics {
        mean,
        median: percentiles.p50,
        std_dev,
        min,
        max,
        percentiles,
        sample_count: samples.len(),
    }
}

/// Arithmetic mean; 0.0 for an empty slice
pub fn compute_mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        0.0
    } else {
        samples.iter().sum::<f64>() / samples.len() as f64
    }
}

/// Sample standard deviation around `mean`
///
/// Uses Bessel's correction (n - 1). Defined as exactly 0.0 when there are
/// fewer than two samples.
pub fn sample_std_dev(samples: &[f64], mean: f64) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let variance =
        samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (samples.len() - 1) as f64;
    variance.sqrt()
}

impl SummaryStatistics {
    /// Coefficient of variation in percent (relative stddev)
    pub fn coefficient_of_variation(&self) -> f64 {
        if self.mean == 0.0 {
            0.0
        } else {
            (self.std_dev / self.mean) * 100.0
        }
    }

    /// Check if the distribution appears stable (CV below `cv_threshold` percent)
    pub fn is_stable(&self, cv_threshold: f64) -> bool {
        self.coefficient_of_variation() < cv_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_summary() {
        let samples = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let summary = compute_summary(&samples);

        assert!((summary.mean - 3.0).abs() < 1e-12);
        assert!((summary.median - 3.0).abs() < 1e-12);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 5.0);
        assert_eq!(summary.sample_count, 5);
    }

    #[test]
    fn test_sample_std_dev_uses_bessel_correction() {
        // Population stddev would be 2.0; sample stddev is sqrt(32 / 7)
        let samples = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let summary = compute_summary(&samples);

        assert!((summary.std_dev - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_single_sample_has_zero_std_dev() {
        let summary = compute_summary(&[0.125]);

        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.mean, 0.125);
        assert_eq!(summary.min, summary.max);
    }

    #[test]
    fn test_mean_stays_within_bounds_for_identical_samples() {
        // 0.1 + 0.1 + 0.1 == 0.30000000000000004, so the raw mean exceeds 0.1
        let samples = vec![0.1, 0.1, 0.1];
        let summary = compute_summary(&samples);

        assert!(summary.min <= summary.mean && summary.mean <= summary.max);
        assert_eq!(summary.mean, 0.1);
    }

    #[test]
    fn test_summary_is_deterministic() {
        let samples = vec![0.3, 0.1, 0.2, 0.7];
        assert_eq!(compute_summary(&samples), compute_summary(&samples));
    }

    #[test]
    fn test_coefficient_of_variation() {
        let summary = compute_summary(&[100.0, 100.0, 100.0, 100.0]);

        assert!((summary.coefficient_of_variation() - 0.0).abs() < f64::EPSILON);
        assert!(summary.is_stable(1.0));
    }

    #[test]
    fn test_empty_samples() {
        let summary = compute_summary(&[]);

        assert_eq!(summary.sample_count, 0);
        assert!((summary.mean - 0.0).abs() < f64::EPSILON);
    }
}
