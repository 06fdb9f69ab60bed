//! Benchmark Result
//!
//! The durations of a completed run. Statistics are derived on every call and
//! cannot be set independently of the durations.

use crate::error::BenchError;
use serde::{Deserialize, Serialize};
use trialbench_stats::{SummaryStatistics, compute_summary};

/// Trial durations (seconds) for one named unit of work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawResult")]
pub struct BenchmarkResult {
    name: String,
    durations: Vec<f64>,
}

#[derive(Deserialize)]
struct RawResult {
    name: String,
    durations: Vec<f64>,
}

impl TryFrom<RawResult> for BenchmarkResult {
    type Error = BenchError;

    fn try_from(raw: RawResult) -> Result<Self, Self::Error> {
        BenchmarkResult::from_durations(raw.name, raw.durations)
    }
}

impl BenchmarkResult {
    /// Durations already validated by the runner
    pub(crate) fn from_trusted(name: String, durations: Vec<f64>) -> Self {
        debug_assert!(!durations.is_empty());
        Self { name, durations }
    }

    /// Build a result from previously collected durations in seconds
    ///
    /// Rejects an empty sequence and any negative or non-finite duration.
    pub fn from_durations(
        name: impl Into<String>,
        durations: Vec<f64>,
    ) -> Result<Self, BenchError> {
        if durations.is_empty() {
            return Err(BenchError::invalid("a result needs at least one trial"));
        }
        if let Some((idx, d)) = durations
            .iter()
            .enumerate()
            .find(|&(_, d)| !d.is_finite() || *d < 0.0)
        {
            return Err(BenchError::invalid(format!(
                "trial {} has invalid duration {d}",
                idx + 1
            )));
        }
        Ok(Self {
            name: name.into(),
            durations,
        })
    }

    /// Label of the measured work
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trial durations in seconds, in execution order
    pub fn durations(&self) -> &[f64] {
        &self.durations
    }

    /// Number of trials
    pub fn trials(&self) -> usize {
        self.durations.len()
    }

    /// Full summary (mean, median, std_dev, min, max, percentiles)
    pub fn summary(&self) -> SummaryStatistics {
        compute_summary(&self.durations)
    }

    /// Mean duration in seconds
    pub fn mean(&self) -> f64 {
        self.summary().mean
    }

    /// Shortest trial in seconds
    pub fn min(&self) -> f64 {
        self.durations.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Longest trial in seconds
    pub fn max(&self) -> f64 {
        self.durations.iter().copied().fold(0.0, f64::max)
    }

    /// Sample standard deviation in seconds (0 for a single trial)
    pub fn std_dev(&self) -> f64 {
        self.summary().std_dev
    }

    /// Sum of all trial durations in seconds
    pub fn total(&self) -> f64 {
        self.durations.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_statistics() {
        let result = BenchmarkResult::from_durations("sum", vec![0.2, 0.1, 0.3]).unwrap();

        assert_eq!(result.name(), "sum");
        assert_eq!(result.trials(), 3);
        assert_eq!(result.min(), 0.1);
        assert_eq!(result.max(), 0.3);
        assert!((result.mean() - 0.2).abs() < 1e-12);
        assert!((result.std_dev() - 0.1).abs() < 1e-12);
        assert!((result.total() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_single_trial() {
        let result = BenchmarkResult::from_durations("once", vec![0.5]).unwrap();

        assert_eq!(result.std_dev(), 0.0);
        assert_eq!(result.mean(), 0.5);
        assert_eq!(result.min(), result.max());
    }

    #[test]
    fn test_rejects_empty_and_invalid_durations() {
        assert!(BenchmarkResult::from_durations("empty", vec![]).is_err());
        assert!(BenchmarkResult::from_durations("neg", vec![0.1, -0.1]).is_err());
        assert!(BenchmarkResult::from_durations("nan", vec![f64::NAN]).is_err());
        assert!(BenchmarkResult::from_durations("inf", vec![f64::INFINITY]).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: BenchmarkResult =
            serde_json::from_str(r#"{"name":"a","durations":[0.1,0.2]}"#).unwrap();
        assert_eq!(ok.trials(), 2);

        let bad = serde_json::from_str::<BenchmarkResult>(r#"{"name":"a","durations":[]}"#);
        assert!(bad.is_err());
    }
}
