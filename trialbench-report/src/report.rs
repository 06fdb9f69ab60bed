//! Report Data Structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use trialbench_core::{BenchError, BenchmarkResult};

/// Ranked comparison of one or more benchmark results
///
/// Deserializing checks the same ranking [`compare`] produces: at least one
/// entry, ranks `1..=n` in order, ascending means and `min_s <= max_s`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawReport")]
pub struct BenchmarkReport {
    generated_at: DateTime<Utc>,
    entries: Vec<ReportEntry>,
}

#[derive(Deserialize)]
struct RawReport {
    generated_at: DateTime<Utc>,
    entries: Vec<ReportEntry>,
}

impl TryFrom<RawReport> for BenchmarkReport {
    type Error = BenchError;

    fn try_from(raw: RawReport) -> Result<Self, Self::Error> {
        check_ranking(&raw.entries)?;
        Ok(Self {
            generated_at: raw.generated_at,
            entries: raw.entries,
        })
    }
}

fn check_ranking(entries: &[ReportEntry]) -> Result<(), BenchError> {
    if entries.is_empty() {
        return Err(invalid("a report needs at least one entry".to_string()));
    }
    for (idx, entry) in entries.iter().enumerate() {
        if entry.rank != idx + 1 {
            return Err(invalid(format!(
                "entry '{}' has rank {}, expected {}",
                entry.name,
                entry.rank,
                idx + 1
            )));
        }
        if entry.min_s > entry.max_s {
            return Err(invalid(format!(
                "entry '{}' has min {} above max {}",
                entry.name, entry.min_s, entry.max_s
            )));
        }
    }
    if let Some(pair) = entries.windows(2).find(|p| p[1].mean_s < p[0].mean_s) {
        return Err(invalid(format!(
            "entry '{}' is ranked after slower entry '{}'",
            pair[1].name, pair[0].name
        )));
    }
    Ok(())
}

fn invalid(message: String) -> BenchError {
    BenchError::InvalidArgument(message)
}

/// One ranked row of a [`BenchmarkReport`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// 1-based position, fastest first
    pub rank: usize,
    /// Benchmark name
    pub name: String,
    /// Number of trials
    pub trials: usize,
    /// Mean duration in seconds
    pub mean_s: f64,
    /// Median duration in seconds
    pub median_s: f64,
    /// Shortest trial in seconds
    pub min_s: f64,
    /// Longest trial in seconds
    pub max_s: f64,
    /// Sample standard deviation in seconds
    pub std_dev_s: f64,
    /// Mean relative to the fastest mean (1.0 for the fastest); `None` when
    /// the fastest mean is zero and this one is not
    pub relative: Option<f64>,
}

impl BenchmarkReport {
    /// Time the report was generated
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Entries ordered by ascending mean
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Entry with the lowest mean
    pub fn fastest(&self) -> &ReportEntry {
        // never empty: compare() and deserialization both reject that
        &self.entries[0]
    }

    /// Benchmark names in rank order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Number of ranked entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for symmetry with [`BenchmarkReport::len`]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Rank `results` by ascending mean duration.
///
/// Equal means keep their input order. Fails with `InvalidArgument` when
/// `results` is empty.
pub fn compare(results: &[BenchmarkResult]) -> Result<BenchmarkReport, BenchError> {
    if results.is_empty() {
        return Err(invalid("compare needs at least one result".to_string()));
    }

    let mut rows: Vec<_> = results.iter().map(|r| (r, r.summary())).collect();
    // sort_by is stable, so ties stay in input order
    rows.sort_by(|(_, a), (_, b)| a.mean.total_cmp(&b.mean));

    let fastest = rows[0].1.mean;
    let entries = rows
        .into_iter()
        .enumerate()
        .map(|(idx, (result, stats))| ReportEntry {
            rank: idx + 1,
            name: result.name().to_string(),
            trials: stats.sample_count,
            mean_s: stats.mean,
            median_s: stats.median,
            min_s: stats.min,
            max_s: stats.max,
            std_dev_s: stats.std_dev,
            relative: relative_to(stats.mean, fastest),
        })
        .collect();

    Ok(BenchmarkReport {
        generated_at: Utc::now(),
        entries,
    })
}

fn relative_to(mean: f64, fastest: f64) -> Option<f64> {
    if fastest > 0.0 {
        Some(mean / fastest)
    } else if mean > 0.0 {
        None
    } else {
        Some(1.0)
    }
}
