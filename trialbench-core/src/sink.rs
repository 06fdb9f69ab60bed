//! Reporting Sinks
//!
//! A sink receives each completed [`BenchmarkResult`] after its last trial.
//! Sinks are never called from inside the timing loop.

use crate::result::BenchmarkResult;

/// Destination for completed benchmark results
pub trait ReportSink {
    /// Called once per successful run
    fn record(&mut self, result: &BenchmarkResult);
}

impl ReportSink for Vec<BenchmarkResult> {
    fn record(&mut self, result: &BenchmarkResult) {
        self.push(result.clone());
    }
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn record(&mut self, result: &BenchmarkResult) {
        (**self).record(result);
    }
}

impl<S: ReportSink + ?Sized> ReportSink for Box<S> {
    fn record(&mut self, result: &BenchmarkResult) {
        (**self).record(result);
    }
}

/// Sink that discards every result; the default for [`Runner`](crate::Runner)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoSink;

impl ReportSink for NoSink {
    fn record(&mut self, _result: &BenchmarkResult) {}
}

/// Sink that counts results without keeping them
#[derive(Debug, Default, Clone, Copy)]
pub struct CountingSink {
    /// Results seen so far
    pub count: usize,
}

impl ReportSink for CountingSink {
    fn record(&mut self, _result: &BenchmarkResult) {
        self.count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_collects_clones() {
        let result = BenchmarkResult::from_durations("a", vec![0.1]).unwrap();
        let mut sink: Vec<BenchmarkResult> = Vec::new();

        fn feed(mut sink: impl ReportSink, result: &BenchmarkResult) {
            sink.record(result);
        }

        sink.record(&result);
        feed(&mut sink, &result);

        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0], result);
    }

    #[test]
    fn test_counting_sink() {
        let result = BenchmarkResult::from_durations("a", vec![0.1]).unwrap();
        let mut sink = CountingSink::default();

        sink.record(&result);

        assert_eq!(sink.count, 1);
    }
}
