//! Benchmark Errors

use std::convert::Infallible;

/// Errors surfaced by [`Runner`](crate::Runner) and by report construction.
///
/// `E` is the error type of the measured work. For infallible work, and for
/// operations that never run work, it defaults to [`Infallible`].
#[derive(Debug, thiserror::Error)]
pub enum BenchError<E = Infallible> {
    /// A caller-supplied argument was rejected before any work ran
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The measured work failed; remaining trials were not run
    #[error("measured operation failed on trial {trial} of {repeats}")]
    MeasuredOperationFailed {
        /// 1-based trial index that failed (0 = during warmup)
        trial: u64,
        /// Trials requested for the run
        repeats: u64,
        /// The error returned by the work, unchanged
        #[source]
        source: E,
    },
}

impl<E> BenchError<E> {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        BenchError::InvalidArgument(reason.into())
    }

    /// Whether this is an `InvalidArgument` error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, BenchError::InvalidArgument(_))
    }

    /// The measured work's original error, if that is what failed
    pub fn into_source(self) -> Option<E> {
        match self {
            BenchError::MeasuredOperationFailed { source, .. } => Some(source),
            BenchError::InvalidArgument(_) => None,
        }
    }
}

impl BenchError<Infallible> {
    /// Widen an argument error into any work error type
    pub fn widen<E>(self) -> BenchError<E> {
        match self {
            BenchError::InvalidArgument(reason) => BenchError::InvalidArgument(reason),
            BenchError::MeasuredOperationFailed { source, .. } => match source {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[derive(Debug, thiserror::Error)]
    #[error("disk full")]
    struct DiskFull;

    #[test]
    fn test_source_is_preserved() {
        let err: BenchError<DiskFull> = BenchError::MeasuredOperationFailed {
            trial: 3,
            repeats: 5,
            source: DiskFull,
        };

        assert_eq!(err.to_string(), "measured operation failed on trial 3 of 5");
        assert_eq!(err.source().map(|s| s.to_string()), Some("disk full".into()));
        assert!(matches!(err.into_source(), Some(DiskFull)));
    }

    #[test]
    fn test_invalid_argument_display() {
        let err: BenchError = BenchError::invalid("repeat count must be positive, got 0");

        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "invalid argument: repeat count must be positive, got 0"
        );
    }

    #[test]
    fn test_widen_keeps_reason() {
        let err: BenchError<DiskFull> = BenchError::invalid("empty").widen();
        assert!(matches!(err, BenchError::InvalidArgument(ref r) if r == "empty"));
    }
}
