//! Logging setup and the tracing-backed report sink
//!
//! Logging is configured once per process by the binary; library code only
//! emits `tracing` events.

use tracing::Level;
use tracing_subscriber::EnvFilter;
use trialbench_core::{BenchmarkResult, ReportSink};

/// Minimum severity for emitted log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Very verbose diagnostics
    Trace,
    /// Debug diagnostics
    Debug,
    /// Normal operational messages
    #[default]
    Info,
    /// Recoverable problems
    Warn,
    /// Failures
    Error,
}

impl LogLevel {
    /// Lowercase name, as accepted by `EnvFilter`
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("Unknown log level: {}", other)),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Install a global fmt subscriber at `level`
///
/// `level` applies to every target, so a binary's own events show up next to
/// trialbench's. `RUST_LOG`, when set, takes precedence over `level`. Returns
/// an error instead of panicking if a global subscriber is already installed.
pub fn configure_logging(level: LogLevel) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))
}

fn level_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::new(level.as_str())
}

/// Report sink that emits one `tracing` event per completed result
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink {
    level: LogLevel,
}

impl TracingSink {
    /// Sink emitting at `level`
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Level events are emitted at
    pub fn level(&self) -> LogLevel {
        self.level
    }
}

macro_rules! emit_result {
    ($level:expr, $result:expr, $stats:expr) => {
        tracing::event!(
            $level,
            benchmark = $result.name(),
            trials = $result.trials(),
            mean_s = $stats.mean,
            min_s = $stats.min,
            max_s = $stats.max,
            std_dev_s = $stats.std_dev,
            "{} completed {} trials, mean {:.6} s",
            $result.name(),
            $result.trials(),
            $stats.mean
        )
    };
}

impl ReportSink for TracingSink {
    fn record(&mut self, result: &BenchmarkResult) {
        let stats = result.summary();
        match self.level {
            LogLevel::Trace => emit_result!(Level::TRACE, result, stats),
            LogLevel::Debug => emit_result!(Level::DEBUG, result, stats),
            LogLevel::Info => emit_result!(Level::INFO, result, stats),
            LogLevel::Warn => emit_result!(Level::WARN, result, stats),
            LogLevel::Error => emit_result!(Level::ERROR, result, stats),
        }
    }
}
