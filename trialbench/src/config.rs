//! Configuration loading from trialbench.toml
//!
//! Configuration can be specified in a `trialbench.toml` file in the project
//! root. It is discovered by walking up from the current directory.

use crate::logging::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use trialbench_core::{DEFAULT_REPEATS, Runner};
use trialbench_report::OutputFormat;

/// File name searched for by [`TrialConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "trialbench.toml";

/// TrialBench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TrialConfig {
    /// Runner configuration
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Runner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Trials per benchmark; must be positive
    #[serde(default = "default_repeats")]
    pub repeats: i64,
    /// Untimed invocations before measurement
    #[serde(default)]
    pub warmup: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            repeats: default_repeats(),
            warmup: 0,
        }
    }
}

fn default_repeats() -> i64 {
    DEFAULT_REPEATS as i64
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Report format: "human", "json" or "csv"
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level: trace, debug, info, warn or error
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

impl TrialConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let dir = std::env::current_dir().ok()?;
        let path = Self::find_from(&dir)?;
        match Self::load(&path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded configuration");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable configuration");
                None
            }
        }
    }

    /// Locate the nearest config file at or above `start`
    pub fn find_from(start: &Path) -> Option<PathBuf> {
        let mut dir = start.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.is_file() {
                return Some(config_path);
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Build a [`Runner`] from the `[runner]` section
    ///
    /// Fails if `repeats` is not positive.
    pub fn runner(&self) -> anyhow::Result<Runner> {
        Ok(Runner::new()
            .with_repeats(self.runner.repeats)?
            .with_warmup(self.runner.warmup))
    }

    /// Parsed `[output] format`
    pub fn output_format(&self) -> anyhow::Result<OutputFormat> {
        self.output.format.parse().map_err(anyhow::Error::msg)
    }

    /// Parsed `[logging] level`
    pub fn log_level(&self) -> anyhow::Result<LogLevel> {
        self.logging.level.parse().map_err(anyhow::Error::msg)
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# TrialBench Configuration

[runner]
# Trials per benchmark (must be positive)
repeats = 10
# Untimed invocations before measurement
warmup = 0

[output]
# Report format: human, json, csv
format = "human"

[logging]
# Minimum level: trace, debug, info, warn, error
level = "info"
"#
        .to_string()
    }
}
