//! Configuration module for NSD metrics.
//!
//! Typed configuration structs that map to the YAML configuration file,
//! with loading, validation and defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub stats: StatsConfig,
}

/// Logging / tracing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: `trace`, `debug`, `info`, `warn`, or `error`.
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
    /// Emit JSON formatted log lines instead of human readable ones.
    pub json: bool,
}

/// Which statistics backend receives records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkKind {
    /// Positional stats log written through `tracing`
    Log,
    /// In-process Prometheus counters and histograms
    Prometheus,
    /// Append-only JSON lines file
    Jsonl,
}

impl Default for SinkKind {
    fn default() -> Self {
        SinkKind::Log
    }
}

impl std::fmt::Display for SinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SinkKind::Log => "log",
            SinkKind::Prometheus => "prometheus",
            SinkKind::Jsonl => "jsonl",
        };
        write!(f, "{}", s)
    }
}

/// Statistics sink settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub sink: SinkKind,
    /// Target file for the `jsonl` sink.
    pub jsonl_path: PathBuf,
}

impl Config {
    /// Load configuration from a YAML file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Try to load from `path`; fall back to [`Config::default`] on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Platform-appropriate default path for the configuration file.
    ///
    /// Typically `$XDG_CONFIG_HOME/nsdmetrics/config.yaml` on Linux.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("nsdmetrics")
            .join("config.yaml")
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            sink: SinkKind::Log,
            jsonl_path: default_data_dir().join("stats.jsonl"),
        }
    }
}

/// Returns `$XDG_DATA_HOME/nsdmetrics`.
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("~/.local/share"))
        .join("nsdmetrics")
}

/// A single validation error found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path to the offending field, e.g. `"logging.level"`.
    pub field: String,
    /// Human-readable explanation.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Valid values for `logging.level`.
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl Config {
    /// Validate the configuration and return all errors found.
    ///
    /// An empty vector means the configuration is valid.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        // --- logging ---
        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            errors.push(ValidationError {
                field: "logging.level".into(),
                message: format!(
                    "invalid level '{}'; valid options: {}",
                    self.logging.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        // --- stats ---
        if self.stats.sink == SinkKind::Jsonl {
            if self.stats.jsonl_path.as_os_str().is_empty() {
                errors.push(ValidationError {
                    field: "stats.jsonl_path".into(),
                    message: "must be set when stats.sink is 'jsonl'".into(),
                });
            } else if self.stats.jsonl_path.is_dir() {
                errors.push(ValidationError {
                    field: "stats.jsonl_path".into(),
                    message: format!("is a directory: {}", self.stats.jsonl_path.display()),
                });
            }
        }

        errors
    }
}
