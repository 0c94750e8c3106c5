//! # Configuration Module
//!
//! Router and logging settings, read from environment variables or a TOML file.
//!
//! ## Environment Variables
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `SCOPEROUTE_LOG_LEVEL` | `trace`/`debug`/`info`/`warn`/`error` | `info` |
//! | `SCOPEROUTE_LOG_FORMAT` | `json` or `pretty` | `json` |
//! | `SCOPEROUTE_LOG_INCLUDE_LOCATION` | add file:line to log lines | `false` |
//! | `SCOPEROUTE_SLOW_MATCH_US` | route matches slower than this are logged at warn | `1000` |
//!
//! Unparseable values fall back to the default.
//!
//! ## TOML
//!
//! ```toml
//! slow_match_threshold_us = 500
//!
//! [log]
//! level = "debug"
//! format = "pretty"
//! include_location = true
//! ```
//!
//! Every key is optional.

use std::env;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Log output format: JSON for production, pretty-print for development
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }
}

/// Logging settings consumed by [`init_logging`](crate::logging::init_logging).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level: trace/debug/info/warn/error
    pub level: String,
    pub format: LogFormat,
    /// Include file:line location (dev only)
    pub include_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Json,
            include_location: false,
        }
    }
}

impl LogConfig {
    /// Settings for local development: debug level, pretty output with locations.
    pub fn default_dev() -> Self {
        Self {
            level: "debug".to_string(),
            format: LogFormat::Pretty,
            include_location: true,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    pub log: LogConfig,
    /// Route matches slower than this (microseconds) are logged at warn level
    pub slow_match_threshold_us: u64,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            slow_match_threshold_us: 1000,
        }
    }
}

impl RouterConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log: LogConfig {
                level: env::var("SCOPEROUTE_LOG_LEVEL").unwrap_or(defaults.log.level),
                format: env::var("SCOPEROUTE_LOG_FORMAT")
                    .map(|s| LogFormat::parse(&s))
                    .unwrap_or(defaults.log.format),
                include_location: env::var("SCOPEROUTE_LOG_INCLUDE_LOCATION")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.log.include_location),
            },
            slow_match_threshold_us: env::var("SCOPEROUTE_SLOW_MATCH_US")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.slow_match_threshold_us),
        }
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid router configuration")
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load config file {}", path.display()))
    }

    #[must_use]
    pub fn slow_match_threshold(&self) -> Duration {
        Duration::from_micros(self.slow_match_threshold_us)
    }
}
