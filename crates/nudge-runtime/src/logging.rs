#![forbid(unsafe_code)]

//! Process-wide `tracing` subscriber setup.
//!
//! Libraries in this workspace only emit events; the application decides
//! where they go by calling [`init_tracing`] once at startup. `RUST_LOG`
//! overrides the configured filter when it is set.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, one event per line.
    #[default]
    Pretty,
    /// Newline-delimited JSON. Requires the `tracing-json` feature.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive string, e.g. `"info,nudge_core=debug"`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
            format: LogFormat::Pretty,
        }
    }
}

impl LogConfig {
    /// Build the filter, preferring `RUST_LOG` when present.
    ///
    /// # Errors
    ///
    /// Returns [`LoggingError::Filter`] if the configured directives do not parse.
    pub fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        self.parse_filter()
    }

    /// Parse the configured directives, ignoring the environment.
    ///
    /// # Errors
    ///
    /// Returns [`LoggingError::Filter`] on a malformed directive.
    pub fn parse_filter(&self) -> Result<EnvFilter, LoggingError> {
        EnvFilter::try_new(&self.filter).map_err(|err| LoggingError::Filter {
            filter: self.filter.clone(),
            reason: err.to_string(),
        })
    }
}

/// Failures while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter {filter:?}: {reason}")]
    Filter { filter: String, reason: String },

    #[error("JSON log output requires the `tracing-json` feature")]
    JsonUnavailable,

    #[error("a global tracing subscriber is already installed: {0}")]
    AlreadyInitialized(String),
}

/// Install the global subscriber described by `config`.
///
/// # Errors
///
/// Fails on a bad filter, on JSON output without the `tracing-json`
/// feature, or if a global subscriber was already set.
pub fn init_tracing(config: &LogConfig) -> Result<(), LoggingError> {
    let filter = config.env_filter()?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match config.format {
        LogFormat::Pretty => builder.try_init(),
        #[cfg(feature = "tracing-json")]
        LogFormat::Json => builder.json().try_init(),
        #[cfg(not(feature = "tracing-json"))]
        LogFormat::Json => return Err(LoggingError::JsonUnavailable),
    };
    installed.map_err(|err| LoggingError::AlreadyInitialized(err.to_string()))?;

    tracing::debug!(filter = %config.filter, format = ?config.format, "tracing initialized");
    Ok(())
}
