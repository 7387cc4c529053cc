#![forbid(unsafe_code)]

use thiserror::Error;

use crate::config::ConfigError;
use nudge_runtime::logging::LoggingError;
use nudge_runtime::session::SessionError;

pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for nudge apps.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("session: {0}")]
    Session(#[from] SessionError),

    #[error("logging: {0}")]
    Logging(#[from] LoggingError),
}

impl Error {
    /// Whether the error came from bad configuration rather than the
    /// environment.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::Config(ConfigError::Validation(_) | ConfigError::Toml(_) | ConfigError::Json(_))
                | Self::Logging(LoggingError::Filter { .. })
        )
    }
}
