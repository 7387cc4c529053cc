#![forbid(unsafe_code)]

//! Configuration as data.
//!
//! Every tunable of the gesture, feedback, toast and logging layers lives in
//! one [`NudgeConfig`] that can be loaded from TOML or JSON at startup.
//!
//! ```toml
//! # nudge.toml
//! [card]
//! swipe_threshold = 96.0
//! haptics = false
//!
//! [toasts]
//! max_visible = 2
//!
//! [logging]
//! filter = "info,nudge_core=debug"
//! ```
//!
//! # Defaults
//!
//! Every field defaults to the value the components use on their own, so
//! `NudgeConfig::default()` behaves exactly like constructing each component
//! with its `Default`. Missing sections and fields fall back individually.

use std::path::Path;

use nudge_core::card_gesture::CardSwipeConfig;
use nudge_core::gesture::SwipeConfig;
use nudge_runtime::logging::LogConfig;
use nudge_widgets::toast_store::ToastConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_time::Duration;

// ---------------------------------------------------------------------------
// Top-level NudgeConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NudgeConfig {
    /// Plain directional swipes.
    pub swipe: SwipeSection,
    /// Swipeable cards.
    pub card: CardSection,
    /// Post-action indicator.
    pub feedback: FeedbackSection,
    pub toasts: ToastSection,
    pub logging: LogConfig,
}

impl NudgeConfig {
    /// Parse TOML without validating.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML file without validating.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parse JSON without validating.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse and validate TOML.
    pub fn load_toml_str(s: &str) -> Result<Self, ConfigError> {
        Self::from_toml_str(s)?.validated()
    }

    /// Read, parse and validate a TOML file.
    pub fn load_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Self::from_toml_file(path)?.validated()?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Parse and validate JSON.
    pub fn load_json_str(s: &str) -> Result<Self, ConfigError> {
        Self::from_json_str(s)?.validated()
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    fn validated(self) -> Result<Self, ConfigError> {
        let problems = self.validate();
        if problems.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(problems))
        }
    }

    /// Check every value is usable.
    ///
    /// Returns one message per problem; an empty list means the config is
    /// valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        // NaN fails every comparison, so the checks are written to reject it.
        if !(self.swipe.threshold > 0.0) {
            errors.push(format!(
                "swipe.threshold must be > 0, got {}",
                self.swipe.threshold
            ));
        }
        if !(self.swipe.velocity_threshold >= 0.0) {
            errors.push(format!(
                "swipe.velocity_threshold must be >= 0, got {}",
                self.swipe.velocity_threshold
            ));
        }
        if !(self.swipe.flick_min_distance >= 0.0) {
            errors.push(format!(
                "swipe.flick_min_distance must be >= 0, got {}",
                self.swipe.flick_min_distance
            ));
        }

        if !(self.card.swipe_threshold > 0.0) {
            errors.push(format!(
                "card.swipe_threshold must be > 0, got {}",
                self.card.swipe_threshold
            ));
        }
        if !(self.card.max_swipe > 0.0) {
            errors.push(format!(
                "card.max_swipe must be > 0, got {}",
                self.card.max_swipe
            ));
        }
        if !(0.0..=1.0).contains(&self.card.resistance) {
            errors.push(format!(
                "card.resistance must be in [0, 1], got {}",
                self.card.resistance
            ));
        } else if self.card.resistance == 0.0 && self.card.swipe_threshold > self.card.max_swipe {
            errors.push(format!(
                "card.swipe_threshold ({}) exceeds card.max_swipe ({}) with zero resistance",
                self.card.swipe_threshold, self.card.max_swipe
            ));
        }
        if !(self.card.flick_min_distance >= 0.0) {
            errors.push(format!(
                "card.flick_min_distance must be >= 0, got {}",
                self.card.flick_min_distance
            ));
        }

        if self.feedback.duration_ms == 0 {
            errors.push("feedback.duration_ms must be > 0".into());
        }

        if self.toasts.max_visible == 0 {
            errors.push("toasts.max_visible must be > 0".into());
        }
        if self.toasts.max_queued == 0 {
            errors.push("toasts.max_queued must be > 0".into());
        }
        if self.toasts.default_duration_ms == 0 {
            errors.push("toasts.default_duration_ms must be > 0".into());
        }

        if let Err(err) = self.logging.parse_filter() {
            errors.push(format!("logging.filter: {err}"));
        }

        errors
    }

    /// Build a [`SwipeConfig`] from this config.
    #[must_use]
    pub fn to_swipe_config(&self) -> SwipeConfig {
        SwipeConfig {
            threshold: self.swipe.threshold,
            velocity_threshold: self.swipe.velocity_threshold,
            flick_max_duration: Duration::from_millis(self.swipe.flick_max_duration_ms),
            flick_min_distance: self.swipe.flick_min_distance,
            prevent_scroll: self.swipe.prevent_scroll,
            disabled: false,
        }
    }

    /// Build a [`CardSwipeConfig`] from this config.
    #[must_use]
    pub fn to_card_config(&self) -> CardSwipeConfig {
        CardSwipeConfig {
            swipe_threshold: self.card.swipe_threshold,
            max_swipe: self.card.max_swipe,
            resistance: self.card.resistance,
            flick_max_duration: Duration::from_millis(self.card.flick_max_duration_ms),
            flick_min_distance: self.card.flick_min_distance,
            disabled: false,
        }
    }

    /// Build a [`ToastConfig`] from this config.
    #[must_use]
    pub fn to_toast_config(&self) -> ToastConfig {
        ToastConfig {
            max_visible: self.toasts.max_visible,
            max_queued: self.toasts.max_queued,
            default_duration: Duration::from_millis(self.toasts.default_duration_ms),
            dedup_window: Duration::from_millis(self.toasts.dedup_window_ms),
        }
    }

    /// How long the post-action indicator stays up.
    #[must_use]
    pub fn feedback_duration(&self) -> Duration {
        Duration::from_millis(self.feedback.duration_ms)
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeSection {
    /// Minimum dominant-axis travel in pixels. Default: 50.
    pub threshold: f32,
    /// Fling speed in px/ms. Default: 0.3.
    pub velocity_threshold: f32,
    /// Default: 300.
    pub flick_max_duration_ms: u64,
    /// Default: 40.
    pub flick_min_distance: f32,
    /// Default: false.
    pub prevent_scroll: bool,
}

impl Default for SwipeSection {
    fn default() -> Self {
        Self {
            threshold: 50.0,
            velocity_threshold: 0.3,
            flick_max_duration_ms: 300,
            flick_min_distance: 40.0,
            prevent_scroll: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardSection {
    /// Visual offset that arms an action. Default: 80.
    pub swipe_threshold: f32,
    /// Offset past which resistance applies. Default: 120.
    pub max_swipe: f32,
    /// Default: 0.3.
    pub resistance: f32,
    /// Default: 300.
    pub flick_max_duration_ms: u64,
    /// Default: 40.
    pub flick_min_distance: f32,
    /// Pulse when an action arms. Default: true.
    pub haptics: bool,
}

impl Default for CardSection {
    fn default() -> Self {
        Self {
            swipe_threshold: 80.0,
            max_swipe: 120.0,
            resistance: 0.3,
            flick_max_duration_ms: 300,
            flick_min_distance: 40.0,
            haptics: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackSection {
    /// Default: 1500.
    pub duration_ms: u64,
}

impl Default for FeedbackSection {
    fn default() -> Self {
        Self { duration_ms: 1500 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastSection {
    /// Default: 3.
    pub max_visible: usize,
    /// Default: 10.
    pub max_queued: usize,
    /// Default: 5000.
    pub default_duration_ms: u64,
    /// Default: 1000.
    pub dedup_window_ms: u64,
}

impl Default for ToastSection {
    fn default() -> Self {
        Self {
            max_visible: 3,
            max_queued: 10,
            default_duration_ms: 5000,
            dedup_window_ms: 1000,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
