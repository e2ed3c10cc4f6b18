//! Gesture threshold configuration.
//!
//! Hosts that want non-default tap/drag/long-press timing load a
//! [`GestureConfig`] from JSON (or construct one directly) and hand it to the
//! translator at build time. Defaults come from [`crate::constants`].

use crate::constants::{DRAG_IGNORE_DISTANCE, DRAG_IGNORE_TIME_MS, LONG_PRESS_TIME_MS};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while loading or validating a [`GestureConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// JSON parsing error from serde_json
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A threshold value outside its usable range
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Tunable thresholds for gesture classification.
///
/// Missing fields fall back to the defaults, so a host can override a single
/// threshold with e.g. `{"long_press_time_ms": 500}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Press duration (ms) beyond which a moving contact is a drag.
    pub drag_ignore_time_ms: u64,
    /// Per-axis displacement (px) beyond which a contact is a drag.
    pub drag_ignore_distance: f32,
    /// Hold duration (ms) after which a stationary contact is a long-press.
    pub long_press_time_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_ignore_time_ms: DRAG_IGNORE_TIME_MS,
            drag_ignore_distance: DRAG_IGNORE_DISTANCE,
            long_press_time_ms: LONG_PRESS_TIME_MS,
        }
    }
}

impl GestureConfig {
    /// Load a config from JSON, validating the result.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the thresholds are usable together.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.drag_ignore_distance < 0.0 || !self.drag_ignore_distance.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "drag_ignore_distance must be a non-negative finite number, got {}",
                self.drag_ignore_distance
            )));
        }
        if self.long_press_time_ms == 0 {
            return Err(ConfigError::Invalid(
                "long_press_time_ms must be greater than zero".to_string(),
            ));
        }
        if self.long_press_time_ms <= self.drag_ignore_time_ms {
            return Err(ConfigError::Invalid(format!(
                "long_press_time_ms ({}) must exceed drag_ignore_time_ms ({})",
                self.long_press_time_ms, self.drag_ignore_time_ms
            )));
        }
        Ok(())
    }

    /// Drag-ignore time as a [`Duration`].
    pub fn drag_ignore_time(&self) -> Duration {
        Duration::from_millis(self.drag_ignore_time_ms)
    }

    /// Long-press time as a [`Duration`].
    pub fn long_press_time(&self) -> Duration {
        Duration::from_millis(self.long_press_time_ms)
    }
}
