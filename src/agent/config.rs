//! Agent configuration
//!
//! All values are compiled in. The two presets match the two flavours the
//! tool has always shipped as; the `jitter` cargo feature picks the default.

use crate::platform::TimerId;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Identifier of the movement timer ("MOUS" in ASCII).
pub const MOVEMENT_TIMER_ID: TimerId = TimerId(0x5355_4F4D);

/// Consecutive off-window ticks tolerated before recentering.
pub const DEFAULT_RECENTER_THRESHOLD: u32 = 10;

pub const DEFAULT_TICK_PERIOD_MS: u64 = 1000;

pub const CIRCLE_AMPLITUDE: i32 = 4;

pub const JITTER_AMPLITUDE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementStrategy {
    /// Eight-step closed loop.
    Circle,
    /// Independent uniform draws per axis.
    Jitter,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Movement amplitude must be positive, got {0}")]
    InvalidAmplitude(i32),

    #[error("Recenter threshold must be at least 1")]
    InvalidThreshold,

    #[error("Tick period must be at least 1 ms")]
    InvalidTickPeriod,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentConfig {
    pub strategy: MovementStrategy,
    /// Movement amplitude in pixels.
    pub amplitude: i32,
    pub recenter_threshold: u32,
    pub tick_period_ms: u64,
}

impl AgentConfig {
    pub fn circle() -> Self {
        Self {
            strategy: MovementStrategy::Circle,
            amplitude: CIRCLE_AMPLITUDE,
            recenter_threshold: DEFAULT_RECENTER_THRESHOLD,
            tick_period_ms: DEFAULT_TICK_PERIOD_MS,
        }
    }

    pub fn jitter() -> Self {
        Self {
            strategy: MovementStrategy::Jitter,
            amplitude: JITTER_AMPLITUDE,
            recenter_threshold: DEFAULT_RECENTER_THRESHOLD,
            tick_period_ms: DEFAULT_TICK_PERIOD_MS,
        }
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.amplitude <= 0 {
            return Err(ConfigError::InvalidAmplitude(self.amplitude));
        }
        if self.recenter_threshold == 0 {
            return Err(ConfigError::InvalidThreshold);
        }
        if self.tick_period_ms == 0 {
            return Err(ConfigError::InvalidTickPeriod);
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        if cfg!(feature = "jitter") {
            Self::jitter()
        } else {
            Self::circle()
        }
    }
}
