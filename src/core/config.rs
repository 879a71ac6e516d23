//! Session configuration.
//!
//! Every timing constant and tuning knob of a session lives here. The
//! defaults are the shipped game: a 20 second round, 3 second freezes and a
//! 20 tile pool.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Session configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Length of a round in countdown seconds.
    pub game_duration_secs: u32,

    /// How long a scoreless drop freezes the player.
    pub freeze_duration_ms: u64,

    /// Number of slots in the shared tile pool.
    pub pool_size: usize,

    /// Countdown cadence.
    pub tick_interval_ms: u64,

    /// Cadence at which expired freezes are cleared.
    pub freeze_check_interval_ms: u64,

    /// Duration of the pickup tilt-and-grow animation.
    pub pickup_animation_ms: u64,

    /// Duration of the glide back to the pickup point after a missed drop.
    pub return_animation_ms: u64,

    /// Pickup rotation is drawn uniformly from `[-max, +max)` degrees.
    pub max_pickup_rotation_deg: f64,

    /// Scale factor a picked-up tile grows to.
    pub pickup_scale: f64,

    /// Forgiveness margin around a target tile, in layout units.
    pub drop_padding: f64,

    /// Window over which the grid's entrance reveal is spread.
    pub entrance_window_ms: u32,

    /// RNG seed. `None` draws a random seed per engine.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            game_duration_secs: 20,
            freeze_duration_ms: 3_000,
            pool_size: 20,
            tick_interval_ms: 1_000,
            freeze_check_interval_ms: 100,
            pickup_animation_ms: 250,
            return_animation_ms: 300,
            max_pickup_rotation_deg: 18.0,
            pickup_scale: 1.3,
            drop_padding: 20.0,
            entrance_window_ms: 2_000,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the round length.
    #[must_use]
    pub fn with_duration_secs(mut self, secs: u32) -> Self {
        self.game_duration_secs = secs;
        self
    }

    /// Set the freeze penalty.
    #[must_use]
    pub fn with_freeze_ms(mut self, ms: u64) -> Self {
        self.freeze_duration_ms = ms;
        self
    }

    /// Set the drop forgiveness margin.
    #[must_use]
    pub fn with_drop_padding(mut self, padding: f64) -> Self {
        self.drop_padding = padding;
        self
    }

    /// Check that the configuration describes a playable session.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game_duration_secs == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if self.pool_size == 0 {
            return Err(ConfigError::EmptyPool);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval("tick_interval_ms"));
        }
        if self.freeze_check_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval("freeze_check_interval_ms"));
        }
        if !self.drop_padding.is_finite() || self.drop_padding < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "drop_padding",
                value: self.drop_padding,
            });
        }
        if !self.max_pickup_rotation_deg.is_finite() || self.max_pickup_rotation_deg < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "max_pickup_rotation_deg",
                value: self.max_pickup_rotation_deg,
            });
        }
        if !self.pickup_scale.is_finite() || self.pickup_scale <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "pickup_scale",
                value: self.pickup_scale,
            });
        }
        Ok(())
    }
}
