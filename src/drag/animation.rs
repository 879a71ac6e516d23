//! Time-based animation curves.
//!
//! Animations are not stepped by the engine. A drag records when an
//! animation started, how long it runs and its endpoints; a renderer samples
//! the value for whatever frame time it is drawing. Frame rate therefore
//! never affects engine state.

use serde::{Deserialize, Serialize};

use crate::core::Timestamp;

/// Easing curves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// `1 - (1 - t)^3`: fast start, gentle landing.
    EaseOutCubic,
}

impl Easing {
    /// Map linear progress in `[0, 1]` onto the curve.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Linear progress of an animation at `now`, clamped to `[0, 1]`.
///
/// A zero-length animation is complete immediately.
#[must_use]
pub fn progress(start: Timestamp, duration_ms: u64, now: Timestamp) -> f64 {
    if duration_ms == 0 {
        return 1.0;
    }
    (now.millis_since(start) as f64 / duration_ms as f64).min(1.0)
}

/// Value of an animation from `from` to `to` at `now`.
#[must_use]
pub fn interpolate(
    start: Timestamp,
    duration_ms: u64,
    from: f64,
    to: f64,
    easing: Easing,
    now: Timestamp,
) -> f64 {
    from + (to - from) * easing.apply(progress(start, duration_ms, now))
}

/// Start time, duration and curve of one animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tween {
    pub start: Timestamp,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    #[must_use]
    pub const fn new(start: Timestamp, duration_ms: u64, easing: Easing) -> Self {
        Self {
            start,
            duration_ms,
            easing,
        }
    }

    /// Eased progress at `now`.
    #[must_use]
    pub fn eased(&self, now: Timestamp) -> f64 {
        self.easing.apply(progress(self.start, self.duration_ms, now))
    }

    /// Sample a scalar animated from `from` to `to`.
    #[must_use]
    pub fn sample(&self, from: f64, to: f64, now: Timestamp) -> f64 {
        interpolate(self.start, self.duration_ms, from, to, self.easing, now)
    }

    /// When the animation reaches its end value.
    #[must_use]
    pub fn end(&self) -> Timestamp {
        self.start.plus_millis(self.duration_ms)
    }

    #[must_use]
    pub fn is_finished(&self, now: Timestamp) -> bool {
        now >= self.end()
    }
}
