//! A single in-flight drag.

use serde::{Deserialize, Serialize};

use super::animation::Tween;
use crate::core::Timestamp;
use crate::tiles::TileId;
use crate::zones::Point;

/// Host identifier of one physical touch point.
///
/// Mouse input carries no contact id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactId(pub u64);

impl std::fmt::Display for ContactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "contact-{}", self.0)
    }
}

/// Where a drag is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum DragPhase {
    /// Following the pointer.
    Active,
    /// Missed drop, gliding from `from` back to the pickup point.
    Returning { from: Point, glide: Tween },
}

/// One player's drag of one pool tile.
///
/// Refers to the tile by id only; the pool keeps ownership.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragState {
    pub tile_id: TileId,
    /// Contact that picked the tile up, or `None` for mouse input.
    pub contact: Option<ContactId>,
    pub start_position: Point,
    pub current_position: Point,
    /// Tilt the pickup animation settles on.
    pub rotation_deg: f64,
    /// Scale the pickup animation settles on.
    pub scale: f64,
    pub pickup: Tween,
    pub phase: DragPhase,
}

impl DragState {
    /// A drag picked up at `position`, animating towards `rotation_deg`/`scale`.
    #[must_use]
    pub fn new(
        tile_id: TileId,
        contact: Option<ContactId>,
        position: Point,
        rotation_deg: f64,
        scale: f64,
        pickup: Tween,
    ) -> Self {
        Self {
            tile_id,
            contact,
            start_position: position,
            current_position: position,
            rotation_deg,
            scale,
            pickup,
            phase: DragPhase::Active,
        }
    }

    #[must_use]
    pub fn is_returning(&self) -> bool {
        matches!(self.phase, DragPhase::Returning { .. })
    }

    /// Whether an event from `contact` belongs to this drag.
    ///
    /// A touch drag only answers to its own contact; a mouse drag ignores
    /// touch contacts.
    #[must_use]
    pub fn accepts(&self, contact: Option<ContactId>) -> bool {
        self.contact == contact
    }

    /// Follow the pointer. Ignored while returning.
    pub fn move_to(&mut self, position: Point) -> bool {
        if self.is_returning() {
            return false;
        }
        self.current_position = position;
        true
    }

    /// Start gliding back from `from` to the pickup point.
    pub fn begin_return(&mut self, from: Point, glide: Tween) {
        self.current_position = from;
        self.phase = DragPhase::Returning { from, glide };
    }

    /// Whether the return glide has reached the pickup point.
    #[must_use]
    pub fn return_finished(&self, now: Timestamp) -> bool {
        match self.phase {
            DragPhase::Returning { glide, .. } => glide.is_finished(now),
            DragPhase::Active => false,
        }
    }

    /// Tilt at `now`, animating from 0 to the pickup target.
    #[must_use]
    pub fn rotation_at(&self, now: Timestamp) -> f64 {
        self.pickup.sample(0.0, self.rotation_deg, now)
    }

    /// Scale at `now`, animating from 1 to the pickup target.
    #[must_use]
    pub fn scale_at(&self, now: Timestamp) -> f64 {
        self.pickup.sample(1.0, self.scale, now)
    }

    /// Rendered position at `now`.
    #[must_use]
    pub fn position_at(&self, now: Timestamp) -> Point {
        match self.phase {
            DragPhase::Active => self.current_position,
            DragPhase::Returning { from, glide } => from.lerp(self.start_position, glide.eased(now)),
        }
    }
}
