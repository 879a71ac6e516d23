//! Mapping raw input to players and drop targets.
//!
//! The play surface is split at its vertical midpoint: the top half belongs
//! to `Player1`, the bottom half to `Player2`. Geometry comes from the host
//! through `LayoutProvider` and is re-read on every event, since the layout
//! can change between events.

use serde::{Deserialize, Serialize};

use super::geometry::{Point, Rect};
use crate::core::{PlayerId, PlayerMap};

/// Default forgiveness margin around a target tile.
pub const DEFAULT_DROP_PADDING: f64 = 20.0;

/// Host-side geometry queries.
pub trait LayoutProvider {
    /// Bounding rect of the whole play surface, if laid out.
    fn surface_rect(&self) -> Option<Rect>;

    /// Bounding rect of a player's target tile, if laid out.
    fn target_rect(&self, player: PlayerId) -> Option<Rect>;
}

/// A fixed layout, for hosts whose geometry is known up front.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticLayout {
    pub surface: Option<Rect>,
    pub targets: PlayerMap<Option<Rect>>,
}

impl StaticLayout {
    #[must_use]
    pub fn new(surface: Rect, player1_target: Rect, player2_target: Rect) -> Self {
        Self {
            surface: Some(surface),
            targets: PlayerMap::new(|p| match p {
                PlayerId::Player1 => Some(player1_target),
                PlayerId::Player2 => Some(player2_target),
            }),
        }
    }
}

impl LayoutProvider for StaticLayout {
    fn surface_rect(&self) -> Option<Rect> {
        self.surface
    }

    fn target_rect(&self, player: PlayerId) -> Option<Rect> {
        self.targets[player]
    }
}

/// Owner of an input at height `y` on a container starting at
/// `container_top` with `container_height`.
///
/// Strictly above the midpoint is `Player1`; the midpoint itself and below
/// is `Player2`.
#[must_use]
pub fn resolve_owner(y: f64, container_top: f64, container_height: f64) -> PlayerId {
    let midpoint = container_top + container_height / 2.0;
    if y < midpoint {
        PlayerId::Player1
    } else {
        PlayerId::Player2
    }
}

/// Owner of an input at `point` given the host's layout.
///
/// Falls back to `Player1` while the surface is not laid out.
#[must_use]
pub fn owner_at(point: Point, layout: &impl LayoutProvider) -> PlayerId {
    match layout.surface_rect() {
        Some(surface) => resolve_owner(point.y, surface.top, surface.height),
        None => PlayerId::Player1,
    }
}

/// Whether `point` lands on the target rect grown by `padding`.
///
/// A missing or empty rect never accepts a drop.
#[must_use]
pub fn is_within_target(point: Point, target: Option<Rect>, padding: f64) -> bool {
    match target {
        Some(rect) if !rect.is_empty() => rect.expand(padding).contains(point),
        _ => false,
    }
}
