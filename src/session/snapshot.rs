//! Read-only views for renderers.

use serde::{Deserialize, Serialize};

use super::state::GameSession;
use crate::core::{PlayerId, PlayerMap, Timestamp};
use crate::drag::DragState;
use crate::tiles::Tile;
use crate::zones::Point;

/// A drag as a renderer draws it at one instant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragView {
    pub player: PlayerId,
    pub tile: Tile,
    /// Grid slot the tile came from.
    pub slot: usize,
    pub position: Point,
    pub start_position: Point,
    pub rotation_deg: f64,
    pub scale: f64,
    pub returning: bool,
}

impl DragView {
    /// Sample `drag` at `now`. `None` if its tile is no longer in the pool.
    #[must_use]
    pub fn sample(player: PlayerId, drag: &DragState, session: &GameSession, now: Timestamp) -> Option<Self> {
        let pool = session.tile_pool();
        let slot = pool.position_of(drag.tile_id)?;
        let tile = pool.get(slot)?.clone();
        Some(Self {
            player,
            tile,
            slot,
            position: drag.position_at(now),
            start_position: drag.start_position,
            rotation_deg: drag.rotation_at(now),
            scale: drag.scale_at(now),
            returning: drag.is_returning(),
        })
    }
}

/// Everything a renderer needs for one frame.
///
/// Cloning the session is cheap: the pool is a persistent vector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub at: Timestamp,
    pub session: GameSession,
    pub drags: PlayerMap<Option<DragView>>,
}

impl SessionSnapshot {
    /// Whether a grid slot should be drawn empty because its tile is
    /// floating under a pointer. A returning tile shows in the grid again.
    #[must_use]
    pub fn is_lifted(&self, slot: usize) -> bool {
        self.drags
            .iter()
            .any(|(_, view)| view.as_ref().is_some_and(|v| v.slot == slot && !v.returning))
    }
}
