//! Presentation events.
//!
//! The engine queues one event per audible/visible moment. Hosts drain the
//! queue after each call and map events onto sounds and animations; the
//! engine never waits on them.

use serde::{Deserialize, Serialize};

use super::state::GameResult;
use crate::core::{PlayerId, Timestamp};
use crate::tiles::TileId;

/// Something the presentation layer should react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The round began (first start or restart).
    GameStarted,

    /// A tile was lifted from the grid.
    PickedUp { player: PlayerId, tile: TileId },

    /// A drop on the target scored.
    CorrectMatch { player: PlayerId, tile: TileId, points: u32 },

    /// A drop on the target scored nothing and froze the player.
    WrongMatch {
        player: PlayerId,
        tile: TileId,
        frozen_until: Timestamp,
    },

    /// A drop missed the target; the tile glides home.
    Returned { player: PlayerId, tile: TileId },

    /// The countdown ran out.
    GameEnded { result: GameResult },
}

impl SessionEvent {
    /// Player the event concerns, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match *self {
            SessionEvent::PickedUp { player, .. }
            | SessionEvent::CorrectMatch { player, .. }
            | SessionEvent::WrongMatch { player, .. }
            | SessionEvent::Returned { player, .. } => Some(player),
            SessionEvent::GameStarted | SessionEvent::GameEnded { .. } => None,
        }
    }
}

/// How a release was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DropOutcome {
    /// Points were added; the tile's slot was refilled.
    Scored { player: PlayerId, slot: usize, points: u32 },

    /// No field matched; the slot was refilled and the player frozen.
    Frozen {
        player: PlayerId,
        slot: usize,
        until: Timestamp,
    },

    /// Missed the target; nothing changed and the tile is gliding back.
    Returning { player: PlayerId },
}
