//! Error types.
//!
//! Gameplay rejections (a frozen player grabbing a tile, a second pickup)
//! are policy outcomes, not failures: they come back as `PickupRejected`
//! values and never fire a presentation event. `SessionError` covers host
//! misuse of the session lifecycle.

use crate::core::PlayerId;
use crate::session::SessionPhase;
use crate::tiles::TileId;

/// Invalid `SessionConfig`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("game duration must be at least one second")]
    ZeroDuration,

    #[error("tile pool must hold at least one tile")]
    EmptyPool,

    #[error("{0} must be greater than zero")]
    ZeroInterval(&'static str),

    #[error("{field} has invalid value {value}")]
    InvalidValue { field: &'static str, value: f64 },
}

/// Lifecycle misuse of a `SessionEngine`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("cannot {action} a session that is {phase}")]
    InvalidTransition {
        action: &'static str,
        phase: SessionPhase,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("session holds {actual} tiles but the configured pool size is {expected}")]
    PoolSizeMismatch { expected: usize, actual: usize },
}

/// Why a pickup was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PickupRejected {
    #[error("the session has not started")]
    NotStarted,

    #[error("the session has ended")]
    GameEnded,

    #[error("{0} is frozen")]
    PlayerFrozen(PlayerId),

    #[error("{0} is already dragging a tile")]
    AlreadyDragging(PlayerId),

    #[error("{tile} is held by {holder}")]
    TileContested { tile: TileId, holder: PlayerId },

    #[error("{0} is not in the tile pool")]
    UnknownTile(TileId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SessionError::InvalidTransition {
            action: "restart",
            phase: SessionPhase::Running,
        };
        assert_eq!(err.to_string(), "cannot restart a session that is running");

        let rejected = PickupRejected::TileContested {
            tile: TileId(7),
            holder: PlayerId::Player2,
        };
        assert_eq!(rejected.to_string(), "tile-7 is held by Player 2");

        let config: SessionError = ConfigError::EmptyPool.into();
        assert_eq!(
            config.to_string(),
            "invalid configuration: tile pool must hold at least one tile"
        );
    }
}
