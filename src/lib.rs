//! # tile-duel
//!
//! Session engine for a real-time, two-player tile matching game played on
//! one shared screen.
//!
//! The top half of the screen belongs to player 1, the bottom half to
//! player 2. Both drag tiles out of a shared 20-slot grid onto their own
//! target tile at the same time. Matching fields score (1, 3 or 5 points);
//! a drop matching nothing freezes the player for three seconds.
//!
//! ## Design Principles
//!
//! 1. **Host-driven**: The engine reads no clock and draws nothing. Hosts
//!    pass timestamps and geometry in, and get events and snapshots out.
//!
//! 2. **Deterministic**: A seeded ChaCha8 stream generates every tile, so
//!    equal seeds and inputs replay identical sessions.
//!
//! 3. **Concurrent gestures, serialized state**: Both players can hold a
//!    tile at once; every mutation still runs through `&mut SessionEngine`.
//!
//! ## Modules
//!
//! - `core`: Player ids, per-player maps, time, RNG, configuration
//! - `tiles`: Tiles, generation, the slot-stable pool, scoring
//! - `zones`: Screen-half ownership and drop-target hit testing
//! - `drag`: Per-player drag state machines and animation curves
//! - `session`: The engine, its state, events and snapshots
//! - `error`: Configuration, lifecycle and pickup errors

pub mod core;
pub mod drag;
pub mod error;
pub mod session;
pub mod tiles;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{GameRng, PlayerId, PlayerMap, SessionConfig, Timestamp};

pub use crate::tiles::{calculate_score, Color, Shape, Tile, TileGenerator, TileId, TilePool};

pub use crate::zones::{is_within_target, resolve_owner, LayoutProvider, Point, Rect, StaticLayout};

pub use crate::drag::{ContactId, DragState, DragTracker, Easing, Tween};

pub use crate::session::{
    DropOutcome, GameResult, GameSession, PlayerState, SessionEngine, SessionEvent, SessionPhase,
    SessionSnapshot,
};

pub use crate::error::{ConfigError, PickupRejected, SessionError};
