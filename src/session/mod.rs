//! The session engine and the state it owns.
//!
//! - `state`: pool, players, clock, phase and final result
//! - `engine`: lifecycle, timers, input handling and scoring
//! - `events`: presentation events and drop outcomes
//! - `snapshot`: read-only per-frame views
//! - `cadence`: host-driven fixed-interval schedules

pub mod cadence;
pub mod engine;
pub mod events;
pub mod snapshot;
pub mod state;

pub use cadence::Cadence;
pub use engine::SessionEngine;
pub use events::{DropOutcome, SessionEvent};
pub use snapshot::{DragView, SessionSnapshot};
pub use state::{entrance_delays, GameResult, GameSession, PlayerState, SessionPhase};
