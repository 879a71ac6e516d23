//! Core engine types: players, time, RNG, configuration.
//!
//! Everything else in the crate builds on these.

pub mod config;
pub mod player;
pub mod rng;
pub mod time;

pub use config::SessionConfig;
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use time::Timestamp;
