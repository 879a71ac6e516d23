//! Drag gestures: per-player state machines over shared pointer input.
//!
//! ## Lifecycle
//!
//! `Idle → Dragging → {Scoring, Returning} → Idle`. Scoring is immediate
//! on release; a missed drop keeps the slot busy until its return glide
//! finishes.

pub mod animation;
pub mod state;
pub mod tracker;

pub use animation::{interpolate, Easing, Tween};
pub use state::{ContactId, DragPhase, DragState};
pub use tracker::DragTracker;
