//! Tiles: definitions, generation, the shared pool and scoring.

pub mod generator;
pub mod pool;
pub mod scoring;
pub mod tile;

pub use generator::TileGenerator;
pub use pool::TilePool;
pub use scoring::{calculate_score, match_count, tiles_match, MAX_SCORE};
pub use tile::{Color, Shape, Tile, TileId};
