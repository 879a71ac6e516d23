//! Scoring a dropped tile against a target.
//!
//! Colour, big shape and small shape are compared positionally (a big
//! circle never matches a small circle). The reward curve is steep on
//! purpose:
//!
//! | matching fields | points |
//! |-----------------|--------|
//! | 0               | 0      |
//! | 1               | 1      |
//! | 2               | 3      |
//! | 3               | 5      |

use super::tile::Tile;

/// Points for a full match.
pub const MAX_SCORE: u32 = 5;

/// Number of fields (out of three) on which the tiles agree.
#[must_use]
pub fn match_count(dragged: &Tile, target: &Tile) -> u32 {
    u32::from(dragged.color == target.color)
        + u32::from(dragged.big_shape == target.big_shape)
        + u32::from(dragged.small_shape == target.small_shape)
}

/// Points earned by dropping `dragged` on `target`.
#[must_use]
pub fn calculate_score(dragged: &Tile, target: &Tile) -> u32 {
    match match_count(dragged, target) {
        0 => 0,
        1 => 1,
        2 => 3,
        _ => MAX_SCORE,
    }
}

/// Whether the tiles agree on every field. Ids are ignored.
#[must_use]
pub fn tiles_match(a: &Tile, b: &Tile) -> bool {
    match_count(a, b) == 3
}
