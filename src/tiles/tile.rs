//! Tile definitions.
//!
//! A tile is a colour plus two shape fields: one drawn large, one drawn
//! small inside it. The two shapes are independent and may be equal.

use serde::{Deserialize, Serialize};

/// Unique tile identifier, minted by a `TileGenerator`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u64);

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tile-{}", self.0)
    }
}

/// Tile colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Orange,
    Pink,
    Green,
    Blue,
    /// Background colour of the board. Never generated for a tile.
    White,
}

impl Color {
    /// Colours a generated tile can have.
    pub const PLAYABLE: [Color; 5] = [Color::Red, Color::Orange, Color::Pink, Color::Green, Color::Blue];

    /// Hex swatch used by renderers.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Color::Red => "#FF3515",
            Color::Orange => "#FDAB23",
            Color::Pink => "#FFAEC4",
            Color::Green => "#00BF7E",
            Color::Blue => "#1816D8",
            Color::White => "#FFFFFF",
        }
    }
}

/// Tile shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    Rect,
    Hex,
    Diamond,
}

impl Shape {
    /// All shapes.
    pub const ALL: [Shape; 4] = [Shape::Circle, Shape::Rect, Shape::Hex, Shape::Diamond];
}

/// A game piece.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub color: Color,
    pub big_shape: Shape,
    pub small_shape: Shape,
}

impl Tile {
    /// Create a tile.
    #[must_use]
    pub const fn new(id: TileId, color: Color, big_shape: Shape, small_shape: Shape) -> Self {
        Self {
            id,
            color,
            big_shape,
            small_shape,
        }
    }
}
