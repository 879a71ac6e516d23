//! Random tile generation.

use super::tile::{Color, Shape, Tile, TileId};
use crate::core::GameRng;

/// Mints tiles with unique ids from a seeded stream.
///
/// The id counter belongs to the generator, so two engines (or two tests)
/// never share numbering. It only moves forward: restarting a session keeps
/// counting, which keeps ids unique for the generator's whole lifetime.
#[derive(Clone, Debug)]
pub struct TileGenerator {
    rng: GameRng,
    next_id: u64,
}

impl TileGenerator {
    /// Create a generator drawing from `rng`, starting at `tile-0`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng, next_id: 0 }
    }

    /// Continue numbering after `last`, for sessions built outside the generator.
    #[must_use]
    pub fn resume_after(mut self, last: TileId) -> Self {
        self.next_id = self.next_id.max(last.0.saturating_add(1));
        self
    }

    /// The id the next tile will receive.
    #[must_use]
    pub fn peek_next_id(&self) -> TileId {
        TileId(self.next_id)
    }

    /// Generate one tile with a fresh id and uniformly drawn fields.
    pub fn generate_random_tile(&mut self) -> Tile {
        let id = TileId(self.next_id);
        self.next_id += 1;

        let color = self.rng.choose(&Color::PLAYABLE).copied().unwrap_or(Color::Red);
        let big_shape = self.rng.choose(&Shape::ALL).copied().unwrap_or(Shape::Circle);
        let small_shape = self.rng.choose(&Shape::ALL).copied().unwrap_or(Shape::Circle);

        Tile::new(id, color, big_shape, small_shape)
    }

    /// Generate `count` tiles in generation order.
    pub fn generate_initial_tiles(&mut self, count: usize) -> Vec<Tile> {
        (0..count).map(|_| self.generate_random_tile()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_sequential() {
        let mut gen = TileGenerator::new(GameRng::new(1));
        let tiles = gen.generate_initial_tiles(3);

        let ids: Vec<_> = tiles.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TileId(0), TileId(1), TileId(2)]);
        assert_eq!(gen.peek_next_id(), TileId(3));
    }

    #[test]
    fn test_ids_unique_across_batches() {
        let mut gen = TileGenerator::new(GameRng::new(1));
        let mut seen = HashSet::new();

        for _ in 0..5 {
            for tile in gen.generate_initial_tiles(20) {
                assert!(seen.insert(tile.id), "duplicate id {}", tile.id);
            }
        }
    }

    #[test]
    fn test_generated_fields_in_domain() {
        let mut gen = TileGenerator::new(GameRng::new(9));

        for tile in gen.generate_initial_tiles(500) {
            assert!(Color::PLAYABLE.contains(&tile.color));
            assert!(Shape::ALL.contains(&tile.big_shape));
            assert!(Shape::ALL.contains(&tile.small_shape));
        }
    }

    #[test]
    fn test_all_values_appear() {
        let mut gen = TileGenerator::new(GameRng::new(5));
        let tiles = gen.generate_initial_tiles(1_000);

        let colors: HashSet<_> = tiles.iter().map(|t| t.color).collect();
        let bigs: HashSet<_> = tiles.iter().map(|t| t.big_shape).collect();
        let smalls: HashSet<_> = tiles.iter().map(|t| t.small_shape).collect();

        assert_eq!(colors.len(), 5);
        assert_eq!(bigs.len(), 4);
        assert_eq!(smalls.len(), 4);
        // Shapes are independent, so some tiles repeat a shape.
        assert!(tiles.iter().any(|t| t.big_shape == t.small_shape));
    }

    #[test]
    fn test_same_seed_same_tiles() {
        let a = TileGenerator::new(GameRng::new(77)).generate_initial_tiles(20);
        let b = TileGenerator::new(GameRng::new(77)).generate_initial_tiles(20);
        assert_eq!(a, b);
    }

    #[test]
    fn test_resume_after() {
        let mut gen = TileGenerator::new(GameRng::new(1)).resume_after(TileId(41));
        assert_eq!(gen.generate_random_tile().id, TileId(42));

        // Never moves the counter backwards
        let gen = gen.resume_after(TileId(3));
        assert_eq!(gen.peek_next_id(), TileId(43));
    }
}
