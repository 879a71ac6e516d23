//! The shared tile grid.
//!
//! Slots are fixed: a consumed tile is swapped for a new one at the same
//! index, so the grid never reflows during a session. Backed by
//! `im::Vector` so snapshots of the pool are O(1) clones.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::tile::{Tile, TileId};

/// Fixed-length, slot-stable tile grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePool {
    slots: Vector<Tile>,
}

impl TilePool {
    /// Create a pool from tiles in slot order.
    #[must_use]
    pub fn new(tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self {
            slots: tiles.into_iter().collect(),
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the pool has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Tile in a slot.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&Tile> {
        self.slots.get(slot)
    }

    /// Slot currently holding `id`.
    #[must_use]
    pub fn position_of(&self, id: TileId) -> Option<usize> {
        self.slots.iter().position(|t| t.id == id)
    }

    /// Tile with the given id.
    #[must_use]
    pub fn find(&self, id: TileId) -> Option<&Tile> {
        self.slots.iter().find(|t| t.id == id)
    }

    /// Put `tile` into `slot`, returning the tile it displaced.
    ///
    /// Returns `None` (and leaves the pool untouched) if the slot is out of range.
    pub fn replace(&mut self, slot: usize, tile: Tile) -> Option<Tile> {
        if slot >= self.slots.len() {
            return None;
        }
        Some(self.slots.set(slot, tile))
    }

    /// Iterate tiles in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.slots.iter()
    }

    /// Highest tile id in the pool.
    #[must_use]
    pub fn max_id(&self) -> Option<TileId> {
        self.slots.iter().map(|t| t.id).max()
    }
}
