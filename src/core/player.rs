//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! The game has exactly two seats: `Player1` owns the top half of the
//! shared screen, `Player2` the bottom half.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId`. Every per-player value in
//! the engine (player state, drag slots, layout rects) lives in one of these
//! instead of being looked up by name.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the shared screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerId {
    /// Top half of the play surface.
    Player1,
    /// Bottom half of the play surface.
    Player2,
}

impl PlayerId {
    /// Both players, in seat order.
    pub const ALL: [PlayerId; 2] = [PlayerId::Player1, PlayerId::Player2];

    /// Get the 0-based slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::Player1 => 0,
            PlayerId::Player2 => 1,
        }
    }

    /// The opposing player.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player1,
        }
    }

    /// Iterate over both player IDs.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use tile_duel::core::{PlayerId, PlayerMap};
///
/// let mut score: PlayerMap<u32> = PlayerMap::with_value(0);
/// score[PlayerId::Player2] += 3;
///
/// assert_eq!(score[PlayerId::Player1], 0);
/// assert_eq!(score[PlayerId::Player2], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    slots: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory is called once per player, in seat order.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            slots: PlayerId::ALL.map(&mut factory),
        }
    }

    /// Create a new PlayerMap from explicit per-player values.
    pub fn from_pair(player1: T, player2: T) -> Self {
        Self {
            slots: [player1, player2],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            slots: [value.clone(), value],
        }
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.slots[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.slots[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.slots.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::ALL.into_iter().zip(self.slots.iter_mut())
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
