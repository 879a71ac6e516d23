//! Authoritative session data: pool, players, clock and phase.
//!
//! Only the engine mutates these; hosts see them through snapshots.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, PlayerId, PlayerMap, Timestamp};
use crate::tiles::{Tile, TileId, TilePool};

/// Session lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    NotStarted,
    Running,
    Ended,
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionPhase::NotStarted => "not started",
            SessionPhase::Running => "running",
            SessionPhase::Ended => "ended",
        };
        f.write_str(name)
    }
}

/// Result of a finished session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    /// Strictly higher score.
    Winner(PlayerId),
    /// Equal scores.
    Tie,
}

impl GameResult {
    /// Compare final scores.
    #[must_use]
    pub fn from_scores(player1: u32, player2: u32) -> Self {
        match player1.cmp(&player2) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::Player1),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::Player2),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        *self == GameResult::Winner(player)
    }
}

/// One player's score, target and freeze.
///
/// A player is frozen exactly while `frozen_until` is set; the two can't
/// drift apart because they are the same field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    id: PlayerId,
    score: u32,
    target_tile: Tile,
    frozen_until: Option<Timestamp>,
}

impl PlayerState {
    /// Unfrozen, scoreless player aiming at `target_tile`.
    #[must_use]
    pub fn new(id: PlayerId, target_tile: Tile) -> Self {
        Self {
            id,
            score: 0,
            target_tile,
            frozen_until: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn target_tile(&self) -> &Tile {
        &self.target_tile
    }

    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen_until.is_some()
    }

    #[must_use]
    pub fn frozen_until(&self) -> Option<Timestamp> {
        self.frozen_until
    }

    pub(crate) fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub(crate) fn freeze(&mut self, until: Timestamp) {
        self.frozen_until = Some(until);
    }

    /// Lift an expired freeze. Returns true if the player thawed.
    pub(crate) fn thaw_if_expired(&mut self, now: Timestamp) -> bool {
        match self.frozen_until {
            Some(until) if now >= until => {
                self.frozen_until = None;
                true
            }
            _ => false,
        }
    }
}

/// The full game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    tile_pool: TilePool,
    players: PlayerMap<PlayerState>,
    time_remaining: u32,
    phase: SessionPhase,
    entrance_delays: Vec<u32>,
}

impl GameSession {
    /// A not-yet-started session over `tiles` with the given targets.
    #[must_use]
    pub fn new(tiles: Vec<Tile>, player1_target: Tile, player2_target: Tile, duration_secs: u32) -> Self {
        let entrance_delays = vec![0; tiles.len()];
        Self {
            tile_pool: TilePool::new(tiles),
            players: PlayerMap::from_pair(
                PlayerState::new(PlayerId::Player1, player1_target),
                PlayerState::new(PlayerId::Player2, player2_target),
            ),
            time_remaining: duration_secs,
            phase: SessionPhase::NotStarted,
            entrance_delays,
        }
    }

    #[must_use]
    pub fn tile_pool(&self) -> &TilePool {
        &self.tile_pool
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<PlayerState> {
        &self.players
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Whether the round has begun (and possibly finished).
    #[must_use]
    pub fn started(&self) -> bool {
        self.phase != SessionPhase::NotStarted
    }

    #[must_use]
    pub fn ended(&self) -> bool {
        self.phase == SessionPhase::Ended
    }

    /// Per-slot reveal delays for the grid's entrance animation, in ms.
    #[must_use]
    pub fn entrance_delays(&self) -> &[u32] {
        &self.entrance_delays
    }

    /// Outcome, once the session has ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.ended().then(|| {
            GameResult::from_scores(
                self.players[PlayerId::Player1].score(),
                self.players[PlayerId::Player2].score(),
            )
        })
    }

    /// Highest tile id anywhere in the session.
    #[must_use]
    pub fn max_tile_id(&self) -> Option<TileId> {
        let targets = self.players.iter().map(|(_, p)| p.target_tile.id);
        self.tile_pool.max_id().into_iter().chain(targets).max()
    }

    pub(crate) fn set_entrance_delays(&mut self, delays: Vec<u32>) {
        self.entrance_delays = delays;
    }

    pub(crate) fn set_phase(&mut self, phase: SessionPhase) {
        self.phase = phase;
    }

    pub(crate) fn player_mut(&mut self, player: PlayerId) -> &mut PlayerState {
        &mut self.players[player]
    }

    pub(crate) fn players_mut(&mut self) -> &mut PlayerMap<PlayerState> {
        &mut self.players
    }

    pub(crate) fn pool_mut(&mut self) -> &mut TilePool {
        &mut self.tile_pool
    }

    /// Count one second down. Returns true when the clock reaches zero.
    pub(crate) fn count_down(&mut self) -> bool {
        self.time_remaining = self.time_remaining.saturating_sub(1);
        self.time_remaining == 0
    }
}

/// Reveal delays for `count` grid slots: slot order is shuffled, then the
/// n-th revealed slot waits `n / count * window_ms`.
#[must_use]
pub fn entrance_delays(rng: &mut GameRng, count: usize, window_ms: u32) -> Vec<u32> {
    let mut order: Vec<usize> = (0..count).collect();
    rng.shuffle(&mut order);
    order
        .into_iter()
        .map(|n| (n as u64 * u64::from(window_ms) / count.max(1) as u64) as u32)
        .collect()
}
