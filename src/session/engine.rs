//! The session engine.
//!
//! Owns the session, both drag slots and the two cadences, and is the only
//! code that mutates any of them. Every call runs to completion before the
//! next one: two drags can be in flight at once, but their releases are
//! applied one after the other, so replacing a pool slot needs no locking.
//!
//! ## Driving the engine
//!
//! ```
//! use tile_duel::core::{SessionConfig, Timestamp};
//! use tile_duel::session::{SessionEngine, SessionEvent, SessionPhase};
//!
//! let mut engine = SessionEngine::new(SessionConfig::default().with_seed(7)).unwrap();
//! engine.start(Timestamp(0)).unwrap();
//!
//! // Host timer / frame callback
//! engine.advance(Timestamp(20_000));
//!
//! assert_eq!(engine.session().phase(), SessionPhase::Ended);
//! let events = engine.drain_events();
//! assert_eq!(events.first(), Some(&SessionEvent::GameStarted));
//! assert!(matches!(events.last(), Some(SessionEvent::GameEnded { .. })));
//! ```

use tracing::{debug, info, trace};

use super::cadence::Cadence;
use super::events::{DropOutcome, SessionEvent};
use super::snapshot::{DragView, SessionSnapshot};
use super::state::{entrance_delays, GameResult, GameSession, SessionPhase};
use crate::core::{GameRng, PlayerId, PlayerMap, SessionConfig, Timestamp};
use crate::drag::{ContactId, DragState, DragTracker, Easing, Tween};
use crate::error::{PickupRejected, SessionError};
use crate::tiles::{calculate_score, TileGenerator, TileId};
use crate::zones::{is_within_target, LayoutProvider, Point};

/// Authoritative state machine for one shared-screen game.
#[derive(Debug)]
pub struct SessionEngine {
    config: SessionConfig,
    session: GameSession,
    generator: TileGenerator,
    gesture_rng: GameRng,
    layout_rng: GameRng,
    drags: DragTracker,
    countdown: Cadence,
    freeze_check: Cadence,
    /// Adopted running session whose cadences wait for the first `advance`.
    arm_on_advance: bool,
    events: Vec<SessionEvent>,
}

impl SessionEngine {
    /// Build a session with a fresh pool and targets, not yet started.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        config.validate()?;
        let root = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut generator = TileGenerator::new(root.for_context("tiles"));
        let mut layout_rng = root.for_context("layout");
        let session = fresh_session(&config, &mut generator, &mut layout_rng);

        info!(
            "New session: seed={}, pool={}, duration={}s",
            root.seed(),
            config.pool_size,
            config.game_duration_secs
        );
        Ok(Self::assemble(config, session, generator, &root, layout_rng))
    }

    /// Adopt a session built by the host. New tiles are numbered after the
    /// highest id already in it.
    pub fn from_session(config: SessionConfig, session: GameSession) -> Result<Self, SessionError> {
        config.validate()?;
        let actual = session.tile_pool().len();
        if actual != config.pool_size {
            return Err(SessionError::PoolSizeMismatch {
                expected: config.pool_size,
                actual,
            });
        }

        let root = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut generator = TileGenerator::new(root.for_context("tiles"));
        if let Some(last) = session.max_tile_id() {
            generator = generator.resume_after(last);
        }
        let layout_rng = root.for_context("layout");

        debug!("Adopted session in phase {}", session.phase());
        let running = session.phase() == SessionPhase::Running;
        let mut engine = Self::assemble(config, session, generator, &root, layout_rng);
        engine.arm_on_advance = running;
        Ok(engine)
    }

    fn assemble(
        config: SessionConfig,
        session: GameSession,
        generator: TileGenerator,
        root: &GameRng,
        layout_rng: GameRng,
    ) -> Self {
        Self {
            countdown: Cadence::new(config.tick_interval_ms),
            freeze_check: Cadence::new(config.freeze_check_interval_ms),
            gesture_rng: root.for_context("gestures"),
            drags: DragTracker::new(),
            arm_on_advance: false,
            events: Vec::new(),
            config,
            session,
            generator,
            layout_rng,
        }
    }

    // === Read access ===

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// A player's live drag, if any.
    #[must_use]
    pub fn drag(&self, player: PlayerId) -> Option<&DragState> {
        self.drags.slot(player)
    }

    /// Outcome once the session has ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.session.result()
    }

    /// Session plus both drags, sampled at `now`.
    #[must_use]
    pub fn snapshot(&self, now: Timestamp) -> SessionSnapshot {
        SessionSnapshot {
            at: now,
            session: self.session.clone(),
            drags: PlayerMap::new(|player| {
                self.drags
                    .slot(player)
                    .and_then(|drag| DragView::sample(player, drag, &self.session, now))
            }),
        }
    }

    /// Take all events queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    // === Lifecycle ===

    /// `NotStarted → Running`. Tiles and scores are left as built.
    pub fn start(&mut self, now: Timestamp) -> Result<(), SessionError> {
        if self.session.phase() != SessionPhase::NotStarted {
            return Err(SessionError::InvalidTransition {
                action: "start",
                phase: self.session.phase(),
            });
        }
        self.begin_round(now);
        info!("Session started at {}", now);
        Ok(())
    }

    /// `Ended → Running` with a brand-new pool, targets, scores and clock.
    pub fn restart(&mut self, now: Timestamp) -> Result<(), SessionError> {
        if self.session.phase() != SessionPhase::Ended {
            return Err(SessionError::InvalidTransition {
                action: "restart",
                phase: self.session.phase(),
            });
        }
        self.session = fresh_session(&self.config, &mut self.generator, &mut self.layout_rng);
        self.drags.clear();
        self.begin_round(now);
        info!("Session restarted at {}", now);
        Ok(())
    }

    fn begin_round(&mut self, now: Timestamp) {
        self.arm_on_advance = false;
        self.session.set_phase(SessionPhase::Running);
        self.countdown.arm(now);
        self.freeze_check.arm(now);
        self.events.push(SessionEvent::GameStarted);
    }

    /// One countdown second. Ends the session when the clock hits zero.
    pub fn tick(&mut self) {
        if self.session.phase() != SessionPhase::Running {
            return;
        }
        let expired = self.session.count_down();
        trace!("Tick: {}s remaining", self.session.time_remaining());
        if expired {
            self.end();
        }
    }

    fn end(&mut self) {
        self.session.set_phase(SessionPhase::Ended);
        self.countdown.disarm();
        let result = GameResult::from_scores(
            self.session.player(PlayerId::Player1).score(),
            self.session.player(PlayerId::Player2).score(),
        );
        info!("Session ended: {:?}", result);
        self.events.push(SessionEvent::GameEnded { result });
    }

    /// Lift every freeze that has expired by `now`.
    pub fn check_freezes(&mut self, now: Timestamp) {
        for (player, state) in self.session.players_mut().iter_mut() {
            if state.thaw_if_expired(now) {
                debug!("{} unfrozen at {}", player, now);
            }
        }
    }

    /// Host heartbeat: run every countdown tick and freeze check due by
    /// `now`, and idle drags whose return glide is over.
    ///
    /// Call it before dispatching input stamped `now`. Countdown seconds
    /// missed since the last call are replayed one by one (at most the
    /// remaining duration); missed freeze checks collapse into one check at
    /// the latest cycle.
    pub fn advance(&mut self, now: Timestamp) {
        // An adopted running session has no start time; count from here.
        if std::mem::take(&mut self.arm_on_advance) {
            self.countdown.arm(now);
            self.freeze_check.arm(now);
        }
        while self.countdown.poll(now).is_some() {
            self.tick();
        }
        if let Some(due) = self.freeze_check.poll_latest(now) {
            self.check_freezes(due);
        }
        self.settle_returns(now);
    }

    fn settle_returns(&mut self, now: Timestamp) {
        for (player, drag) in self.drags.settle_returns(now) {
            trace!("{} back in the grid, {} idle", drag.tile_id, player);
        }
    }

    // === Input ===

    /// Press on a grid tile.
    ///
    /// Rejections fire no event; the reason is returned for hosts that want
    /// to log it.
    pub fn pointer_down(
        &mut self,
        now: Timestamp,
        position: Point,
        tile: TileId,
        contact: Option<ContactId>,
        layout: &impl LayoutProvider,
    ) -> Result<PlayerId, PickupRejected> {
        // A glide that ended by `now` frees its slot even between heartbeats
        self.settle_returns(now);
        let player = self.drags.route_press(position, contact, layout);
        let result = self.try_pickup(now, player, position, tile, contact);
        match &result {
            Ok(player) => debug!("{} picked up {}", player, tile),
            Err(reason) => trace!("Pickup of {} rejected: {}", tile, reason),
        }
        result
    }

    fn try_pickup(
        &mut self,
        now: Timestamp,
        player: PlayerId,
        position: Point,
        tile: TileId,
        contact: Option<ContactId>,
    ) -> Result<PlayerId, PickupRejected> {
        match self.session.phase() {
            SessionPhase::NotStarted => return Err(PickupRejected::NotStarted),
            SessionPhase::Ended => return Err(PickupRejected::GameEnded),
            SessionPhase::Running => {}
        }
        if self.session.player(player).is_frozen() {
            return Err(PickupRejected::PlayerFrozen(player));
        }
        self.drags.check_pickup(player, tile)?;
        if self.session.tile_pool().find(tile).is_none() {
            return Err(PickupRejected::UnknownTile(tile));
        }

        let max = self.config.max_pickup_rotation_deg;
        let rotation = if max > 0.0 {
            self.gesture_rng.gen_range_f64(-max..max)
        } else {
            0.0
        };
        let pickup = Tween::new(now, self.config.pickup_animation_ms, Easing::EaseOutCubic);
        let drag = DragState::new(tile, contact, position, rotation, self.config.pickup_scale, pickup);

        self.drags.begin(player, drag);
        self.events.push(SessionEvent::PickedUp { player, tile });
        Ok(player)
    }

    /// Pointer moved. Returns whether a drag followed it.
    pub fn pointer_move(
        &mut self,
        position: Point,
        contact: Option<ContactId>,
        layout: &impl LayoutProvider,
    ) -> bool {
        let player = self.drags.route(position, contact, layout);
        self.drags.move_to(player, contact, position)
    }

    /// Pointer lifted. Resolves the owner's drag against their target.
    ///
    /// Returns `None` when nothing was resolved: no matching drag, a drag
    /// already gliding home, or a session that has ended (the drag is
    /// dropped without scoring).
    pub fn pointer_up(
        &mut self,
        now: Timestamp,
        position: Point,
        contact: Option<ContactId>,
        layout: &impl LayoutProvider,
    ) -> Option<DropOutcome> {
        let player = self.drags.route(position, contact, layout);
        if let Some(contact) = contact {
            self.drags.unpin(contact);
        }

        let drag = self.drags.driven_by(player, contact)?;
        if drag.is_returning() {
            return None;
        }
        let tile = drag.tile_id;

        if self.session.phase() != SessionPhase::Running {
            self.drags.take(player);
            trace!("Release of {} after the session ended ignored", tile);
            return None;
        }

        let target = layout.target_rect(player);
        if !is_within_target(position, target, self.config.drop_padding) {
            let glide = Tween::new(now, self.config.return_animation_ms, Easing::EaseOutCubic);
            drag.begin_return(position, glide);
            debug!("{} missed the target with {}", player, tile);
            self.events.push(SessionEvent::Returned { player, tile });
            return Some(DropOutcome::Returning { player });
        }

        self.drags.take(player);
        Some(self.score_drop(now, player, tile))
    }

    fn score_drop(&mut self, now: Timestamp, player: PlayerId, tile: TileId) -> DropOutcome {
        let pool = self.session.tile_pool();
        let Some(slot) = pool.position_of(tile) else {
            // Only this drag's own release replaces its tile.
            return DropOutcome::Returning { player };
        };
        let points = pool
            .get(slot)
            .map_or(0, |dragged| calculate_score(dragged, self.session.player(player).target_tile()));

        let fresh = self.generator.generate_random_tile();
        self.session.pool_mut().replace(slot, fresh);

        if points > 0 {
            self.session.player_mut(player).add_score(points);
            debug!("{} scored {} with {} (slot {})", player, points, tile, slot);
            self.events.push(SessionEvent::CorrectMatch { player, tile, points });
            DropOutcome::Scored { player, slot, points }
        } else {
            let until = now.plus_millis(self.config.freeze_duration_ms);
            self.session.player_mut(player).freeze(until);
            debug!("{} frozen until {} after dropping {}", player, until, tile);
            self.events.push(SessionEvent::WrongMatch {
                player,
                tile,
                frozen_until: until,
            });
            DropOutcome::Frozen { player, slot, until }
        }
    }
}

fn fresh_session(config: &SessionConfig, generator: &mut TileGenerator, layout_rng: &mut GameRng) -> GameSession {
    let tiles = generator.generate_initial_tiles(config.pool_size);
    let player1_target = generator.generate_random_tile();
    let player2_target = generator.generate_random_tile();
    let mut session = GameSession::new(tiles, player1_target, player2_target, config.game_duration_secs);
    session.set_entrance_delays(entrance_delays(layout_rng, config.pool_size, config.entrance_window_ms));
    session
}
