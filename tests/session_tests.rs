//! Session lifecycle tests.
//!
//! These tests verify the countdown, freeze expiry, end-of-game handling
//! and restart.

use std::collections::HashSet;

use tile_duel::core::{PlayerId, SessionConfig, Timestamp};
use tile_duel::error::{PickupRejected, SessionError};
use tile_duel::session::{DropOutcome, GameResult, GameSession, SessionEngine, SessionEvent, SessionPhase};
use tile_duel::tiles::{Color, Shape, Tile, TileId};
use tile_duel::zones::{Point, Rect, StaticLayout};

const P1_DROP: Point = Point::new(200.0, 70.0);
const P2_DROP: Point = Point::new(200.0, 730.0);
const P1_GRID: Point = Point::new(200.0, 300.0);
const P2_GRID: Point = Point::new(200.0, 500.0);

fn layout() -> StaticLayout {
    StaticLayout::new(
        Rect::new(0.0, 0.0, 400.0, 800.0),
        Rect::new(150.0, 20.0, 100.0, 100.0),
        Rect::new(150.0, 680.0, 100.0, 100.0),
    )
}

fn tile(id: u64, color: Color, big: Shape, small: Shape) -> Tile {
    Tile::new(TileId(id), color, big, small)
}

/// Slot 0 fully matches player 1's target, slot 1 matches nothing of
/// player 2's target; every other slot scores 0 for both.
fn scripted_engine() -> SessionEngine {
    let mut tiles: Vec<Tile> = (0..20)
        .map(|i| tile(i, Color::Pink, Shape::Diamond, Shape::Rect))
        .collect();
    tiles[0] = tile(0, Color::Red, Shape::Circle, Shape::Hex);
    tiles[1] = tile(1, Color::Green, Shape::Hex, Shape::Circle);

    let session = GameSession::new(
        tiles,
        tile(100, Color::Red, Shape::Circle, Shape::Hex),
        tile(101, Color::Blue, Shape::Rect, Shape::Diamond),
        20,
    );
    let mut engine = SessionEngine::from_session(SessionConfig::default().with_seed(3), session).unwrap();
    engine.start(Timestamp(0)).unwrap();
    engine.drain_events();
    engine
}

fn count_ended(events: &[SessionEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, SessionEvent::GameEnded { .. }))
        .count()
}

/// Test the countdown reaches zero exactly at the configured tick.
#[test]
fn test_countdown_ends_after_duration() {
    let mut engine = SessionEngine::new(SessionConfig::default().with_seed(1)).unwrap();
    engine.start(Timestamp(500)).unwrap();

    for second in 1..20u64 {
        engine.advance(Timestamp(500 + second * 1_000));
        assert_eq!(engine.session().time_remaining(), 20 - second as u32);
        assert_eq!(engine.session().phase(), SessionPhase::Running);
    }

    engine.advance(Timestamp(20_499));
    assert_eq!(engine.session().time_remaining(), 1);

    engine.advance(Timestamp(20_500));
    assert_eq!(engine.session().time_remaining(), 0);
    assert!(engine.session().ended());

    // Terminal: no more ticks, no second end event
    engine.advance(Timestamp(60_000));
    engine.tick();
    assert_eq!(engine.session().time_remaining(), 0);
    assert_eq!(count_ended(&engine.drain_events()), 1);
}

/// Test a custom duration with manual ticks.
#[test]
fn test_manual_ticks_custom_duration() {
    let config = SessionConfig::default().with_seed(1).with_duration_secs(5);
    let mut engine = SessionEngine::new(config).unwrap();

    // Ticks before start do nothing
    engine.tick();
    assert_eq!(engine.session().time_remaining(), 5);

    engine.start(Timestamp(0)).unwrap();
    for _ in 0..4 {
        engine.tick();
    }
    assert!(!engine.session().ended());
    engine.tick();
    assert!(engine.session().ended());
}

/// Test a large gap between heartbeats replays every missed second.
#[test]
fn test_advance_catches_up() {
    let mut engine = SessionEngine::new(SessionConfig::default().with_seed(1)).unwrap();
    engine.start(Timestamp(0)).unwrap();

    engine.advance(Timestamp(7_300));

    assert_eq!(engine.session().time_remaining(), 13);
}

/// Test the freeze lasts exactly the freeze duration from the release.
#[test]
fn test_freeze_window() {
    let mut engine = scripted_engine();
    let layout = layout();

    engine.pointer_down(Timestamp(1_200), P2_GRID, TileId(1), None, &layout).unwrap();
    let outcome = engine.pointer_up(Timestamp(1_234), P2_DROP, None, &layout);

    assert_eq!(
        outcome,
        Some(DropOutcome::Frozen {
            player: PlayerId::Player2,
            slot: 1,
            until: Timestamp(4_234)
        })
    );
    let p2 = engine.session().player(PlayerId::Player2);
    assert!(p2.is_frozen());
    assert_eq!(p2.frozen_until(), Some(Timestamp(4_234)));

    engine.check_freezes(Timestamp(4_233));
    assert!(engine.session().player(PlayerId::Player2).is_frozen());

    engine.check_freezes(Timestamp(4_234));
    let p2 = engine.session().player(PlayerId::Player2);
    assert!(!p2.is_frozen());
    assert_eq!(p2.frozen_until(), None);
}

/// Test a frozen player cannot pick up, and the other player can.
#[test]
fn test_frozen_player_blocked() {
    let mut engine = scripted_engine();
    let layout = layout();

    engine.pointer_down(Timestamp(0), P2_GRID, TileId(1), None, &layout).unwrap();
    engine.pointer_up(Timestamp(10), P2_DROP, None, &layout);

    let rejected = engine.pointer_down(Timestamp(20), P2_GRID, TileId(5), None, &layout);
    assert_eq!(rejected, Err(PickupRejected::PlayerFrozen(PlayerId::Player2)));

    let accepted = engine.pointer_down(Timestamp(20), P1_GRID, TileId(5), None, &layout);
    assert_eq!(accepted, Ok(PlayerId::Player1));

    // Freeze does not pause the countdown
    engine.advance(Timestamp(2_000));
    assert_eq!(engine.session().time_remaining(), 18);
}

/// Test the winner is decided on read from final scores.
#[test]
fn test_result_after_end() {
    let mut engine = scripted_engine();
    let layout = layout();
    assert_eq!(engine.result(), None);

    engine.pointer_down(Timestamp(0), P1_GRID, TileId(0), None, &layout).unwrap();
    engine.pointer_up(Timestamp(10), P1_DROP, None, &layout);
    engine.advance(Timestamp(20_000));

    assert_eq!(engine.result(), Some(GameResult::Winner(PlayerId::Player1)));
    let events = engine.drain_events();
    assert_eq!(
        events.last(),
        Some(&SessionEvent::GameEnded {
            result: GameResult::Winner(PlayerId::Player1)
        })
    );
}

/// Test equal scores are a tie.
#[test]
fn test_tie() {
    let mut engine = SessionEngine::new(SessionConfig::default().with_seed(8)).unwrap();
    engine.start(Timestamp(0)).unwrap();
    engine.advance(Timestamp(20_000));

    assert_eq!(engine.result(), Some(GameResult::Tie));
}

/// Test nothing can be picked up or scored once the game is over.
#[test]
fn test_release_after_end_does_not_score() {
    let mut engine = scripted_engine();
    let layout = layout();

    engine.pointer_down(Timestamp(19_500), P1_GRID, TileId(0), None, &layout).unwrap();
    engine.advance(Timestamp(20_000));
    assert!(engine.session().ended());
    let pool_before = engine.session().tile_pool().clone();

    let outcome = engine.pointer_up(Timestamp(20_100), P1_DROP, None, &layout);

    assert_eq!(outcome, None);
    assert_eq!(engine.session().player(PlayerId::Player1).score(), 0);
    assert_eq!(engine.session().tile_pool(), &pool_before);
    assert!(engine.drag(PlayerId::Player1).is_none());

    let late = engine.pointer_down(Timestamp(20_200), P1_GRID, TileId(0), None, &layout);
    assert_eq!(late, Err(PickupRejected::GameEnded));
}

/// Test restart rebuilds everything and goes straight to running.
#[test]
fn test_restart() {
    let mut engine = scripted_engine();
    let layout = layout();

    engine.pointer_down(Timestamp(0), P1_GRID, TileId(0), None, &layout).unwrap();
    engine.pointer_up(Timestamp(10), P1_DROP, None, &layout);
    engine.pointer_down(Timestamp(0), P2_GRID, TileId(1), None, &layout).unwrap();
    engine.pointer_up(Timestamp(10), P2_DROP, None, &layout);
    engine.advance(Timestamp(20_000));
    assert!(engine.session().ended());

    let old_ids: HashSet<TileId> = engine.session().tile_pool().iter().map(|t| t.id).collect();
    let old_targets: Vec<TileId> = PlayerId::all()
        .map(|p| engine.session().player(p).target_tile().id)
        .collect();
    engine.drain_events();

    engine.restart(Timestamp(25_000)).unwrap();

    let session = engine.session();
    assert_eq!(session.phase(), SessionPhase::Running);
    assert_eq!(session.time_remaining(), 20);
    assert_eq!(session.tile_pool().len(), 20);
    assert!(session.tile_pool().iter().all(|t| !old_ids.contains(&t.id)));
    for (player, state) in session.players().iter() {
        assert_eq!(state.score(), 0);
        assert!(!state.is_frozen());
        assert!(!old_targets.contains(&state.target_tile().id), "{player} kept its target");
    }
    assert_eq!(engine.drain_events(), vec![SessionEvent::GameStarted]);

    // The new round counts from the restart time
    engine.advance(Timestamp(26_000));
    assert_eq!(engine.session().time_remaining(), 19);
}

/// Test restart and start are only valid from their own phases.
#[test]
fn test_lifecycle_errors() {
    let mut engine = SessionEngine::new(SessionConfig::default().with_seed(1)).unwrap();

    assert_eq!(
        engine.restart(Timestamp(0)),
        Err(SessionError::InvalidTransition {
            action: "restart",
            phase: SessionPhase::NotStarted
        })
    );

    engine.start(Timestamp(0)).unwrap();
    assert!(engine.restart(Timestamp(1)).is_err());

    engine.advance(Timestamp(20_000));
    assert_eq!(
        engine.start(Timestamp(20_001)),
        Err(SessionError::InvalidTransition {
            action: "start",
            phase: SessionPhase::Ended
        })
    );
}

/// Test start keeps the tiles and targets built with the session.
#[test]
fn test_start_does_not_reset() {
    let mut engine = SessionEngine::new(SessionConfig::default().with_seed(11)).unwrap();
    let before = engine.session().clone();

    engine.start(Timestamp(0)).unwrap();

    assert_eq!(engine.session().tile_pool(), before.tile_pool());
    assert_eq!(engine.session().players(), before.players());
    assert_eq!(engine.drain_events(), vec![SessionEvent::GameStarted]);
}

/// Test snapshots serialize for the presentation layer.
#[test]
fn test_snapshot_serializes() {
    let mut engine = scripted_engine();
    engine
        .pointer_down(Timestamp(0), P1_GRID, TileId(0), None, &layout())
        .unwrap();

    let snapshot = engine.snapshot(Timestamp(100));
    let json = serde_json::to_string(&snapshot).unwrap();

    assert!(json.contains("\"phase\":\"running\""));
    assert!(json.contains("\"player1\""));
    assert_eq!(snapshot.session.entrance_delays().len(), 20);
}
