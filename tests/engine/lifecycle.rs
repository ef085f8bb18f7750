//! Integration tests for new game, restart, save, and load.

use std::rc::Rc;

use wayfarer_engine::{
    GameSession, Level, MemoryStore, Ports, ScriptedIo, Snapshot, SnapshotStore, TurnOutcome,
    validate_save_name,
};
use wayfarer_foundation::{ErrorKind, NameKey, Result, ValidationCode};
use wayfarer_storage::{Effect, Entity};

use crate::harness::{Game, Yard};

struct Clashing;

impl Level for Clashing {
    fn name(&self) -> &str {
        "Clashing"
    }

    fn build(&self, session: &mut GameSession) -> Result<()> {
        let r = session.registry_mut();
        r.create(Entity::location("Hall"))?;
        r.create(Entity::item("hall", 1.0))?;
        Ok(())
    }
}

struct Greeted;

impl Level for Greeted {
    fn name(&self) -> &str {
        "Greeted"
    }

    fn build(&self, session: &mut GameSession) -> Result<()> {
        Yard.build(session)?;
        session
            .registry_mut()
            .create(Entity::event("Welcome").then(Effect::say("Welcome!")))?;
        Ok(())
    }
}

// =============================================================================
// Starting
// =============================================================================

#[test]
fn bad_level_reports_configuration_error_with_context() {
    let mut session = GameSession::new();
    let mut io = ScriptedIo::default();
    let mut store = MemoryStore::new();
    let err = session
        .start(Rc::new(Clashing), &mut Ports::new(&mut io, &mut store))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Configuration { .. }));
    assert_eq!(err.validation_code(), Some(ValidationCode::NameDuplication));
    let context = err.context.unwrap();
    assert_eq!(context.source.as_deref(), Some("level 'Clashing'"));
}

#[test]
fn opening_sweep_runs_at_start() {
    let mut session = GameSession::new();
    let mut io = ScriptedIo::default();
    let mut store = MemoryStore::new();
    let report = session
        .start(Rc::new(Greeted), &mut Ports::new(&mut io, &mut store))
        .unwrap();
    assert!(report.fired("welcome"));
    assert_eq!(session.take_output(), "Welcome!");
    assert_eq!(session.turns(), 0);
}

#[test]
fn restart_rebuilds_and_skips_one_sweep() {
    let mut game = Game::with_level(Rc::new(Greeted));
    game.play("get coin");
    game.play("north");
    let outcome = game.turn("restart");
    assert_eq!(
        outcome,
        TurnOutcome::Ran {
            command: "restart".into(),
            sweep: None,
        }
    );
    assert_eq!(game.location(), "yard");
    assert_eq!(game.count("yard", "coin"), 3);
    assert_eq!(game.session.turns(), 0);
    assert_eq!(game.io.last().matches("Welcome!").count(), 1);

    let TurnOutcome::Ran { sweep, .. } = game.turn("wait") else {
        panic!("wait should run");
    };
    assert!(sweep.unwrap().fired("welcome"));
}

// =============================================================================
// Save and load
// =============================================================================

#[test]
fn save_then_load_restores_the_world() {
    let mut game = Game::new();
    game.play("get coin");
    assert_eq!(game.play("save Before Shed"), "Saved as 'before shed'.");
    game.play("get 2 coin");
    game.play("north");

    let outcome = game.turn("load before shed");
    assert!(matches!(outcome, TurnOutcome::Ran { sweep: None, .. }));
    assert!(game.io.last().starts_with("Loaded 'before shed'.\nYard"));
    assert_eq!(game.location(), "yard");
    assert_eq!(game.count("player", "coin"), 1);
    assert_eq!(game.session.turns(), 1);
}

#[test]
fn default_slot_is_used_without_a_name() {
    let mut game = Game::new();
    assert_eq!(game.play("save"), "Saved as 'quicksave'.");
    assert_eq!(game.store.list().unwrap(), vec!["quicksave".to_string()]);
    assert!(game.play("restore").starts_with("Loaded 'quicksave'."));
}

#[test]
fn failed_load_leaves_state_intact() {
    let mut game = Game::new();
    game.play("get coin");
    let before = game.session.snapshot();
    let out = game.play("load nowhere");
    assert!(out.starts_with("Could not load:"));
    assert_eq!(game.session.snapshot().registry, before.registry);
    assert_eq!(game.session.snapshot().player, before.player);
}

#[test]
fn invalid_snapshot_is_rejected() {
    let mut game = Game::new();
    let mut bad = game.session.snapshot();
    bad.player = NameKey::new("ghost");
    game.store.save("broken", &bad).unwrap();
    assert!(game.play("load broken").starts_with("Could not load:"));
    assert_eq!(game.session.player().as_str(), "player");
}

#[test]
fn restore_clears_finished_flag() {
    let mut game = Game::new();
    let snapshot: Snapshot = game.session.snapshot();
    game.play("quit");
    assert!(game.session.is_finished());
    game.session.restore(snapshot).unwrap();
    assert!(!game.session.is_finished());
}

#[test]
fn save_names_are_checked() {
    assert_eq!(validate_save_name("  Slot One ").unwrap(), "slot one");
    for bad in ["", "   ", ".hidden", "a/b", "a\\b", "c:"] {
        let err = validate_save_name(bad).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidSaveName(_)), "{bad:?}");
    }
}
