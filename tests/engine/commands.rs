//! Integration tests for the built-in commands.

use wayfarer_engine::{GameSession, Ports, TurnOutcome};
use wayfarer_foundation::{NameKey, Result};
use wayfarer_parser::Operation;
use wayfarer_storage::{Behavior, Container, Entity};

use crate::harness::Game;

// =============================================================================
// Looking and moving
// =============================================================================

#[test]
fn look_describes_the_location() {
    let mut game = Game::new();
    let out = game.play("look");
    assert!(out.starts_with("Yard\nA muddy yard."));
    assert!(out.contains("You see: 2 Rock, 3 Coin."));
    assert!(out.contains("Exits: north."));
    assert!(!out.contains("down"));
}

#[test]
fn direction_moves_and_describes() {
    let mut game = Game::new();
    let out = game.play("n");
    assert_eq!(game.location(), "shed");
    assert!(out.contains("Cobwebs everywhere."));
    assert!(out.contains("Guard is here."));
    assert!(out.contains("Exits: south."));
}

#[test]
fn go_takes_exit_by_name() {
    let mut game = Game::new();
    game.play("go shed door");
    assert_eq!(game.location(), "shed");
    game.play("go to south");
    assert_eq!(game.location(), "yard");
    assert_eq!(game.play("go"), "Go where?");
}

#[test]
fn blocked_direction_stays_put() {
    let mut game = Game::new();
    assert_eq!(game.play("west"), "You can't go that way.");
    assert_eq!(game.location(), "yard");
}

#[test]
fn hidden_exit_is_never_taken() {
    let mut game = Game::new();
    assert_eq!(game.play("down"), "You can't go that way.");
    assert_eq!(game.play("go crawlspace"), "You can't go that way.");
    assert_eq!(game.location(), "yard");

    game.session
        .registry_mut()
        .get_mut("crawlspace")
        .unwrap()
        .set_status("hidden", 0);
    game.play("down");
    assert_eq!(game.location(), "shed");
}

#[test]
fn examine_needs_something_in_view() {
    let mut game = Game::new();
    assert_eq!(game.play("x rock"), "You see nothing special about the Rock.");
    assert_eq!(game.play("examine chest"), "You see no chest here.");
    assert_eq!(game.play("x"), "Examine what?");
    assert_eq!(game.play("x yard"), "A muddy yard.");
}

// =============================================================================
// Carrying
// =============================================================================

#[test]
fn get_and_inventory() {
    let mut game = Game::new();
    assert_eq!(game.play("get coin"), "You take the Coin.");
    assert_eq!(game.play("take 2 coin"), "You take 2 Coin.");
    assert_eq!(game.count("player", "coin"), 3);
    assert_eq!(game.count("yard", "coin"), 0);
    assert_eq!(
        game.play("i"),
        "You are carrying: 3 Coin.\nTotal weight 0.3 of 10.0."
    );
}

#[test]
fn get_reports_what_is_missing() {
    let mut game = Game::new();
    assert_eq!(game.play("get"), "Get what?");
    assert_eq!(game.play("get unicorn"), "There is no unicorn here.");
    assert_eq!(game.play("get 5 coin"), "There aren't that many Coin here.");
    game.play("get 3 coin");
    assert_eq!(game.play("get coin"), "You already have the Coin.");
}

#[test]
fn non_positive_get_takes_one() {
    let mut game = Game::new();
    assert_eq!(game.play("get 0 coin"), "You take the Coin.");
    assert_eq!(game.play("get -4 coin"), "You take the Coin.");
    assert_eq!(game.count("player", "coin"), 2);
}

#[test]
fn weight_limit_blocks_second_rock() {
    let mut game = Game::new();
    assert_eq!(game.play("get rock"), "You take the Rock.");
    assert_eq!(game.play("get rock"), "The Rock is too heavy.");
    assert_eq!(game.count("player", "rock"), 1);
    assert_eq!(game.count("yard", "rock"), 1);
}

#[test]
fn contents_of_a_carried_container_count_toward_the_limit() {
    let mut game = Game::new();
    let registry = game.session.registry_mut();
    registry
        .create(Entity::item("Sack", 1.0).with_container(Container::new()))
        .unwrap();
    registry.place("Sack", "Yard", 1).unwrap();
    registry.place("Rock", "Yard", 3).unwrap();

    assert_eq!(game.play("get sack"), "You take the Sack.");
    assert_eq!(game.play("get rock"), "You take the Rock.");
    assert_eq!(game.play("put rock in sack"), "You put the Rock in the Sack.");
    assert_eq!(game.play("get rock"), "The Rock is too heavy.");
    assert_eq!(game.count("sack", "rock"), 1);
    assert_eq!(game.count("player", "rock"), 0);
    assert_eq!(game.count("yard", "rock"), 4);
    assert!(game.play("i").ends_with("Total weight 7.0 of 10.0."));
}

#[test]
fn a_filled_container_weighs_its_contents_when_taken() {
    let mut game = Game::new();
    let registry = game.session.registry_mut();
    registry
        .create(Entity::item("Sack", 1.0).with_container(Container::new()))
        .unwrap();
    registry.place("Sack", "Yard", 1).unwrap();
    registry.place("Rock", "Sack", 2).unwrap();

    assert_eq!(game.play("get sack"), "The Sack is too heavy.");
    assert_eq!(game.count("yard", "sack"), 1);
    assert_eq!(game.count("player", "sack"), 0);
}

#[test]
fn drop_checks_quantity() {
    let mut game = Game::new();
    assert_eq!(game.play("drop coin"), "You don't have any coin.");
    game.play("get 3 coin");
    assert_eq!(game.play("drop 0 coin"), "You can't drop 0 of something.");
    assert_eq!(game.play("drop 5 coin"), "You only have 3 Coin.");
    assert_eq!(game.play("drop 2 coin"), "You drop 2 Coin.");
    assert_eq!(game.count("yard", "coin"), 2);
}

#[test]
fn drop_without_a_place_to_land_says_so() {
    let mut game = Game::new();
    game.play("get coin");
    game.session
        .registry_mut()
        .get_mut("player")
        .and_then(Entity::as_pawn_mut)
        .unwrap()
        .location = NameKey::new("nowhere");
    assert_eq!(game.play("drop coin"), "You can't drop that here.");
    assert_eq!(game.count("player", "coin"), 1);
}

#[test]
fn put_into_container_item() {
    let mut game = Game::new();
    game.play("get 2 coin");
    game.play("north");
    assert_eq!(game.play("put coin"), "Put it where?");
    assert_eq!(
        game.play("put coin in guard"),
        "You can't put things in the Guard."
    );
    assert_eq!(game.play("put 2 coin into chest"), "You put 2 Coin into the Chest.");
    assert_eq!(game.count("chest", "coin"), 2);
    assert_eq!(game.count("player", "coin"), 0);
    assert!(game.play("x chest").contains("The Chest contains: 2 Coin."));
}

#[test]
fn empty_inventory() {
    let mut game = Game::new();
    assert_eq!(game.play("inventory"), "You are empty-handed.");
}

// =============================================================================
// Other commands
// =============================================================================

#[test]
fn talk_requires_a_pawn_here() {
    let mut game = Game::new();
    assert_eq!(game.play("talk guard"), "There is no one here called guard.");
    game.play("n");
    assert_eq!(game.play("talk to cat"), "Cat has nothing to say.");
    assert_eq!(game.play("talk"), "Talk to whom?");
}

#[test]
fn wait_costs_a_turn() {
    let mut game = Game::new();
    assert_eq!(game.play("z"), "Time passes.");
    assert_eq!(game.session.turns(), 1);
}

#[test]
fn help_lists_active_commands() {
    let mut game = Game::new();
    let out = game.play("help");
    assert!(out.starts_with("Commands:"));
    assert!(out.contains("  look (l): describe your surroundings"));
    assert!(out.contains("  quit (q): leave the game"));
}

#[test]
fn unknown_verb_costs_no_turn() {
    let mut game = Game::new();
    assert_eq!(game.play("dance"), "I don't understand \"dance\".");
    assert_eq!(game.session.turns(), 0);
    assert_eq!(game.turn("   "), TurnOutcome::Empty);
}

#[test]
fn deactivated_command_is_unrecognized() {
    let mut game = Game::new();
    assert!(game.session.deactivate("wait"));
    assert_eq!(
        game.turn("wait"),
        TurnOutcome::Unrecognized("wait".to_string())
    );
    assert!(game.session.activate("wait"));
    assert!(game.turn("wait").ran());
}

fn shout(session: &mut GameSession, op: &Operation, _ports: &mut Ports<'_>) -> Result<()> {
    session.say(format!("You shout \"{}\"!", op.rest()));
    Ok(())
}

#[test]
fn custom_command_runs_its_handler() {
    let mut game = Game::new();
    game.session
        .registry_mut()
        .create(Entity::command("shout", "sh", Behavior::Custom("shout".into())))
        .unwrap();
    assert!(game.session.activate("shout"));
    assert_eq!(game.play("shout hello"), "Nothing happens.");
    game.session.register_handler("shout", shout);
    assert_eq!(game.play("sh hello"), "You shout \"hello\"!");
}

#[test]
fn quit_ends_the_game() {
    let mut game = Game::new();
    assert_eq!(game.play("quit"), "Goodbye.");
    assert!(game.session.is_finished());
    assert_eq!(game.turn("look"), TurnOutcome::Ignored);
}
