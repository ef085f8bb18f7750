//! Integration tests for verb lookup and operation parsing.

use proptest::prelude::*;
use wayfarer_foundation::NameKey;
use wayfarer_parser::{
    InputTokenizer, NounPhrase, Operation, OperationParser, ParseResult, Scope, ScopeTier,
    VerbForm, VerbTable,
};
use wayfarer_storage::{Behavior, Container, Entity, Registry};

// =============================================================================
// Helper Functions
// =============================================================================

fn world() -> Registry {
    let mut r = Registry::new();
    r.add(Entity::location("Meadow"));
    r.add(Entity::location("Mill"));
    r.add(Entity::exit("Mill Door", "Meadow", "Mill").with_direction("east"));
    r.add(Entity::exit("Trapdoor", "Meadow", "Mill").hidden());
    r.add(Entity::item("Coin", 0.1));
    r.add(Entity::item("Sack", 0.5).with_container(Container::new()));
    r.add(Entity::item("Cellar Key", 0.1));
    r.add(Entity::pawn("Player", "Meadow", 10.0));
    r.add(Entity::pawn("Miller", "Meadow", 50.0));
    r.add(
        Entity::action("get", "g", Behavior::Get)
            .with_alias("take")
            .with_alias("pick up"),
    );
    r.add(
        Entity::action("put", "p", Behavior::Put)
            .with_preposition("in")
            .with_preposition("into"),
    );
    r.add(Entity::command("look", "l", Behavior::Look));
    r.add(Entity::command("save", "sv", Behavior::Save));
    r.place("Coin", "Meadow", 5).unwrap();
    r.place("Sack", "Player", 1).unwrap();
    r
}

fn active(r: &Registry) -> Vec<NameKey> {
    r.commands().map(|(e, _)| e.key().clone()).collect()
}

fn parse(input: &str) -> ParseResult {
    let r = world();
    OperationParser::for_active(&r, &active(&r)).parse(input, &r, &NameKey::new("player"))
}

fn op(input: &str) -> Operation {
    parse(input).into_operation().expect("parsed")
}

// =============================================================================
// Verbs
// =============================================================================

#[test]
fn longest_alias_wins() {
    let r = world();
    let table = VerbTable::from_active(&r, &active(&r));
    let found = table
        .lookup(&InputTokenizer::tokenize("pick up coin"))
        .unwrap();
    assert_eq!(found.command.as_str(), "get");
    assert_eq!(found.consumed, 2);
    assert_eq!(found.form, VerbForm::Alias);
}

#[test]
fn hotkeys_and_names_match() {
    assert_eq!(op("G coin").command.as_str(), "get");
    assert_eq!(op("l").command.as_str(), "look");
    assert_eq!(op("LOOK").verb(), "look");
}

#[test]
fn inactive_commands_are_unrecognized() {
    let r = world();
    let only_look = vec![NameKey::new("look")];
    let parser = OperationParser::for_active(&r, &only_look);
    assert_eq!(
        parser.parse("get coin", &r, &NameKey::new("player")),
        ParseResult::Unrecognized("get".into())
    );
}

#[test]
fn empty_and_unknown_lines() {
    assert_eq!(parse("  "), ParseResult::Empty);
    assert_eq!(parse("dance"), ParseResult::Unrecognized("dance".into()));
    assert!(parse("dance").operation().is_none());
}

// =============================================================================
// Objects and quantities
// =============================================================================

#[test]
fn quantity_defaults_to_one() {
    let o = op("get coin");
    assert_eq!(o.quantity, 1);
    assert!(!o.explicit_quantity);
    assert_eq!(o.direct.as_ref().map(NameKey::as_str), Some("coin"));
}

#[test]
fn explicit_quantity_is_taken() {
    let o = op("take 3 coin");
    assert_eq!(o.quantity, 3);
    assert!(o.explicit_quantity);
    assert_eq!(o.direct_phrase.text(), "coin");
}

#[test]
fn zero_and_negative_quantities_survive_parsing() {
    assert_eq!(op("get 0 coin").quantity, 0);
    assert_eq!(op("get -2 coin").quantity, -2);
}

#[test]
fn preposition_splits_phrases() {
    let o = op("put 2 coin into the sack");
    assert_eq!(o.preposition.as_deref(), Some("into"));
    assert_eq!(o.quantity, 2);
    assert_eq!(o.direct.as_ref().map(NameKey::as_str), Some("coin"));
    assert_eq!(o.indirect.as_ref().map(NameKey::as_str), Some("sack"));
}

#[test]
fn plain_commands_do_not_split() {
    let o = op("save in the barn");
    assert_eq!(o.preposition, None);
    assert_eq!(o.rest(), "in the barn");
}

#[test]
fn unresolved_phrase_leaves_object_empty() {
    let o = op("get unicorn");
    assert!(o.has_object());
    assert_eq!(o.direct, None);
}

#[test]
fn article_is_ignored() {
    assert_eq!(
        op("get the cellar key").direct.as_ref().map(NameKey::as_str),
        Some("cellar key")
    );
}

// =============================================================================
// Scope
// =============================================================================

#[test]
fn scope_prefers_inventory_and_hides_hidden() {
    let r = world();
    let scope = Scope::for_actor(&r, &NameKey::new("player"));
    assert_eq!(
        scope.resolve(&r, &NounPhrase::new("sack")),
        Some((NameKey::new("sack"), ScopeTier::Inventory))
    );
    assert_eq!(
        scope.resolve(&r, &NounPhrase::new("miller")),
        Some((NameKey::new("miller"), ScopeTier::Location))
    );
    assert!(!scope.contains(&NameKey::new("trapdoor")));
    assert!(!scope.contains(&NameKey::new("player")));
    assert_eq!(
        scope.resolve(&r, &NounPhrase::new("trapdoor")),
        Some((NameKey::new("trapdoor"), ScopeTier::Global))
    );
}

#[test]
fn parsing_never_mutates_the_registry() {
    let r = world();
    let before = r.clone();
    let parser = OperationParser::for_active(&r, &active(&r));
    for line in ["get 3 coin", "put sack into sack", "look", "xyzzy", ""] {
        let _ = parser.parse(line, &r, &NameKey::new("player"));
    }
    assert_eq!(r, before);
}

proptest! {
    #[test]
    fn any_line_parses_to_some_result(line in "[ a-z0-9]{0,30}") {
        match parse(&line) {
            ParseResult::Empty => prop_assert!(line.trim().is_empty()),
            ParseResult::Unrecognized(word) => prop_assert!(!word.is_empty()),
            ParseResult::Parsed(op) => prop_assert!(!op.command.as_str().is_empty()),
        }
    }

    #[test]
    fn typed_quantity_round_trips(n in 1i64..1000) {
        let o = op(&format!("get {n} coin"));
        prop_assert_eq!(o.quantity, n);
        prop_assert!(o.explicit_quantity);
    }
}
