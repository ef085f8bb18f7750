//! Integration tests for the entity registry.

use proptest::prelude::*;
use wayfarer_foundation::ErrorKind;
use wayfarer_storage::{Behavior, Container, Entity, Predicate, Registry};

fn world() -> Registry {
    let mut registry = Registry::new();
    registry.add(Entity::location("Meadow").with_description("Tall grass."));
    registry.add(Entity::location("Mill"));
    registry.add(Entity::exit("Mill Door", "Meadow", "Mill").with_direction("east"));
    registry.add(Entity::item("Lantern", 1.0));
    registry.add(Entity::item("Coin", 0.1));
    registry.add(Entity::item("Sack", 0.5).with_container(Container::new()));
    registry.add(Entity::pawn("Player", "Meadow", 10.0));
    registry.add(Entity::pawn("Miller", "Mill", 50.0));
    registry
}

// =============================================================================
// Core contract
// =============================================================================

#[test]
fn lookups_ignore_case() {
    let registry = world();
    assert_eq!(registry.get("MEADOW").unwrap().name(), "Meadow");
    assert!(registry.contains("mill door"));
    assert!(!registry.contains("Cellar"));
}

#[test]
fn duplicate_add_is_ignored() {
    let mut registry = world();
    let before = registry.len();
    assert!(!registry.add(Entity::item("lantern", 9.0)));
    assert_eq!(registry.len(), before);
    let lantern = registry.get_item("Lantern").unwrap().as_item().unwrap();
    assert!((lantern.weight - 1.0).abs() < 1e-9);
}

#[test]
fn list_keeps_registration_order() {
    let registry = world();
    let names: Vec<_> = registry.list().iter().map(|e| e.name().to_string()).collect();
    assert_eq!(names[0], "Meadow");
    assert_eq!(names[2], "Mill Door");
    assert_eq!(names.last().unwrap(), "Miller");
}

#[test]
fn remove_drops_entity_and_order() {
    let mut registry = world();
    let removed = registry.remove("coin").unwrap();
    assert_eq!(removed.name(), "Coin");
    assert!(!registry.contains("Coin"));
    assert!(registry.keys().iter().all(|k| k.as_str() != "coin"));
    assert!(registry.remove("coin").is_none());
}

#[test]
fn typed_getters_check_the_kind() {
    let registry = world();
    assert!(registry.get_location("Meadow").is_some());
    assert!(registry.get_item("Meadow").is_none());
    assert!(registry.get_exit("Mill Door").is_some());
    assert!(registry.get_pawn("Miller").is_some());
    assert!(registry.get_command("Miller").is_none());
}

#[test]
fn vec_conversion_preserves_contents() {
    let registry = world();
    let entities: Vec<Entity> = registry.clone().into();
    let rebuilt = Registry::from(entities);
    assert_eq!(rebuilt, registry);
}

// =============================================================================
// Views
// =============================================================================

#[test]
fn pawns_and_exits_by_location() {
    let registry = world();
    let meadow = registry.get("Meadow").unwrap().key().clone();
    let pawns: Vec<_> = registry.pawns_at(&meadow).map(Entity::name).collect();
    assert_eq!(pawns, ["Player"]);
    let exits: Vec<_> = registry.exits_from(&meadow).map(Entity::name).collect();
    assert_eq!(exits, ["Mill Door"]);
}

#[test]
fn rule_views_keep_order() {
    let mut registry = Registry::new();
    registry.add(Entity::condition("First", Predicate::Always));
    registry.add(Entity::event("Later"));
    registry.add(Entity::condition("Second", Predicate::player_at("Meadow")));
    let conditions: Vec<_> = registry.conditions().map(|(e, _)| e.name()).collect();
    assert_eq!(conditions, ["First", "Second"]);
    assert_eq!(registry.events().count(), 1);
}

// =============================================================================
// Containers
// =============================================================================

#[test]
fn place_and_weigh() {
    let mut registry = world();
    registry.place("Coin", "Player", 5).unwrap();
    registry.place("Lantern", "Player", 1).unwrap();
    let player = registry.get("Player").unwrap().key().clone();
    assert!((registry.carried_weight(&player) - 1.5).abs() < 1e-9);
}

#[test]
fn place_into_container_item() {
    let mut registry = world();
    registry.place("Coin", "Sack", 3).unwrap();
    let sack = registry.get("Sack").unwrap();
    let coin = registry.get("Coin").unwrap().key().clone();
    assert_eq!(sack.container().unwrap().quantity_of(&coin), 3);
}

#[test]
fn place_reports_missing_and_wrong_kind() {
    let mut registry = world();
    let err = registry.place("Anvil", "Player", 1).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownEntity(_)));
    let err = registry.place("Coin", "Lantern", 1).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::WrongKind { .. }));
    let err = registry.place("Meadow", "Player", 1).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::WrongKind { .. }));
}

#[test]
fn carried_sack_weighs_with_its_contents() {
    let mut registry = world();
    registry.place("Sack", "Player", 1).unwrap();
    registry.place("Coin", "Sack", 10).unwrap();
    let player = registry.get("Player").unwrap().key().clone();
    assert!((registry.carried_weight(&player) - 1.5).abs() < 1e-9);
}

#[test]
fn weight_of_non_container_is_zero() {
    let registry = world();
    let door = registry.get("Mill Door").unwrap().key().clone();
    assert!(registry.carried_weight(&door).abs() < f64::EPSILON);
}

// =============================================================================
// Validated creation
// =============================================================================

#[test]
fn create_rejects_with_configuration_error() {
    let mut registry = world();
    let err = registry.create(Entity::location("meadow")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Configuration { .. }));
    assert_eq!(
        err.validation_code(),
        Some(wayfarer_foundation::ValidationCode::NameDuplication)
    );
}

#[test]
fn create_accepts_command_with_own_name_as_hotkey() {
    let mut registry = world();
    let key = registry
        .create(Entity::command("go", "go", Behavior::Go))
        .unwrap();
    assert_eq!(key.as_str(), "go");
    assert!(registry.get_command("GO").is_some());
}

#[test]
fn registered_command_words_stay_in_force() {
    let mut registry = world();
    registry
        .create(Entity::action("get", "g", Behavior::Get).with_alias("take"))
        .unwrap();
    let command = registry.get_mut("get").unwrap();
    command.set_status("used", 1);
    command.set_note("hint", "Try taking the lantern.");

    let words = registry.get_command("get").and_then(Entity::as_command).unwrap();
    assert_eq!(words.hotkey, "g");
    assert_eq!(words.aliases(), ["take".to_string()]);
    let err = registry.create(Entity::item("Take", 1.0)).unwrap_err();
    assert_eq!(
        err.validation_code(),
        Some(wayfarer_foundation::ValidationCode::NameDuplicatesAlias)
    );
}

proptest! {
    #[test]
    fn created_names_stay_unique(names in prop::collection::vec("[a-z]{1,6}", 1..20)) {
        let mut registry = Registry::new();
        for name in &names {
            let _ = registry.create(Entity::location(name));
        }
        let mut keys: Vec<_> = registry.keys().into_iter().map(|k| k.to_string()).collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(keys.len(), total);
        prop_assert!(names.iter().all(|n| registry.contains(n)));
    }
}
