//! Integration tests for name, hotkey, and alias validation.

use proptest::prelude::*;
use wayfarer_foundation::{MAX_HOTKEY_LEN, MAX_NAME_LEN, ValidationCode};
use wayfarer_storage::validator::{
    validate_alias, validate_command_name, validate_component_name, validate_hotkey,
};
use wayfarer_storage::{Behavior, Entity, Registry};

fn with_get() -> Registry {
    let mut registry = Registry::new();
    registry.add(Entity::location("Meadow"));
    registry.add(
        Entity::action("get", "g", Behavior::Get)
            .with_alias("pick up")
            .with_alias("take"),
    );
    registry
}

// =============================================================================
// Names
// =============================================================================

#[test]
fn component_name_length() {
    let registry = Registry::new();
    assert_eq!(validate_component_name(&registry, ""), ValidationCode::NameLength);
    let long = "x".repeat(MAX_NAME_LEN + 1);
    assert_eq!(validate_component_name(&registry, &long), ValidationCode::NameLength);
    let exact = "x".repeat(MAX_NAME_LEN);
    assert_eq!(validate_component_name(&registry, &exact), ValidationCode::Passed);
}

#[test]
fn component_names_may_contain_spaces() {
    assert_eq!(
        validate_component_name(&Registry::new(), "Cellar Key"),
        ValidationCode::Passed
    );
}

#[test]
fn names_the_player_cannot_type_are_rejected() {
    let registry = Registry::new();
    for name in ["Mr. Smith", "Old  Mill", "Hey!", "\"Rock\"", "Cellar\tKey"] {
        assert_eq!(
            validate_component_name(&registry, name),
            ValidationCode::UntypeableName,
            "{name:?}"
        );
    }
    assert_eq!(validate_component_name(&registry, "Guard's Key"), ValidationCode::Passed);
    assert_eq!(validate_command_name(&registry, "look."), ValidationCode::UntypeableName);
    assert_eq!(validate_alias(&registry, "pick  up"), ValidationCode::UntypeableName);
    assert_eq!(validate_alias(&registry, "?"), ValidationCode::Passed);
}

#[test]
fn create_refuses_an_untypeable_name() {
    let mut registry = Registry::new();
    let err = registry.create(Entity::pawn("Mr. Smith", "Meadow", 5.0)).unwrap_err();
    assert_eq!(err.validation_code(), Some(ValidationCode::UntypeableName));
    assert!(registry.is_empty());
}

#[test]
fn component_name_collisions() {
    let registry = with_get();
    assert_eq!(validate_component_name(&registry, "MEADOW"), ValidationCode::NameDuplication);
    assert_eq!(validate_component_name(&registry, "g"), ValidationCode::NameDuplicatesHotkey);
    assert_eq!(
        validate_component_name(&registry, "Pick Up"),
        ValidationCode::NameDuplicatesAlias
    );
}

#[test]
fn command_names_reject_whitespace() {
    let registry = with_get();
    assert_eq!(
        validate_command_name(&registry, "look around"),
        ValidationCode::InvalidWhitespace
    );
    assert_eq!(validate_command_name(&registry, "take"), ValidationCode::NameDuplicatesAlias);
    assert_eq!(validate_command_name(&registry, "look"), ValidationCode::Passed);
}

#[test]
fn length_is_checked_before_whitespace() {
    let long = "a b".repeat(10);
    assert_eq!(
        validate_command_name(&Registry::new(), &long),
        ValidationCode::NameLength
    );
}

// =============================================================================
// Hotkeys
// =============================================================================

#[test]
fn hotkey_length_and_whitespace() {
    let registry = Registry::new();
    assert_eq!(validate_hotkey(&registry, ""), ValidationCode::HotkeyLength);
    let long = "h".repeat(MAX_HOTKEY_LEN + 1);
    assert_eq!(validate_hotkey(&registry, &long), ValidationCode::HotkeyLength);
    assert_eq!(validate_hotkey(&registry, "a b"), ValidationCode::InvalidWhitespace);
}

#[test]
fn hotkey_collisions() {
    let mut registry = with_get();
    registry.add(Entity::item("Cup", 0.2));
    assert_eq!(validate_hotkey(&registry, "cup"), ValidationCode::HotkeyDuplicatesName);
    assert_eq!(validate_hotkey(&registry, "G"), ValidationCode::HotkeyDuplication);
    registry.add(Entity::action("wait", "z", Behavior::Wait).with_alias("zz"));
    assert_eq!(validate_hotkey(&registry, "zz"), ValidationCode::HotkeyDuplicatesAlias);
    assert_eq!(validate_hotkey(&registry, "l"), ValidationCode::Passed);
}

// =============================================================================
// Aliases
// =============================================================================

#[test]
fn alias_collisions() {
    let registry = with_get();
    assert_eq!(validate_alias(&registry, "   "), ValidationCode::AliasLength);
    assert_eq!(validate_alias(&registry, "meadow"), ValidationCode::AliasDuplicatesName);
    assert_eq!(validate_alias(&registry, "g"), ValidationCode::AliasDuplicatesHotkey);
    assert_eq!(validate_alias(&registry, "TAKE"), ValidationCode::AliasDuplication);
    assert_eq!(validate_alias(&registry, "grab hold of"), ValidationCode::Passed);
}

#[test]
fn create_rejects_alias_repeating_own_parts() {
    let mut registry = Registry::new();
    let err = registry
        .create(Entity::action("get", "g", Behavior::Get).with_alias("g"))
        .unwrap_err();
    assert_eq!(err.validation_code(), Some(ValidationCode::AliasDuplicatesHotkey));

    let err = registry
        .create(
            Entity::action("drop", "d", Behavior::Drop)
                .with_alias("put down")
                .with_alias("Put Down"),
        )
        .unwrap_err();
    assert_eq!(err.validation_code(), Some(ValidationCode::AliasDuplication));
    assert!(registry.is_empty());
}

#[test]
fn command_named_like_an_alias_is_rejected() {
    let mut registry = with_get();
    let err = registry
        .create(Entity::command("take", "tk", Behavior::Get))
        .unwrap_err();
    assert_eq!(err.validation_code(), Some(ValidationCode::NameDuplicatesAlias));
    assert!(registry.get_command("take").is_none());
}

proptest! {
    #[test]
    fn validation_is_deterministic(name in "[ a-zA-Z]{0,24}") {
        let registry = with_get();
        prop_assert_eq!(
            validate_component_name(&registry, &name),
            validate_component_name(&registry, &name)
        );
        prop_assert_eq!(
            validate_command_name(&registry, &name),
            validate_command_name(&registry, &name)
        );
    }

    #[test]
    fn passed_names_are_not_registered(name in "[a-z]{1,20}") {
        let registry = with_get();
        if validate_component_name(&registry, &name) == ValidationCode::Passed {
            prop_assert!(!registry.contains(&name));
        }
    }
}
