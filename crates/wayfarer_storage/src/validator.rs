//! Name, hotkey, and alias validation.
//!
//! Every check is a pure function of the proposed string and the current
//! registry contents. Checks run in a fixed order and the first failure wins.

use wayfarer_foundation::{MAX_HOTKEY_LEN, MAX_NAME_LEN, NameKey, ValidationCode, is_typeable};

use crate::entity::Entity;
use crate::registry::Registry;

fn within(text: &str, max: usize) -> bool {
    let len = text.chars().count();
    (1..=max).contains(&len)
}

fn has_whitespace(text: &str) -> bool {
    text.chars().any(char::is_whitespace)
}

fn is_hotkey(registry: &Registry, key: &NameKey) -> bool {
    registry.commands().any(|(_, c)| key.matches(&c.hotkey))
}

fn is_alias(registry: &Registry, key: &NameKey) -> bool {
    registry
        .commands()
        .any(|(_, c)| c.aliases().iter().any(|a| key.matches(a)))
}

/// Validates the name of a non-command entity.
#[must_use]
pub fn validate_component_name(registry: &Registry, name: &str) -> ValidationCode {
    if !within(name, MAX_NAME_LEN) {
        return ValidationCode::NameLength;
    }
    if !is_typeable(name) {
        return ValidationCode::UntypeableName;
    }
    name_uniqueness(registry, name)
}

/// Validates the name of a command or action.
#[must_use]
pub fn validate_command_name(registry: &Registry, name: &str) -> ValidationCode {
    if !within(name, MAX_NAME_LEN) {
        return ValidationCode::NameLength;
    }
    if has_whitespace(name) {
        return ValidationCode::InvalidWhitespace;
    }
    if !is_typeable(name) {
        return ValidationCode::UntypeableName;
    }
    name_uniqueness(registry, name)
}

fn name_uniqueness(registry: &Registry, name: &str) -> ValidationCode {
    let key = NameKey::new(name);
    if registry.contains(name) {
        ValidationCode::NameDuplication
    } else if is_hotkey(registry, &key) {
        ValidationCode::NameDuplicatesHotkey
    } else if is_alias(registry, &key) {
        ValidationCode::NameDuplicatesAlias
    } else {
        ValidationCode::Passed
    }
}

/// Validates a command hotkey.
#[must_use]
pub fn validate_hotkey(registry: &Registry, hotkey: &str) -> ValidationCode {
    if !within(hotkey, MAX_HOTKEY_LEN) {
        return ValidationCode::HotkeyLength;
    }
    if has_whitespace(hotkey) {
        return ValidationCode::InvalidWhitespace;
    }
    let key = NameKey::new(hotkey);
    if registry.contains(hotkey) {
        ValidationCode::HotkeyDuplicatesName
    } else if is_hotkey(registry, &key) {
        ValidationCode::HotkeyDuplication
    } else if is_alias(registry, &key) {
        ValidationCode::HotkeyDuplicatesAlias
    } else {
        ValidationCode::Passed
    }
}

/// Validates an action alias. Aliases may contain spaces (`pick up`).
#[must_use]
pub fn validate_alias(registry: &Registry, alias: &str) -> ValidationCode {
    if !within(alias.trim(), MAX_NAME_LEN) {
        return ValidationCode::AliasLength;
    }
    if !is_typeable(alias) {
        return ValidationCode::UntypeableName;
    }
    let key = NameKey::new(alias);
    if registry.contains(alias) {
        ValidationCode::AliasDuplicatesName
    } else if is_hotkey(registry, &key) {
        ValidationCode::AliasDuplicatesHotkey
    } else if is_alias(registry, &key) {
        ValidationCode::AliasDuplication
    } else {
        ValidationCode::Passed
    }
}

/// Runs every check that applies to `entity` before it is registered.
///
/// Commands check name, then hotkey, then each alias in order. A hotkey
/// equal to the command's own name is allowed; aliases must not repeat the
/// command's own name, hotkey, or an earlier alias.
pub(crate) fn validate_entity(registry: &Registry, entity: &Entity) -> Result<(), ValidationCode> {
    let Some(command) = entity.as_command() else {
        return check(validate_component_name(registry, entity.name()));
    };

    check(validate_command_name(registry, entity.name()))?;
    check(validate_hotkey(registry, &command.hotkey))?;

    let mut seen: Vec<NameKey> = Vec::new();
    for alias in command.aliases() {
        check(validate_alias(registry, alias))?;
        let key = NameKey::new(alias);
        if &key == entity.key() {
            return Err(ValidationCode::AliasDuplicatesName);
        }
        if key.matches(&command.hotkey) {
            return Err(ValidationCode::AliasDuplicatesHotkey);
        }
        if seen.contains(&key) {
            return Err(ValidationCode::AliasDuplication);
        }
        seen.push(key);
    }
    Ok(())
}

fn check(code: ValidationCode) -> Result<(), ValidationCode> {
    if code.is_passed() { Ok(()) } else { Err(code) }
}
