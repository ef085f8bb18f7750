//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use wayfarer_foundation::{Error, ErrorContext, ErrorKind, ValidationCode};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_unknown_entity() {
    let err = Error::unknown_entity("Cellar");
    assert!(matches!(err.kind, ErrorKind::UnknownEntity(_)));
    assert!(format!("{err}").contains("Cellar"));
}

#[test]
fn error_wrong_kind() {
    let err = Error::wrong_kind("Lamp", "pawn");
    assert!(matches!(err.kind, ErrorKind::WrongKind { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("Lamp"));
    assert!(msg.contains("pawn"));
}

#[test]
fn error_persistence() {
    let err = Error::persistence("no saved game named 'slot'");
    assert!(matches!(err.kind, ErrorKind::Persistence(_)));
    assert!(format!("{err}").contains("slot"));
}

#[test]
fn only_configuration_errors_carry_codes() {
    let err = Error::configuration("look", ValidationCode::NameDuplicatesAlias);
    assert_eq!(err.validation_code(), Some(ValidationCode::NameDuplicatesAlias));
    assert_eq!(Error::unknown_entity("x").validation_code(), None);
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn every_code_has_a_reason() {
    let codes = [
        ValidationCode::Passed,
        ValidationCode::NameLength,
        ValidationCode::HotkeyLength,
        ValidationCode::AliasLength,
        ValidationCode::InvalidWhitespace,
        ValidationCode::NameDuplication,
        ValidationCode::NameDuplicatesHotkey,
        ValidationCode::NameDuplicatesAlias,
        ValidationCode::HotkeyDuplicatesName,
        ValidationCode::HotkeyDuplication,
        ValidationCode::HotkeyDuplicatesAlias,
        ValidationCode::AliasDuplicatesName,
        ValidationCode::AliasDuplicatesHotkey,
        ValidationCode::AliasDuplication,
    ];
    for code in codes {
        assert!(!code.reason().is_empty(), "{code:?} has no reason");
        assert_eq!(code.is_passed(), code == ValidationCode::Passed);
    }
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_renders_frames() {
    let ctx = ErrorContext::new()
        .with_source("level 'The Old Mill'")
        .with_frame("building the starting world");
    let rendered = format!("{ctx}");
    assert!(rendered.starts_with("in level 'The Old Mill'"));
    assert!(rendered.contains("while building the starting world"));
}
