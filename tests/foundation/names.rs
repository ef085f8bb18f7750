//! Integration tests for name keys.

use std::collections::HashMap;

use proptest::prelude::*;
use wayfarer_foundation::{MAX_HOTKEY_LEN, MAX_NAME_LEN, NameKey};

#[test]
fn keys_ignore_case_and_padding() {
    assert_eq!(NameKey::new("  Brass Lamp "), NameKey::new("brass lamp"));
    assert_eq!(NameKey::new("LAMP").as_str(), "lamp");
}

#[test]
fn keys_look_up_by_str() {
    let mut map = HashMap::new();
    map.insert(NameKey::new("Cellar"), 1);
    assert_eq!(map.get("cellar"), Some(&1));
}

#[test]
fn matches_normalizes_the_other_side() {
    let key = NameKey::new("Trapdoor");
    assert!(key.matches(" TRAPDOOR"));
    assert!(!key.matches("trap door"));
}

#[test]
fn limits_are_positive() {
    assert!(MAX_HOTKEY_LEN < MAX_NAME_LEN);
}

proptest! {
    #[test]
    fn normalization_is_idempotent(name in "[ A-Za-z0-9]{0,24}") {
        let once = NameKey::new(&name);
        let twice = NameKey::new(once.as_str());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn case_never_distinguishes(name in "[A-Za-z]{1,20}") {
        prop_assert_eq!(NameKey::new(&name.to_uppercase()), NameKey::new(&name.to_lowercase()));
    }
}
