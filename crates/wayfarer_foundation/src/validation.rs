//! Outcome codes for name, hotkey, and alias validation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::name::{MAX_HOTKEY_LEN, MAX_NAME_LEN};

/// Result of validating a proposed name, hotkey, or alias.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValidationCode {
    /// The value is acceptable.
    Passed,
    /// Name is empty or longer than [`MAX_NAME_LEN`].
    NameLength,
    /// Hotkey is empty or longer than [`MAX_HOTKEY_LEN`].
    HotkeyLength,
    /// Alias is empty or longer than [`MAX_NAME_LEN`].
    AliasLength,
    /// Command names and hotkeys may not contain whitespace.
    InvalidWhitespace,
    /// Tokenizing would change the name or alias, so it can never be typed.
    UntypeableName,
    /// Another entity already has this name.
    NameDuplication,
    /// The name equals an existing command hotkey.
    NameDuplicatesHotkey,
    /// The name equals an existing action alias.
    NameDuplicatesAlias,
    /// The hotkey equals an existing entity name.
    HotkeyDuplicatesName,
    /// Another command already uses this hotkey.
    HotkeyDuplication,
    /// The hotkey equals an existing action alias.
    HotkeyDuplicatesAlias,
    /// The alias equals an existing entity name.
    AliasDuplicatesName,
    /// The alias equals an existing command hotkey.
    AliasDuplicatesHotkey,
    /// Another action already uses this alias.
    AliasDuplication,
}

impl ValidationCode {
    /// Returns true for [`ValidationCode::Passed`].
    #[must_use]
    pub const fn is_passed(self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Human-readable explanation of the code.
    #[must_use]
    pub fn reason(self) -> String {
        match self {
            Self::Passed => "passed validation".to_string(),
            Self::NameLength => format!("names must be 1 to {MAX_NAME_LEN} characters long"),
            Self::HotkeyLength => {
                format!("hotkeys must be 1 to {MAX_HOTKEY_LEN} characters long")
            }
            Self::AliasLength => format!("aliases must be 1 to {MAX_NAME_LEN} characters long"),
            Self::InvalidWhitespace => "whitespace is not allowed here".to_string(),
            Self::UntypeableName => "names must be words a player can type back".to_string(),
            Self::NameDuplication => "that name is already in use".to_string(),
            Self::NameDuplicatesHotkey => "that name is already a command hotkey".to_string(),
            Self::NameDuplicatesAlias => "that name is already a command alias".to_string(),
            Self::HotkeyDuplicatesName => "that hotkey is already an entity name".to_string(),
            Self::HotkeyDuplication => "that hotkey is already in use".to_string(),
            Self::HotkeyDuplicatesAlias => "that hotkey is already a command alias".to_string(),
            Self::AliasDuplicatesName => "that alias is already an entity name".to_string(),
            Self::AliasDuplicatesHotkey => "that alias is already a command hotkey".to_string(),
            Self::AliasDuplication => "that alias is already in use".to_string(),
        }
    }
}

impl fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason())
    }
}
