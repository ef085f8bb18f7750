//! Case-insensitive entity names.
//!
//! Every entity, hotkey, and alias is compared case-insensitively. A
//! [`NameKey`] is the normalized (lower-cased) form used for map keys and
//! cross-entity references; the original spelling stays on the entity for
//! display.

use std::borrow::Borrow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum length of an entity or command name, in characters.
pub const MAX_NAME_LEN: usize = 20;

/// Maximum length of a command hotkey, in characters.
pub const MAX_HOTKEY_LEN: usize = 3;

/// Characters stripped from typed words, unless a word is nothing else.
pub const SENTENCE_PUNCTUATION: [char; 6] = ['.', ',', '!', '?', ';', ':'];

/// Returns true if a player can type `text` and have it read back unchanged.
///
/// Words must be separated by single spaces. A word may not mix sentence
/// punctuation with other characters (`Mr.`), and quotes are never allowed.
/// A word made only of punctuation (`?`) is kept whole by the tokenizer and
/// so is typeable.
#[must_use]
pub fn is_typeable(text: &str) -> bool {
    let text = text.trim();
    if text.contains('"') || text.split(' ').any(str::is_empty) {
        return false;
    }
    text.split(' ').all(|word| {
        !word.chars().any(char::is_whitespace)
            && (word.chars().all(|c| SENTENCE_PUNCTUATION.contains(&c))
                || !word.chars().any(|c| SENTENCE_PUNCTUATION.contains(&c)))
    })
}

/// Normalized, lower-cased name used as a registry key.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NameKey(String);

impl NameKey {
    /// Normalizes a name into a key.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }

    /// Returns the normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if `other` normalizes to this key.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.0 == other.trim().to_lowercase()
    }
}

impl From<&str> for NameKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<&String> for NameKey {
    fn from(name: &String) -> Self {
        Self::new(name)
    }
}

impl From<String> for NameKey {
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}

impl Borrow<str> for NameKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NameKey({})", self.0)
    }
}

impl fmt::Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
