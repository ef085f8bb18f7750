//! Command and action capability records.
//!
//! A command is an invocable verb: a name, a short unique hotkey, and the
//! behavior its `run` performs. An action is a command that also answers to
//! aliases and splits its object phrase on prepositions.

use wayfarer_foundation::NameKey;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What a command does when run.
///
/// Behaviors are data so that the active command list survives save/load;
/// the engine maps each variant to its implementation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Behavior {
    /// Describe the current location.
    Look,
    /// Describe a named object.
    Examine,
    /// Take the exit whose direction is this command's name.
    Move,
    /// Take an exit named by the direct object.
    Go,
    /// Pick up items from the current location.
    Get,
    /// Put down carried items.
    Drop,
    /// Move carried items into a container item.
    Put,
    /// List carried items.
    Inventory,
    /// Start the dialog of a pawn.
    Talk,
    /// Let a turn pass.
    Wait,
    /// List the available commands.
    Help,
    /// Write a snapshot to a save slot.
    Save,
    /// Restore a snapshot from a save slot.
    Load,
    /// Rebuild the starting level.
    Restart,
    /// End the session.
    Quit,
    /// A handler registered on the session under this name.
    Custom(String),
}

/// Alias and preposition sets of an action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActionData {
    /// Alternate invocation phrases; may be several words (`pick up`).
    pub aliases: Vec<String>,
    /// Words splitting the direct object phrase from the indirect one.
    pub prepositions: Vec<String>,
}

/// The command capability.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CommandData {
    /// Short unique invocation string.
    pub hotkey: String,
    /// What `run` does.
    pub behavior: Behavior,
    /// Present when the command is an action.
    pub action: Option<ActionData>,
    /// One-line description for `help`.
    pub summary: String,
}

impl CommandData {
    /// Returns true if the hotkey matches case-insensitively.
    #[must_use]
    pub fn hotkey_matches(&self, word: &str) -> bool {
        self.hotkey.eq_ignore_ascii_case(word.trim())
    }

    /// Returns the aliases, empty for plain commands.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        self.action.as_ref().map_or(&[], |a| a.aliases.as_slice())
    }

    /// Returns the prepositions, empty for plain commands.
    #[must_use]
    pub fn prepositions(&self) -> &[String] {
        self.action
            .as_ref()
            .map_or(&[], |a| a.prepositions.as_slice())
    }

    /// Returns true if any alias matches case-insensitively.
    #[must_use]
    pub fn has_alias(&self, phrase: &str) -> bool {
        let key = NameKey::new(phrase);
        self.aliases().iter().any(|a| key.matches(a))
    }

    /// Returns true if this command is an action.
    #[must_use]
    pub fn is_action(&self) -> bool {
        self.action.is_some()
    }
}
