//! Condition and event capability records.
//!
//! Conditions are pure predicates over registry state. Events hold the
//! names of the conditions that must all hold and the effects applied when
//! they do. Both are plain data; evaluation lives in the engine.

use wayfarer_foundation::NameKey;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A predicate a condition evaluates.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Predicate {
    /// Always true.
    Always,
    /// The status counter is above zero.
    StatusSet {
        /// Entity holding the status.
        entity: NameKey,
        /// Status key.
        key: String,
    },
    /// The status counter is at least `value`.
    StatusAtLeast {
        /// Entity holding the status.
        entity: NameKey,
        /// Status key.
        key: String,
        /// Threshold.
        value: i64,
    },
    /// The player stands in this location.
    PlayerAt(NameKey),
    /// The player carries at least `quantity` of the item.
    PlayerHolds {
        /// Item type.
        item: NameKey,
        /// Minimum quantity.
        quantity: u32,
    },
    /// A container entity holds at least `quantity` of the item.
    ContainerHolds {
        /// Location, pawn, or container item.
        holder: NameKey,
        /// Item type.
        item: NameKey,
        /// Minimum quantity.
        quantity: u32,
    },
    /// An entity with this name is registered.
    EntityExists(NameKey),
    /// This turn's operation invoked the named command.
    CommandIs(NameKey),
    /// At least this many turns have been processed.
    TurnsElapsed(u64),
}

impl Predicate {
    /// Shorthand for [`Predicate::StatusSet`].
    #[must_use]
    pub fn status_set(entity: &str, key: impl Into<String>) -> Self {
        Self::StatusSet {
            entity: NameKey::new(entity),
            key: key.into(),
        }
    }

    /// Shorthand for [`Predicate::PlayerAt`].
    #[must_use]
    pub fn player_at(location: &str) -> Self {
        Self::PlayerAt(NameKey::new(location))
    }

    /// Shorthand for [`Predicate::PlayerHolds`].
    #[must_use]
    pub fn player_holds(item: &str, quantity: u32) -> Self {
        Self::PlayerHolds {
            item: NameKey::new(item),
            quantity,
        }
    }

    /// Shorthand for [`Predicate::CommandIs`].
    #[must_use]
    pub fn command_is(command: &str) -> Self {
        Self::CommandIs(NameKey::new(command))
    }
}

/// The condition capability.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConditionData {
    /// What is checked.
    pub predicate: Predicate,
    /// Inverts the predicate result.
    pub negated: bool,
}

/// A side effect applied when an event fires or a dialog option is chosen.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Effect {
    /// Append text to the turn output.
    Say(String),
    /// Set a status counter; values at or below zero clear it.
    SetStatus {
        /// Target entity.
        entity: NameKey,
        /// Status key.
        key: String,
        /// New value.
        value: i64,
    },
    /// Add `delta` to a status counter.
    AdjustStatus {
        /// Target entity.
        entity: NameKey,
        /// Status key.
        key: String,
        /// Amount added; may be negative.
        delta: i64,
    },
    /// Remove a status counter.
    ClearStatus {
        /// Target entity.
        entity: NameKey,
        /// Status key.
        key: String,
    },
    /// Relocate a pawn.
    MovePawn {
        /// Pawn to move.
        pawn: NameKey,
        /// Destination location.
        to: NameKey,
    },
    /// Put items into a container entity.
    GiveItem {
        /// Receiving location, pawn, or container item.
        holder: NameKey,
        /// Item type.
        item: NameKey,
        /// Units added.
        quantity: u32,
    },
    /// Take items out of a container entity.
    TakeItem {
        /// Location, pawn, or container item losing the items.
        holder: NameKey,
        /// Item type.
        item: NameKey,
        /// Units removed.
        quantity: u32,
    },
    /// Unregister an entity.
    RemoveEntity(NameKey),
    /// Add a registered command to the active command list.
    EnableCommand(NameKey),
    /// Remove a command from the active command list.
    DisableCommand(NameKey),
    /// Run a dialog immediately.
    InitiateDialog(NameKey),
    /// Finish the game with a closing message.
    EndGame(String),
}

impl Effect {
    /// Shorthand for [`Effect::Say`].
    #[must_use]
    pub fn say(text: impl Into<String>) -> Self {
        Self::Say(text.into())
    }

    /// Shorthand for [`Effect::SetStatus`].
    #[must_use]
    pub fn set_status(entity: &str, key: impl Into<String>, value: i64) -> Self {
        Self::SetStatus {
            entity: NameKey::new(entity),
            key: key.into(),
            value,
        }
    }

    /// Shorthand for [`Effect::ClearStatus`].
    #[must_use]
    pub fn clear_status(entity: &str, key: impl Into<String>) -> Self {
        Self::ClearStatus {
            entity: NameKey::new(entity),
            key: key.into(),
        }
    }

    /// Shorthand for [`Effect::GiveItem`].
    #[must_use]
    pub fn give_item(holder: &str, item: &str, quantity: u32) -> Self {
        Self::GiveItem {
            holder: NameKey::new(holder),
            item: NameKey::new(item),
            quantity,
        }
    }
}

/// The event capability.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EventData {
    /// Conditions that must all hold; none means always eligible.
    pub conditions: Vec<NameKey>,
    /// Effects applied in order when the event fires.
    pub effects: Vec<Effect>,
}
