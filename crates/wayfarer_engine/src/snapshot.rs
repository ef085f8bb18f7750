//! Persistence snapshots and the store boundary.
//!
//! A [`Snapshot`] is everything needed to resume a game: the registry, the
//! active command list, the player reference, and the turn counter. How a
//! snapshot reaches storage is the [`SnapshotStore`]'s concern.

use std::collections::HashMap;

use wayfarer_foundation::{Error, ErrorKind, NameKey, Result};
use wayfarer_storage::Registry;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One saved game.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    /// Every entity, in registration order.
    pub registry: Registry,
    /// Active commands, in activation order.
    pub active: Vec<NameKey>,
    /// The pawn the player controls.
    pub player: NameKey,
    /// Turns processed when the snapshot was taken.
    pub turns: u64,
}

impl Snapshot {
    /// Checks that the snapshot can be resumed.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the player is not a registered pawn.
    pub fn validate(&self) -> Result<()> {
        if self.registry.get_key(&self.player).and_then(|e| e.as_pawn()).is_none() {
            return Err(Error::persistence(format!(
                "snapshot player '{}' is not a pawn",
                self.player
            )));
        }
        Ok(())
    }
}

/// Where snapshots are kept.
pub trait SnapshotStore {
    /// Stores a snapshot under `name`, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid or the snapshot cannot be
    /// written.
    fn save(&mut self, name: &str, snapshot: &Snapshot) -> Result<()>;

    /// Fetches the snapshot stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid, nothing is stored under it,
    /// or the stored data cannot be read.
    fn load(&mut self, name: &str) -> Result<Snapshot>;

    /// Lists stored snapshot names.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be enumerated.
    fn list(&self) -> Result<Vec<String>>;
}

/// Checks a save name and returns its normalized form.
///
/// Names are trimmed and lower-cased. Empty names, path separators, and a
/// leading dot are rejected.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidSaveName`] for unusable names.
pub fn validate_save_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    let invalid = trimmed.is_empty()
        || trimmed.starts_with('.')
        || trimmed.chars().any(|c| matches!(c, '/' | '\\' | ':' | '\0'));
    if invalid {
        return Err(Error::new(ErrorKind::InvalidSaveName(name.to_string())));
    }
    Ok(trimmed.to_lowercase())
}

/// A store that keeps snapshots in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, Snapshot>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl SnapshotStore for MemoryStore {
    fn save(&mut self, name: &str, snapshot: &Snapshot) -> Result<()> {
        let name = validate_save_name(name)?;
        self.slots.insert(name, snapshot.clone());
        Ok(())
    }

    fn load(&mut self, name: &str) -> Result<Snapshot> {
        let key = validate_save_name(name)?;
        self.slots
            .get(&key)
            .cloned()
            .ok_or_else(|| Error::persistence(format!("no saved game named '{}'", name.trim())))
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names: Vec<_> = self.slots.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}
