//! The component registry.
//!
//! The `Registry` owns every entity, keyed by case-insensitive name, and
//! remembers registration order. It is built on persistent collections, so
//! cloning is O(1) with structural sharing; every snapshot the engine takes
//! is such a clone.

use std::collections::HashSet;

use im::{HashMap, Vector};
use wayfarer_foundation::{Error, NameKey, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::command::CommandData;
use crate::entity::{Entity, Kind};
use crate::rule::{ConditionData, EventData};
use crate::validator;

/// Ordered name → entity mapping.
///
/// Invariant: no two entities share a name case-insensitively. Names never
/// collide with command hotkeys or action aliases when entities are added
/// through [`Registry::create`].
#[derive(Clone, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Vec<Entity>", into = "Vec<Entity>")
)]
pub struct Registry {
    entities: HashMap<NameKey, Entity>,
    order: Vector<NameKey>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Core contract
    // =========================================================================

    /// Adds an entity without validation.
    ///
    /// Returns false and leaves the registry untouched if the name is taken.
    pub fn add(&mut self, entity: Entity) -> bool {
        let key = entity.key().clone();
        if self.entities.contains_key(&key) {
            tracing::debug!(name = entity.name(), "ignoring duplicate registration");
            return false;
        }
        self.order.push_back(key.clone());
        self.entities.insert(key, entity);
        true
    }

    /// Validates an entity's name (and, for commands, its hotkey and
    /// aliases), then adds it.
    ///
    /// # Errors
    ///
    /// Returns a configuration error carrying the failing validation code.
    pub fn create(&mut self, entity: Entity) -> Result<NameKey> {
        validator::validate_entity(self, &entity)
            .map_err(|code| Error::configuration(entity.name(), code))?;
        let key = entity.key().clone();
        self.add(entity);
        Ok(key)
    }

    /// Removes an entity by case-insensitive name.
    pub fn remove(&mut self, name: &str) -> Option<Entity> {
        let key = NameKey::new(name);
        let removed = self.entities.remove(&key)?;
        self.order.retain(|k| k != &key);
        Some(removed)
    }

    /// Looks up an entity by case-insensitive name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.entities.get(&NameKey::new(name))
    }

    /// Looks up an entity by key.
    #[must_use]
    pub fn get_key(&self, key: &NameKey) -> Option<&Entity> {
        self.entities.get(key)
    }

    /// Looks up an entity mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Entity> {
        self.entities.get_mut(&NameKey::new(name))
    }

    /// Looks up an entity mutably by key.
    pub fn get_key_mut(&mut self, key: &NameKey) -> Option<&mut Entity> {
        self.entities.get_mut(key)
    }

    /// Returns true if an entity has this name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entities.contains_key(&NameKey::new(name))
    }

    /// Returns a copy of every entity in registration order.
    ///
    /// The result is detached from the registry; callers may mutate the
    /// registry while walking it.
    #[must_use]
    pub fn list(&self) -> Vec<Entity> {
        self.iter().cloned().collect()
    }

    /// Iterates entities in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.order.iter().filter_map(|k| self.entities.get(k))
    }

    /// Returns the keys in registration order.
    #[must_use]
    pub fn keys(&self) -> Vec<NameKey> {
        self.order.iter().cloned().collect()
    }

    /// Number of registered entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Removes every entity.
    pub fn clear(&mut self) {
        self.entities = HashMap::new();
        self.order = Vector::new();
    }

    // =========================================================================
    // Typed helpers
    // =========================================================================

    fn get_where(&self, name: &str, accept: impl Fn(&Kind) -> bool) -> Option<&Entity> {
        self.get(name).filter(|e| accept(e.kind()))
    }

    /// Looks up a command or action.
    #[must_use]
    pub fn get_command(&self, name: &str) -> Option<&Entity> {
        self.get_where(name, |k| matches!(k, Kind::Command(_)))
    }

    /// Looks up a location.
    #[must_use]
    pub fn get_location(&self, name: &str) -> Option<&Entity> {
        self.get_where(name, |k| matches!(k, Kind::Location))
    }

    /// Looks up an item type.
    #[must_use]
    pub fn get_item(&self, name: &str) -> Option<&Entity> {
        self.get_where(name, |k| matches!(k, Kind::Item(_)))
    }

    /// Looks up a pawn.
    #[must_use]
    pub fn get_pawn(&self, name: &str) -> Option<&Entity> {
        self.get_where(name, |k| matches!(k, Kind::Pawn(_)))
    }

    /// Looks up an exit.
    #[must_use]
    pub fn get_exit(&self, name: &str) -> Option<&Entity> {
        self.get_where(name, |k| matches!(k, Kind::Exit(_)))
    }

    /// Looks up a condition.
    #[must_use]
    pub fn get_condition(&self, name: &str) -> Option<&Entity> {
        self.get_where(name, |k| matches!(k, Kind::Condition(_)))
    }

    /// Looks up an event.
    #[must_use]
    pub fn get_event(&self, name: &str) -> Option<&Entity> {
        self.get_where(name, |k| matches!(k, Kind::Event(_)))
    }

    /// Looks up a dialog.
    #[must_use]
    pub fn get_dialog(&self, name: &str) -> Option<&Entity> {
        self.get_where(name, |k| matches!(k, Kind::Dialog(_)))
    }

    // =========================================================================
    // Ordered views by capability
    // =========================================================================

    /// Commands and actions in registration order.
    pub fn commands(&self) -> impl Iterator<Item = (&Entity, &CommandData)> {
        self.iter().filter_map(|e| e.as_command().map(|c| (e, c)))
    }

    /// Events in registration order.
    pub fn events(&self) -> impl Iterator<Item = (&Entity, &EventData)> {
        self.iter().filter_map(|e| e.as_event().map(|ev| (e, ev)))
    }

    /// Conditions in registration order.
    pub fn conditions(&self) -> impl Iterator<Item = (&Entity, &ConditionData)> {
        self.iter().filter_map(|e| e.as_condition().map(|c| (e, c)))
    }

    /// Pawns standing in `location`, in registration order.
    pub fn pawns_at<'a>(&'a self, location: &'a NameKey) -> impl Iterator<Item = &'a Entity> {
        self.iter()
            .filter(move |e| e.as_pawn().is_some_and(|p| &p.location == location))
    }

    /// Exits leading out of `location`, in registration order.
    pub fn exits_from<'a>(&'a self, location: &'a NameKey) -> impl Iterator<Item = &'a Entity> {
        self.iter()
            .filter(move |e| e.as_exit().is_some_and(|x| &x.origin == location))
    }

    /// Total weight of the items held by a container entity.
    ///
    /// Items that are themselves containers add the weight of their
    /// contents, however deeply nested. Each container entity is counted
    /// once. Stacks naming unregistered or non-item entities weigh nothing.
    #[must_use]
    pub fn carried_weight(&self, holder: &NameKey) -> f64 {
        let mut seen = HashSet::new();
        self.contents_weight(holder, &mut seen)
    }

    fn contents_weight(&self, holder: &NameKey, seen: &mut HashSet<NameKey>) -> f64 {
        if !seen.insert(holder.clone()) {
            return 0.0;
        }
        let Some(container) = self.get_key(holder).and_then(Entity::container) else {
            return 0.0;
        };
        let mut total = 0.0;
        for stack in container.stacks() {
            let Some(item) = self.get_key(&stack.item).and_then(Entity::as_item) else {
                continue;
            };
            total += item.weight * f64::from(stack.quantity);
            total += self.contents_weight(&stack.item, seen);
        }
        total
    }

    /// Places `quantity` units of an item inside a container entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is not a registered item type or the
    /// holder has no container.
    pub fn place(&mut self, item: &str, holder: &str, quantity: u32) -> Result<()> {
        let item_key = self
            .get_item(item)
            .map(|e| e.key().clone())
            .ok_or_else(|| self.missing_or_wrong(item, "item"))?;
        let missing = self.missing_or_wrong(holder, "container");
        let container = self
            .get_mut(holder)
            .and_then(Entity::container_mut)
            .ok_or(missing)?;
        container.add(item_key, quantity);
        Ok(())
    }

    fn missing_or_wrong(&self, name: &str, expected: &'static str) -> Error {
        if self.contains(name) {
            Error::wrong_kind(name, expected)
        } else {
            Error::unknown_entity(name)
        }
    }
}

impl From<Vec<Entity>> for Registry {
    fn from(entities: Vec<Entity>) -> Self {
        let mut registry = Registry::new();
        for entity in entities {
            registry.add(entity);
        }
        registry
    }
}

impl From<Registry> for Vec<Entity> {
    fn from(registry: Registry) -> Self {
        registry.list()
    }
}

impl PartialEq for Registry {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.iter().eq(other.iter())
    }
}
