//! Scope evaluation for noun resolution.
//!
//! Determines which entities an actor can refer to, nearest first: what the
//! actor carries, then what is in the actor's location (items, other pawns,
//! exits). Anything else is only reachable through the global fallback.

use wayfarer_foundation::NameKey;
use wayfarer_storage::{Entity, Registry};

use crate::noun_phrase::NounPhrase;

/// Where a resolved name was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeTier {
    /// Carried by the actor
    Inventory,
    /// In the actor's location
    Location,
    /// Anywhere in the registry
    Global,
}

/// Entities visible to one actor, in resolution order.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    inventory: Vec<NameKey>,
    location: Vec<NameKey>,
}

impl Scope {
    /// Collects the scope of `actor`.
    ///
    /// Hidden entities are left out of the location tier.
    #[must_use]
    pub fn for_actor(registry: &Registry, actor: &NameKey) -> Self {
        let Some(entity) = registry.get_key(actor) else {
            return Self::default();
        };

        let inventory = entity
            .container()
            .map(|c| c.stacks().map(|s| s.item.clone()).collect())
            .unwrap_or_default();

        let mut location = Vec::new();
        if let Some(here) = entity.as_pawn().map(|p| &p.location) {
            let visible = |e: &&Entity| !e.is_hidden();
            if let Some(container) = registry.get_key(here).and_then(Entity::container) {
                location.extend(
                    container
                        .stacks()
                        .filter(|s| registry.get_key(&s.item).is_none_or(|e| !e.is_hidden()))
                        .map(|s| s.item.clone()),
                );
            }
            location.extend(
                registry
                    .pawns_at(here)
                    .filter(|e| e.key() != actor)
                    .filter(visible)
                    .map(|e| e.key().clone()),
            );
            location.extend(
                registry
                    .exits_from(here)
                    .filter(visible)
                    .map(|e| e.key().clone()),
            );
        }

        Self {
            inventory,
            location,
        }
    }

    /// Resolves a phrase: inventory, then location, then the whole registry.
    #[must_use]
    pub fn resolve(&self, registry: &Registry, phrase: &NounPhrase) -> Option<(NameKey, ScopeTier)> {
        if phrase.is_empty() {
            return None;
        }
        let tiers = [
            (&self.inventory, ScopeTier::Inventory),
            (&self.location, ScopeTier::Location),
        ];
        for (keys, tier) in tiers {
            if let Some(key) = keys.iter().find(|k| phrase.names(k)) {
                return Some((key.clone(), tier));
            }
        }
        [phrase.text(), phrase.bare()]
            .iter()
            .find_map(|name| registry.get(name))
            .map(|e| (e.key().clone(), ScopeTier::Global))
    }

    /// Returns true if `key` is carried or in the location.
    #[must_use]
    pub fn contains(&self, key: &NameKey) -> bool {
        self.inventory.contains(key) || self.location.contains(key)
    }

    /// Keys carried by the actor.
    #[must_use]
    pub fn inventory(&self) -> &[NameKey] {
        &self.inventory
    }

    /// Keys visible in the actor's location.
    #[must_use]
    pub fn location(&self) -> &[NameKey] {
        &self.location
    }
}
