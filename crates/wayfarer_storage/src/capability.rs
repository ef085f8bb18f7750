//! Capability records carried by entities.
//!
//! Locations, items, pawns, exits, and dialogs each carry a small record of
//! state beyond the shared name/notes/status triple. Containers are a
//! separate optional capability so that locations, pawns, and items (a
//! chest, a sack) can all hold stacks of items.

use wayfarer_foundation::NameKey;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rule::Effect;

/// An item type. Quantities live in the container holding the item.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemData {
    /// Weight of a single unit.
    pub weight: f64,
}

/// A character: the player or a non-player pawn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PawnData {
    /// Location the pawn currently stands in.
    pub location: NameKey,
    /// Maximum total weight the pawn can carry.
    pub max_weight: f64,
    /// Dialog started when the player talks to this pawn.
    pub dialog: Option<NameKey>,
}

/// A one-way passage from one location to another.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExitData {
    /// Location the exit leads out of.
    pub origin: NameKey,
    /// Location the exit leads to.
    pub destination: NameKey,
    /// Name of the move command that takes this exit (e.g. `east`).
    pub direction: Option<NameKey>,
}

/// A conversation: a prompt followed by numbered choices.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DialogData {
    /// Text shown before the options.
    pub prompt: String,
    /// Options in display order.
    pub options: Vec<DialogOption>,
}

/// One selectable line of a dialog.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DialogOption {
    /// What the player says.
    pub text: String,
    /// What the other side answers.
    pub reply: String,
    /// Effects applied when chosen.
    pub effects: Vec<Effect>,
    /// Pruned from the dialog once chosen.
    pub once: bool,
}

impl DialogOption {
    /// Creates an option with a reply and no effects.
    #[must_use]
    pub fn new(text: impl Into<String>, reply: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            reply: reply.into(),
            effects: Vec::new(),
            once: false,
        }
    }

    /// Adds an effect applied when the option is chosen.
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Marks the option as removable after it has been chosen.
    #[must_use]
    pub fn once(mut self) -> Self {
        self.once = true;
        self
    }
}

/// A quantity of one item type inside a container.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Stack {
    /// The item type.
    pub item: NameKey,
    /// How many units are held. Never zero.
    pub quantity: u32,
}

/// Ordered stacks of items held by a location, pawn, or item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Container {
    stacks: Vec<Stack>,
}

impl Container {
    /// Creates an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many units of `item` are held.
    #[must_use]
    pub fn quantity_of(&self, item: &NameKey) -> u32 {
        self.stacks
            .iter()
            .find(|s| &s.item == item)
            .map_or(0, |s| s.quantity)
    }

    /// Returns true if at least one unit of `item` is held.
    #[must_use]
    pub fn holds(&self, item: &NameKey) -> bool {
        self.quantity_of(item) > 0
    }

    /// Adds units of `item`, merging into an existing stack.
    pub fn add(&mut self, item: NameKey, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.stacks.iter_mut().find(|s| s.item == item) {
            Some(stack) => stack.quantity = stack.quantity.saturating_add(quantity),
            None => self.stacks.push(Stack { item, quantity }),
        }
    }

    /// Removes units of `item`.
    ///
    /// Returns false and changes nothing if fewer than `quantity` are held.
    pub fn remove(&mut self, item: &NameKey, quantity: u32) -> bool {
        let Some(index) = self.stacks.iter().position(|s| &s.item == item) else {
            return quantity == 0;
        };
        let stack = &mut self.stacks[index];
        if stack.quantity < quantity {
            return false;
        }
        stack.quantity -= quantity;
        if stack.quantity == 0 {
            self.stacks.remove(index);
        }
        true
    }

    /// Removes every unit of `item`, returning how many were held.
    pub fn remove_all(&mut self, item: &NameKey) -> u32 {
        let held = self.quantity_of(item);
        self.stacks.retain(|s| &s.item != item);
        held
    }

    /// Iterates stacks in insertion order.
    pub fn stacks(&self) -> impl Iterator<Item = &Stack> {
        self.stacks.iter()
    }

    /// Returns true if nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }
}
