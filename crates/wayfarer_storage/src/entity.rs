//! Entities: named game objects.
//!
//! Every game object is an [`Entity`]: a unique name, a map of free-form
//! notes (descriptions and other output text), a map of status counters, and
//! exactly one [`Kind`] carrying its capability record. Locations, pawns, and
//! container items additionally carry a [`Container`].
//!
//! Building an entity has no side effects. It becomes visible to lookups only
//! once it is added to a [`Registry`](crate::Registry), normally through
//! [`Registry::create`](crate::Registry::create), which validates first.

use std::collections::BTreeMap;

use wayfarer_foundation::NameKey;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::capability::{Container, DialogData, DialogOption, ExitData, ItemData, PawnData};
use crate::command::{ActionData, Behavior, CommandData};
use crate::rule::{ConditionData, Effect, EventData, Predicate};

/// Note key holding the text shown by `look` and `examine`.
pub const DESCRIPTION: &str = "description";

/// Status key marking an entity as hidden.
pub const HIDDEN: &str = "hidden";

/// Status key set on a location once the player has entered it.
pub const VISITED: &str = "visited";

/// The capability an entity carries.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Kind {
    /// A place the player can stand in.
    Location,
    /// A carryable item type.
    Item(ItemData),
    /// A character.
    Pawn(PawnData),
    /// An invocable verb.
    Command(CommandData),
    /// A predicate checked during the sweep.
    Condition(ConditionData),
    /// Effects applied when all its conditions hold.
    Event(EventData),
    /// A passage between locations.
    Exit(ExitData),
    /// A conversation.
    Dialog(DialogData),
}

impl Kind {
    /// Short lower-case label used in messages and errors.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::Item(_) => "item",
            Self::Pawn(_) => "pawn",
            Self::Command(_) => "command",
            Self::Condition(_) => "condition",
            Self::Event(_) => "event",
            Self::Exit(_) => "exit",
            Self::Dialog(_) => "dialog",
        }
    }
}

/// A named, registry-tracked game object.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Entity {
    name: String,
    key: NameKey,
    notes: BTreeMap<String, String>,
    status: BTreeMap<String, i64>,
    kind: Kind,
    container: Option<Container>,
}

impl Entity {
    /// Creates an entity of the given kind with no notes or status.
    #[must_use]
    pub fn new(name: &str, kind: Kind) -> Self {
        let name = name.trim().to_string();
        Self {
            key: NameKey::new(&name),
            name,
            notes: BTreeMap::new(),
            status: BTreeMap::new(),
            kind,
            container: None,
        }
    }

    // =========================================================================
    // Constructors per kind
    // =========================================================================

    /// Creates a location with an empty container.
    #[must_use]
    pub fn location(name: &str) -> Self {
        Self::new(name, Kind::Location).with_container(Container::new())
    }

    /// Creates an item type with the given unit weight.
    #[must_use]
    pub fn item(name: &str, weight: f64) -> Self {
        Self::new(name, Kind::Item(ItemData { weight }))
    }

    /// Creates a pawn standing in `location`.
    #[must_use]
    pub fn pawn(name: &str, location: &str, max_weight: f64) -> Self {
        Self::new(
            name,
            Kind::Pawn(PawnData {
                location: NameKey::new(location),
                max_weight,
                dialog: None,
            }),
        )
        .with_container(Container::new())
    }

    /// Creates an exit from `origin` to `destination`.
    #[must_use]
    pub fn exit(name: &str, origin: &str, destination: &str) -> Self {
        Self::new(
            name,
            Kind::Exit(ExitData {
                origin: NameKey::new(origin),
                destination: NameKey::new(destination),
                direction: None,
            }),
        )
    }

    /// Creates a plain command.
    #[must_use]
    pub fn command(name: &str, hotkey: &str, behavior: Behavior) -> Self {
        Self::new(
            name,
            Kind::Command(CommandData {
                hotkey: hotkey.trim().to_string(),
                behavior,
                action: None,
                summary: String::new(),
            }),
        )
    }

    /// Creates an action: a command with aliases and prepositions.
    #[must_use]
    pub fn action(name: &str, hotkey: &str, behavior: Behavior) -> Self {
        Self::new(
            name,
            Kind::Command(CommandData {
                hotkey: hotkey.trim().to_string(),
                behavior,
                action: Some(ActionData::default()),
                summary: String::new(),
            }),
        )
    }

    /// Creates a condition.
    #[must_use]
    pub fn condition(name: &str, predicate: Predicate) -> Self {
        Self::new(
            name,
            Kind::Condition(ConditionData {
                predicate,
                negated: false,
            }),
        )
    }

    /// Creates an event with no conditions and no effects.
    #[must_use]
    pub fn event(name: &str) -> Self {
        Self::new(name, Kind::Event(EventData::default()))
    }

    /// Creates a dialog with the given prompt.
    #[must_use]
    pub fn dialog(name: &str, prompt: impl Into<String>) -> Self {
        Self::new(
            name,
            Kind::Dialog(DialogData {
                prompt: prompt.into(),
                options: Vec::new(),
            }),
        )
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Sets a note.
    #[must_use]
    pub fn with_note(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.notes.insert(key.into(), text.into());
        self
    }

    /// Sets the description note.
    #[must_use]
    pub fn with_description(self, text: impl Into<String>) -> Self {
        self.with_note(DESCRIPTION, text)
    }

    /// Sets a status counter.
    #[must_use]
    pub fn with_status(mut self, key: impl Into<String>, value: i64) -> Self {
        self.set_status(key, value);
        self
    }

    /// Marks the entity hidden.
    #[must_use]
    pub fn hidden(self) -> Self {
        self.with_status(HIDDEN, 1)
    }

    /// Attaches a container capability.
    #[must_use]
    pub fn with_container(mut self, container: Container) -> Self {
        self.container = Some(container);
        self
    }

    /// Sets the exit direction. No effect on other kinds.
    #[must_use]
    pub fn with_direction(mut self, direction: &str) -> Self {
        if let Kind::Exit(exit) = &mut self.kind {
            exit.direction = Some(NameKey::new(direction));
        }
        self
    }

    /// Adds an alias. No effect unless the entity is an action.
    #[must_use]
    pub fn with_alias(mut self, alias: &str) -> Self {
        if let Some(action) = self.action_data_mut() {
            action.aliases.push(alias.trim().to_string());
        }
        self
    }

    /// Adds a preposition. No effect unless the entity is an action.
    #[must_use]
    pub fn with_preposition(mut self, preposition: &str) -> Self {
        if let Some(action) = self.action_data_mut() {
            action.prepositions.push(preposition.trim().to_lowercase());
        }
        self
    }

    /// Sets the help summary of a command.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        if let Kind::Command(cmd) = &mut self.kind {
            cmd.summary = summary.into();
        }
        self
    }

    /// Inverts a condition.
    #[must_use]
    pub fn negated(mut self) -> Self {
        if let Kind::Condition(cond) = &mut self.kind {
            cond.negated = !cond.negated;
        }
        self
    }

    /// Attaches a condition to an event.
    #[must_use]
    pub fn when(mut self, condition: &str) -> Self {
        if let Kind::Event(event) = &mut self.kind {
            event.conditions.push(NameKey::new(condition));
        }
        self
    }

    /// Appends an effect to an event.
    #[must_use]
    pub fn then(mut self, effect: Effect) -> Self {
        if let Kind::Event(event) = &mut self.kind {
            event.effects.push(effect);
        }
        self
    }

    /// Appends an option to a dialog.
    #[must_use]
    pub fn with_option(mut self, option: DialogOption) -> Self {
        if let Kind::Dialog(dialog) = &mut self.kind {
            dialog.options.push(option);
        }
        self
    }

    /// Sets the dialog a pawn starts when talked to.
    #[must_use]
    pub fn with_dialog(mut self, dialog: &str) -> Self {
        if let Kind::Pawn(pawn) = &mut self.kind {
            pawn.dialog = Some(NameKey::new(dialog));
        }
        self
    }

    fn action_data_mut(&mut self) -> Option<&mut ActionData> {
        match &mut self.kind {
            Kind::Command(cmd) => cmd.action.as_mut(),
            _ => None,
        }
    }

    // =========================================================================
    // Identity, notes and status
    // =========================================================================

    /// Display name, original case preserved.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized registry key.
    #[must_use]
    pub fn key(&self) -> &NameKey {
        &self.key
    }

    /// Returns the note stored under `key`.
    #[must_use]
    pub fn note(&self, key: &str) -> Option<&str> {
        self.notes.get(key).map(String::as_str)
    }

    /// Sets a note.
    pub fn set_note(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.notes.insert(key.into(), text.into());
    }

    /// Returns the description note.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.note(DESCRIPTION)
    }

    /// Returns a status counter, zero when absent.
    #[must_use]
    pub fn status(&self, key: &str) -> i64 {
        self.status.get(key).copied().unwrap_or(0)
    }

    /// Returns true if the status counter is above zero.
    #[must_use]
    pub fn is_set(&self, key: &str) -> bool {
        self.status(key) > 0
    }

    /// Sets a status counter. Values at or below zero remove it.
    pub fn set_status(&mut self, key: impl Into<String>, value: i64) {
        let key = key.into();
        if value > 0 {
            self.status.insert(key, value);
        } else {
            self.status.remove(&key);
        }
    }

    /// Adds `delta` to a status counter.
    pub fn adjust_status(&mut self, key: impl Into<String>, delta: i64) {
        let key = key.into();
        let value = self.status(&key).saturating_add(delta);
        self.set_status(key, value);
    }

    /// Removes a status counter.
    pub fn clear_status(&mut self, key: &str) {
        self.status.remove(key);
    }

    /// Iterates the set status counters.
    pub fn statuses(&self) -> impl Iterator<Item = (&str, i64)> {
        self.status.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Returns true if the hidden status is set.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.is_set(HIDDEN)
    }

    // =========================================================================
    // Capabilities
    // =========================================================================

    /// Returns the kind.
    #[must_use]
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Returns the container capability.
    #[must_use]
    pub fn container(&self) -> Option<&Container> {
        self.container.as_ref()
    }

    /// Returns the container capability mutably.
    pub fn container_mut(&mut self) -> Option<&mut Container> {
        self.container.as_mut()
    }

    /// Returns true for locations.
    #[must_use]
    pub fn is_location(&self) -> bool {
        matches!(self.kind, Kind::Location)
    }

    /// Returns the item record.
    #[must_use]
    pub fn as_item(&self) -> Option<&ItemData> {
        match &self.kind {
            Kind::Item(item) => Some(item),
            _ => None,
        }
    }

    /// Returns the pawn record.
    #[must_use]
    pub fn as_pawn(&self) -> Option<&PawnData> {
        match &self.kind {
            Kind::Pawn(pawn) => Some(pawn),
            _ => None,
        }
    }

    /// Returns the pawn record mutably.
    pub fn as_pawn_mut(&mut self) -> Option<&mut PawnData> {
        match &mut self.kind {
            Kind::Pawn(pawn) => Some(pawn),
            _ => None,
        }
    }

    /// Returns the command record.
    #[must_use]
    pub fn as_command(&self) -> Option<&CommandData> {
        match &self.kind {
            Kind::Command(cmd) => Some(cmd),
            _ => None,
        }
    }

    /// Returns the condition record.
    #[must_use]
    pub fn as_condition(&self) -> Option<&ConditionData> {
        match &self.kind {
            Kind::Condition(cond) => Some(cond),
            _ => None,
        }
    }

    /// Returns the event record.
    #[must_use]
    pub fn as_event(&self) -> Option<&EventData> {
        match &self.kind {
            Kind::Event(event) => Some(event),
            _ => None,
        }
    }

    /// Returns the exit record.
    #[must_use]
    pub fn as_exit(&self) -> Option<&ExitData> {
        match &self.kind {
            Kind::Exit(exit) => Some(exit),
            _ => None,
        }
    }

    /// Returns the dialog record.
    #[must_use]
    pub fn as_dialog(&self) -> Option<&DialogData> {
        match &self.kind {
            Kind::Dialog(dialog) => Some(dialog),
            _ => None,
        }
    }

    /// Returns the dialog record mutably.
    pub fn as_dialog_mut(&mut self) -> Option<&mut DialogData> {
        match &mut self.kind {
            Kind::Dialog(dialog) => Some(dialog),
            _ => None,
        }
    }
}
