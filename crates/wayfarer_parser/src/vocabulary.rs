//! Verb vocabulary built from the active command list.
//!
//! Every active command contributes its name, its hotkey, and, for actions,
//! each alias. Aliases may span several words (`pick up`), so verb lookup
//! matches word sequences against the start of the input.

use wayfarer_foundation::NameKey;
use wayfarer_storage::{Entity, Registry};

use crate::tokenizer::InputToken;

/// How a verb phrase refers to its command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerbForm {
    /// The command's own name
    Name,
    /// The command's hotkey
    Hotkey,
    /// One of an action's aliases
    Alias,
}

/// One invocable phrase.
#[derive(Clone, Debug)]
pub struct VerbEntry {
    /// Command invoked by the phrase
    pub command: NameKey,
    /// Lowercase words of the phrase
    pub words: Vec<String>,
    /// Which part of the command the phrase came from
    pub form: VerbForm,
}

/// A verb recognized at the start of an input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerbMatch {
    /// The matched command
    pub command: NameKey,
    /// Number of input tokens the verb consumed
    pub consumed: usize,
    /// Which part of the command matched
    pub form: VerbForm,
}

/// Verb phrases of every active command, in activation order.
#[derive(Clone, Debug, Default)]
pub struct VerbTable {
    entries: Vec<VerbEntry>,
}

impl VerbTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table for the commands named in `active`.
    ///
    /// Names that are not registered commands are skipped.
    #[must_use]
    pub fn from_active(registry: &Registry, active: &[NameKey]) -> Self {
        let mut table = Self::new();
        for key in active {
            match registry.get_key(key) {
                Some(entity) if entity.as_command().is_some() => table.add_command(entity),
                _ => tracing::debug!(command = %key, "active command is not registered"),
            }
        }
        table
    }

    /// Adds the name, hotkey, and aliases of a command entity.
    pub fn add_command(&mut self, entity: &Entity) {
        let Some(command) = entity.as_command() else {
            return;
        };
        let key = entity.key().clone();
        self.push(&key, entity.name(), VerbForm::Name);
        self.push(&key, &command.hotkey, VerbForm::Hotkey);
        for alias in command.aliases() {
            self.push(&key, alias, VerbForm::Alias);
        }
    }

    fn push(&mut self, command: &NameKey, phrase: &str, form: VerbForm) {
        let words: Vec<String> = phrase.split_whitespace().map(str::to_lowercase).collect();
        if words.is_empty() {
            return;
        }
        self.entries.push(VerbEntry {
            command: command.clone(),
            words,
            form,
        });
    }

    /// Finds the verb at the start of `tokens`.
    ///
    /// The longest matching phrase wins; among equally long matches the
    /// command activated first wins. Quoted tokens never match a verb.
    #[must_use]
    pub fn lookup(&self, tokens: &[InputToken]) -> Option<VerbMatch> {
        let mut best: Option<&VerbEntry> = None;
        for entry in &self.entries {
            let len = entry.words.len();
            if len > tokens.len() {
                continue;
            }
            let matched = entry
                .words
                .iter()
                .zip(tokens)
                .all(|(word, token)| token.is_word(word));
            if matched && best.is_none_or(|b| len > b.words.len()) {
                best = Some(entry);
            }
        }
        best.map(|entry| VerbMatch {
            command: entry.command.clone(),
            consumed: entry.words.len(),
            form: entry.form,
        })
    }

    /// Iterates the entries in activation order.
    pub fn entries(&self) -> impl Iterator<Item = &VerbEntry> {
        self.entries.iter()
    }

    /// Returns true if no command is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
