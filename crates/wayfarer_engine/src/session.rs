//! Session state for one game.
//!
//! The [`GameSession`] is the single context object every command, condition,
//! and event works against: the registry, the player reference, the active
//! command list, the pending output, and the turn bookkeeping.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use wayfarer_foundation::{Error, ErrorContext, ErrorKind, NameKey, Result};
use wayfarer_parser::Operation;
use wayfarer_storage::{Entity, Registry};

use crate::io::GameIo;
use crate::level::Level;
use crate::snapshot::{Snapshot, SnapshotStore};
use crate::sweep::{self, SweepReport};

/// The collaborators a turn may reach: the terminal and the save store.
pub struct Ports<'a> {
    /// Terminal adapter.
    pub io: &'a mut dyn GameIo,
    /// Snapshot store.
    pub store: &'a mut dyn SnapshotStore,
}

impl<'a> Ports<'a> {
    /// Bundles the collaborators of a turn.
    pub fn new(io: &'a mut dyn GameIo, store: &'a mut dyn SnapshotStore) -> Self {
        Self { io, store }
    }
}

/// Implementation of a [`Behavior::Custom`](wayfarer_storage::Behavior::Custom) command.
pub type CommandHandler = fn(&mut GameSession, &Operation, &mut Ports<'_>) -> Result<()>;

/// Where the session is within a turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for input.
    #[default]
    Idle,
    /// A command is running.
    CommandRunning,
    /// Events are being swept.
    ConditionSweep,
}

/// One game in progress.
#[derive(Default)]
pub struct GameSession {
    registry: Registry,
    player: NameKey,
    active: Vec<NameKey>,
    output: Vec<String>,
    turns: u64,
    suppress_next_sweep: bool,
    finished: bool,
    state: TurnState,
    handlers: HashMap<String, CommandHandler>,
    level: Option<Rc<dyn Level>>,
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("entities", &self.registry.len())
            .field("player", &self.player)
            .field("active", &self.active)
            .field("turns", &self.turns)
            .field("suppress_next_sweep", &self.suppress_next_sweep)
            .field("finished", &self.finished)
            .field("state", &self.state)
            .field("level", &self.level.as_ref().map(|l| l.name().to_string()))
            .finish_non_exhaustive()
    }
}

impl GameSession {
    /// Creates an empty session with no level loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // New game
    // =========================================================================

    /// Starts `level` as a new game.
    ///
    /// Clears the registry, lets the level populate it, then runs one sweep
    /// out of band so that setup events fire before the first prompt.
    ///
    /// # Errors
    ///
    /// Returns any configuration error the level raises, or an error from a
    /// collaborator during the opening sweep.
    pub fn start(&mut self, level: Rc<dyn Level>, ports: &mut Ports<'_>) -> Result<SweepReport> {
        tracing::info!(level = level.name(), "starting new game");
        self.registry.clear();
        self.active.clear();
        self.player = NameKey::default();
        self.turns = 0;
        self.finished = false;
        self.suppress_next_sweep = false;
        self.state = TurnState::Idle;
        level.build(self).map_err(|e| {
            let context = ErrorContext::new()
                .with_source(format!("level '{}'", level.name()))
                .with_frame("building the starting world");
            e.with_context(context)
        })?;
        if self.player_entity().is_none() {
            return Err(Error::unknown_entity(self.player.as_str()));
        }
        self.level = Some(level);
        sweep::sweep(self, None, ports)
    }

    /// Restarts the current level.
    ///
    /// # Errors
    ///
    /// Returns an internal error if no level was started, or any error
    /// [`GameSession::start`] returns.
    pub fn restart(&mut self, ports: &mut Ports<'_>) -> Result<SweepReport> {
        let level = self
            .level
            .clone()
            .ok_or_else(|| Error::new(ErrorKind::Internal("no level to restart".into())))?;
        self.start(level, ports)
    }

    /// The level last started, if any.
    #[must_use]
    pub fn level(&self) -> Option<&Rc<dyn Level>> {
        self.level.as_ref()
    }

    // =========================================================================
    // Registry and player
    // =========================================================================

    /// The registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The registry, mutably.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// The key of the pawn the player controls.
    #[must_use]
    pub fn player(&self) -> &NameKey {
        &self.player
    }

    /// Hands control to another pawn.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not a registered pawn.
    pub fn set_player(&mut self, name: &str) -> Result<()> {
        let key = self
            .registry
            .get_pawn(name)
            .map(|e| e.key().clone())
            .ok_or_else(|| Error::wrong_kind(name, "pawn"))?;
        self.player = key;
        Ok(())
    }

    /// The player's entity.
    #[must_use]
    pub fn player_entity(&self) -> Option<&Entity> {
        self.registry.get_key(&self.player).filter(|e| e.as_pawn().is_some())
    }

    /// The location the player stands in.
    #[must_use]
    pub fn player_location(&self) -> Option<NameKey> {
        self.player_entity()
            .and_then(Entity::as_pawn)
            .map(|p| p.location.clone())
    }

    // =========================================================================
    // Active commands
    // =========================================================================

    /// Active commands in activation order.
    #[must_use]
    pub fn active_commands(&self) -> &[NameKey] {
        &self.active
    }

    /// Returns true if the command is active.
    #[must_use]
    pub fn is_active(&self, name: &str) -> bool {
        let key = NameKey::new(name);
        self.active.contains(&key)
    }

    /// Makes a registered command available to the parser.
    ///
    /// Returns false if `name` is not a command or is already active.
    pub fn activate(&mut self, name: &str) -> bool {
        let Some(key) = self.registry.get_command(name).map(|e| e.key().clone()) else {
            tracing::warn!(command = name, "cannot activate unknown command");
            return false;
        };
        if self.active.contains(&key) {
            return false;
        }
        self.active.push(key);
        true
    }

    /// Withdraws a command from the parser.
    ///
    /// Returns false if it was not active.
    pub fn deactivate(&mut self, name: &str) -> bool {
        let key = NameKey::new(name);
        let before = self.active.len();
        self.active.retain(|k| k != &key);
        self.active.len() != before
    }

    /// Registers the implementation of a custom behavior.
    pub fn register_handler(&mut self, name: impl Into<String>, handler: CommandHandler) {
        self.handlers.insert(name.into(), handler);
    }

    /// Looks up a custom behavior implementation.
    #[must_use]
    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.handlers.get(name).copied()
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Appends a paragraph to the pending output.
    pub fn say(&mut self, text: impl Into<String>) {
        self.output.push(text.into());
    }

    /// Takes the pending output, paragraphs separated by newlines.
    pub fn take_output(&mut self) -> String {
        let text = self.output.join("\n");
        self.output.clear();
        text
    }

    /// Returns true if output is pending.
    #[must_use]
    pub fn has_output(&self) -> bool {
        !self.output.is_empty()
    }

    /// Shows pending output through `io`.
    ///
    /// # Errors
    ///
    /// Returns an error if the adapter fails.
    pub fn flush(&mut self, io: &mut dyn GameIo) -> Result<()> {
        if self.has_output() {
            let text = self.take_output();
            io.display(&text, None)?;
        }
        Ok(())
    }

    // =========================================================================
    // Turn bookkeeping
    // =========================================================================

    /// Turns processed so far.
    #[must_use]
    pub fn turns(&self) -> u64 {
        self.turns
    }

    pub(crate) fn advance_turn(&mut self) {
        self.turns += 1;
    }

    /// Where the session is within a turn.
    #[must_use]
    pub fn state(&self) -> TurnState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: TurnState) {
        self.state = state;
    }

    /// Skips the sweep after the current command.
    ///
    /// Commands that replace the world (restart, load) set this.
    pub fn suppress_next_sweep(&mut self) {
        self.suppress_next_sweep = true;
    }

    /// Returns whether the next sweep is suppressed, clearing the flag.
    pub fn take_suppress(&mut self) -> bool {
        std::mem::take(&mut self.suppress_next_sweep)
    }

    /// Returns true once the game has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Ends the game.
    pub fn finish(&mut self) {
        self.finished = true;
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    /// Captures the resumable state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            registry: self.registry.clone(),
            active: self.active.clone(),
            player: self.player.clone(),
            turns: self.turns,
        }
    }

    /// Replaces the resumable state with `snapshot`.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the session unchanged, if the snapshot
    /// does not validate.
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<()> {
        snapshot.validate()?;
        self.registry = snapshot.registry;
        self.active = snapshot.active;
        self.player = snapshot.player;
        self.turns = snapshot.turns;
        self.finished = false;
        Ok(())
    }

    /// Saves a snapshot to `store`.
    ///
    /// # Errors
    ///
    /// Returns the store's error.
    pub fn save_to(&self, store: &mut dyn SnapshotStore, name: &str) -> Result<()> {
        store.save(name, &self.snapshot())?;
        tracing::info!(slot = name, turns = self.turns, "game saved");
        Ok(())
    }

    /// Loads a snapshot from `store`.
    ///
    /// # Errors
    ///
    /// Returns the store's error or a validation error; the session is left
    /// unchanged either way.
    pub fn load_from(&mut self, store: &mut dyn SnapshotStore, name: &str) -> Result<()> {
        let snapshot = store.load(name)?;
        self.restore(snapshot)?;
        tracing::info!(slot = name, turns = self.turns, "game loaded");
        Ok(())
    }
}
