//! Game engine for Wayfarer.
//!
//! This crate runs a game: the session that owns the world, the built-in
//! commands, conditions and effects, dialogs, and the turn loop that ties
//! them together.
//!
//! # Turn Lifecycle
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                    TURN                      │
//! ├─────────────────────────────────────────────┤
//! │ 1. Parse line against the active commands    │
//! │ 2. Run the command                           │
//! │ 3. Unless suppressed: count the turn and     │
//! │    sweep every event in registration order   │
//! │ 4. Flush output to the terminal              │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`session`] - Game state and the collaborators a turn reaches
//! - [`processor`] - One turn of play
//! - [`commands`] - Built-in command implementations
//! - [`condition`] - Predicate evaluation
//! - [`effect`] - Effect application
//! - [`dialog`] - Numbered-choice conversations
//! - [`sweep`] - The per-turn event sweep
//! - [`level`] - Starting worlds and the built-in command set
//! - [`io`] - The terminal boundary
//! - [`snapshot`] - Save data and the store boundary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod commands;
pub mod condition;
pub mod dialog;
pub mod effect;
pub mod io;
pub mod level;
pub mod processor;
pub mod session;
pub mod snapshot;
pub mod sweep;

pub use io::{GameIo, ScriptedIo};
pub use level::{Level, install_standard_commands, standard_commands};
pub use processor::{TurnOutcome, run_turn};
pub use session::{CommandHandler, GameSession, Ports, TurnState};
pub use snapshot::{MemoryStore, Snapshot, SnapshotStore, validate_save_name};
pub use sweep::SweepReport;
