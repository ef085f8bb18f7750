//! Entity storage and name validation for Wayfarer.
//!
//! This crate provides:
//! - [`Entity`] - A named game object with notes, status counters, and capabilities
//! - [`Kind`] - The tagged union of capabilities (location, item, pawn, command, ...)
//! - [`Registry`] - The sole owner of every entity, keyed by case-insensitive name
//! - [`validator`] - Name, hotkey, and alias validation against the registry

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod capability;
pub mod command;
pub mod entity;
pub mod registry;
pub mod rule;
pub mod validator;

pub use capability::{Container, DialogData, DialogOption, ExitData, ItemData, PawnData, Stack};
pub use command::{ActionData, Behavior, CommandData};
pub use entity::{Entity, Kind};
pub use registry::Registry;
pub use rule::{ConditionData, Effect, EventData, Predicate};
