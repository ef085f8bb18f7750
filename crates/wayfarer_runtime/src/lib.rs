//! Terminal shell, save files, and command line for Wayfarer.
//!
//! This crate provides:
//! - [`Runner`] - The game loop over a terminal adapter and a save store
//! - [`ConsoleIo`] and [`StreamIo`] - Terminal adapters
//! - [`FileStore`] - `MessagePack` save files, one per slot
//! - [`Arguments`] and [`RuntimeConfig`] - Command-line configuration
//! - [`OldMill`] - The level the binary ships with

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod console;
pub mod handoff;
pub mod logging;
pub mod runner;
pub mod sample;
pub mod serialize;

pub use config::{AdapterKind, Arguments, RuntimeConfig};
pub use console::ConsoleIo;
pub use handoff::StreamIo;
pub use runner::Runner;
pub use sample::OldMill;
pub use serialize::{FileStore, from_bytes, load_from_file, save_to_file, to_bytes};
