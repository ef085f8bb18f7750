//! Wayfarer - Turn-based text adventure engine
//!
//! This crate re-exports all layers of the Wayfarer system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: wayfarer_runtime    - Terminal adapters, save files, CLI
//! Layer 3: wayfarer_engine     - Session, commands, conditions, events, turns
//! Layer 2: wayfarer_parser     - Tokenizer, vocabulary, noun phrases, scope
//! Layer 1: wayfarer_storage    - Entities, capabilities, registry, validation
//! Layer 0: wayfarer_foundation - Core types (NameKey, ValidationCode, Error)
//! ```

pub use wayfarer_engine as engine;
pub use wayfarer_foundation as foundation;
pub use wayfarer_parser as parser;
pub use wayfarer_runtime as runtime;
pub use wayfarer_storage as storage;
