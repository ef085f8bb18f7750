//! Operation parser for Wayfarer.
//!
//! This crate turns a line of player input like "put 2 coins in chest" into
//! an [`Operation`] the engine can run.
//!
//! # Architecture
//!
//! ```text
//! "put 2 coins in chest"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["put", "2", "coins", "in", "chest"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VERB LOOKUP     │  → command `put`, one token consumed
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PREPOSITION     │  → direct "2 coins", indirect "chest"
//! │ SPLIT           │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ QUANTITY        │  → quantity 2, direct "coins"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SCOPE           │  → inventory, then location, then registry
//! │ RESOLUTION      │
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw input to tokens
//! - [`vocabulary`] - Verb phrases of the active commands
//! - [`noun_phrase`] - Object phrases and quantities
//! - [`scope`] - Entity visibility for name resolution
//! - [`operation`] - The parsed form of one line
//! - [`parser`] - Pipeline orchestration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod noun_phrase;
pub mod operation;
pub mod parser;
pub mod scope;
pub mod tokenizer;
pub mod vocabulary;

pub use noun_phrase::NounPhrase;
pub use operation::{Operation, SEGMENT_COMMAND, SEGMENT_REST, SEGMENT_VERB};
pub use parser::{OperationParser, ParseResult};
pub use scope::{Scope, ScopeTier};
pub use tokenizer::{InputToken, InputTokenizer};
pub use vocabulary::{VerbForm, VerbMatch, VerbTable};
