//! Core types shared by every Wayfarer layer.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`NameKey`] - Case-insensitive normalized entity names
//! - [`ValidationCode`] - Outcome codes of name and hotkey validation
//! - Naming limits ([`MAX_NAME_LEN`], [`MAX_HOTKEY_LEN`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod name;
pub mod validation;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use name::{MAX_HOTKEY_LEN, MAX_NAME_LEN, NameKey, SENTENCE_PUNCTUATION, is_typeable};
pub use validation::ValidationCode;
