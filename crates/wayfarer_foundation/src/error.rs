//! Error types for the Wayfarer engine.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::validation::ValidationCode;

/// Result alias used across all Wayfarer crates.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Wayfarer operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a configuration error for a rejected name, hotkey, or alias.
    #[must_use]
    pub fn configuration(name: impl Into<String>, code: ValidationCode) -> Self {
        Self::new(ErrorKind::Configuration {
            name: name.into(),
            code,
        })
    }

    /// Creates an unknown entity error.
    #[must_use]
    pub fn unknown_entity(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownEntity(name.into()))
    }

    /// Creates a wrong-kind error.
    #[must_use]
    pub fn wrong_kind(name: impl Into<String>, expected: &'static str) -> Self {
        Self::new(ErrorKind::WrongKind {
            name: name.into(),
            expected,
        })
    }

    /// Creates a persistence error.
    #[must_use]
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Persistence(message.into()))
    }

    /// Returns the validation code if this is a configuration error.
    #[must_use]
    pub fn validation_code(&self) -> Option<ValidationCode> {
        match &self.kind {
            ErrorKind::Configuration { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A name, hotkey, or alias failed validation while building content.
    #[error("configuration error for '{name}': {code}")]
    Configuration {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        code: ValidationCode,
    },

    /// No entity with this name exists in the registry.
    #[error("unknown entity: {0}")]
    UnknownEntity(String),

    /// The entity exists but lacks the required capability.
    #[error("entity '{name}' is not a {expected}")]
    WrongKind {
        /// The entity that was looked up.
        name: String,
        /// The capability that was expected.
        expected: &'static str,
    },

    /// A save slot name is unusable.
    #[error("invalid save name: {0}")]
    InvalidSaveName(String),

    /// Saving or loading a snapshot failed.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Encoding or decoding a snapshot failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Reading from or writing to an I/O adapter or file failed.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Level, command, or file being processed.
    pub source: Option<String>,
    /// Chain of operations that led here, outermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  while {frame}")?;
            }
        }
        Ok(())
    }
}
