//! Error types for the Squawk system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// The main error type for Squawk operations.
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

    /// Creates a duplicate callsign error.
    #[must_use]
    pub fn duplicate_callsign(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateCallsign(name.into()))
    }

    /// Creates a recognizer failure.
    #[must_use]
    pub fn recognizer(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::Recognizer {
            name: name.into(),
            reason: reason.into(),
        })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A communicator with this callsign is already registered.
    #[error("duplicate callsign: {0}")]
    DuplicateCallsign(String),

    /// Callsigns must contain at least one non-space character.
    #[error("empty callsign")]
    EmptyCallsign,

    /// A payload recognizer failed while inspecting content.
    #[error("recognizer {name} failed: {reason}")]
    Recognizer {
        /// Name the recognizer registered under.
        name: String,
        /// What went wrong.
        reason: String,
    },

    /// Roster encoding or decoding failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// File system error.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or component name.
    pub source: Option<String>,
    /// The raw transmission being processed, if any.
    pub input: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the transmission being processed.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if let Some(input) = &self.input {
            if self.source.is_some() {
                write!(f, " ")?;
            }
            write!(f, "while reading \"{input}\"")?;
        }
        Ok(())
    }
}

/// Result type alias for Squawk operations.
pub type Result<T> = std::result::Result<T, Error>;
