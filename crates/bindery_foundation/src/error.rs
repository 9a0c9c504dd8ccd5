//! Error types for Bindery.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::kind::Kind;

/// Convenience alias for results with the Bindery [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Bindery operations.
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

    /// Creates a type mismatch error from the two type names.
    #[must_use]
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::new(ErrorKind::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        })
    }

    /// Creates a kind mismatch error.
    #[must_use]
    pub fn kind_mismatch(expected: Kind, actual: Kind) -> Self {
        Self::new(ErrorKind::KindMismatch { expected, actual })
    }

    /// Creates a duplicate type definition error.
    #[must_use]
    pub fn duplicate_type(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateType(name.into()))
    }

    /// Creates an unknown type error.
    #[must_use]
    pub fn unknown_type(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownType(name.into()))
    }

    /// Creates an error for a value that has no canonical encoding.
    #[must_use]
    pub fn not_encodable(what: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotEncodable(what.into()))
    }

    /// Creates an encoder failure error.
    #[must_use]
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Encoding(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A value of one type cannot populate a field of another.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Name of the destination type.
        expected: String,
        /// Name of the source type.
        actual: String,
    },

    /// A value's kind does not fit the destination kind.
    #[error("kind mismatch: expected {expected}, got {actual}")]
    KindMismatch {
        /// Kind of the destination type.
        expected: Kind,
        /// Kind of the value.
        actual: Kind,
    },

    /// A type name was defined twice.
    #[error("duplicate type: {0}")]
    DuplicateType(String),

    /// A type name was not found.
    #[error("unknown type: {0}")]
    UnknownType(String),

    /// A value has no canonical encoding.
    #[error("not encodable: {0}")]
    NotEncodable(String),

    /// The encoder failed.
    #[error("encoding failed: {0}")]
    Encoding(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Field, cache, or call site label.
    pub source: Option<String>,
    /// Stack of enclosing operations, outermost last.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source label.
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
            write!(f, "at {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
