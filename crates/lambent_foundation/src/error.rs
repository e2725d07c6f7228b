//! Error types for Lambent.
//!
//! Uses `thiserror` for ergonomic error definition. Every error can carry the
//! printed form it was raised at; the display is `message @ form`.

use std::fmt;

use thiserror::Error;

use crate::form::Form;
use crate::pretty::print_raw_form;

/// The main error type for Lambent operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}{}", at_form(.form.as_deref()))]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// The offending form, already rendered as source text.
    pub form: Option<String>,
}

fn at_form(form: Option<&str>) -> String {
    form.map(|f| format!(" @ {f}")).unwrap_or_default()
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, form: None }
    }

    /// Attaches the offending form.
    #[must_use]
    pub fn at(mut self, form: &Form) -> Self {
        self.form = Some(print_raw_form(form));
        self
    }

    /// Creates a syntax error raised by the validator.
    #[must_use]
    pub fn syntax(message: impl Into<String>, form: &Form) -> Self {
        Self::new(ErrorKind::Syntax(message.into())).at(form)
    }

    /// Creates an undefined identifier error.
    #[must_use]
    pub fn undefined_identifier(name: impl Into<String>, form: &Form) -> Self {
        Self::new(ErrorKind::UndefinedIdentifier(name.into())).at(form)
    }

    /// Creates an error for reading a declared but unassigned identifier.
    #[must_use]
    pub fn uninitialized(name: impl Into<String>, form: &Form) -> Self {
        Self::new(ErrorKind::Uninitialized(name.into())).at(form)
    }

    /// Creates an empty application error.
    #[must_use]
    pub fn empty_application(form: &Form) -> Self {
        Self::new(ErrorKind::EmptyApplication).at(form)
    }

    /// Creates an arity mismatch error.
    #[must_use]
    pub fn arity_mismatch(expected: usize, actual: usize, form: &Form) -> Self {
        Self::new(ErrorKind::ArityMismatch { expected, actual }).at(form)
    }

    /// Creates a type error.
    #[must_use]
    pub fn type_error(message: impl Into<String>, form: &Form) -> Self {
        Self::new(ErrorKind::Type(message.into())).at(form)
    }

    /// Creates an error for an identifier character the host cannot spell.
    #[must_use]
    pub fn unsupported_character(c: char, form: &Form) -> Self {
        Self::new(ErrorKind::UnsupportedCharacter(c)).at(form)
    }

    /// Creates a scope error (a form used outside its valid context).
    #[must_use]
    pub fn scope(message: impl Into<String>, form: &Form) -> Self {
        Self::new(ErrorKind::Scope(message.into())).at(form)
    }

    /// Creates a reader error.
    #[must_use]
    pub fn parse(message: impl Into<String>, line: u32, column: u32, context: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse {
            message: message.into(),
            line,
            column,
            context: context.into(),
        })
    }

    /// Creates an import failure.
    #[must_use]
    pub fn import(module: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Import {
            module: module.into(),
            message: message.into(),
        })
    }

    /// Creates a limit exceeded error.
    #[must_use]
    pub fn limit_exceeded(limit: SemanticLimit) -> Self {
        Self::new(ErrorKind::LimitExceeded(limit))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A special form was malformed.
    #[error("{0}")]
    Syntax(String),

    /// Identifier lookup failed.
    #[error("Undefined identifier '{0}'")]
    UndefinedIdentifier(String),

    /// Identifier was read before its initializer finished.
    #[error("Identifier '{0}' used before initialization")]
    Uninitialized(String),

    /// `()` in call position.
    #[error("Empty application")]
    EmptyApplication,

    /// Wrong number of arguments to a fixed-arity function.
    #[error("Argument count mismatch (expected {expected}, received {actual})")]
    ArityMismatch {
        /// Declared parameter count.
        expected: usize,
        /// Supplied argument count.
        actual: usize,
    },

    /// A value had the wrong shape for the operation.
    #[error("{0}")]
    Type(String),

    /// Identifier character with no host-safe substitution.
    #[error("Unsupported identifier character '{0}'")]
    UnsupportedCharacter(char),

    /// A form appeared outside the context it is valid in.
    #[error("{0}")]
    Scope(String),

    /// Reader error.
    #[error("parse error at {line}:{column}: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
        /// The source line where the error occurred.
        context: String,
    },

    /// The import resolver failed.
    #[error("import '{module}' failed: {message}")]
    Import {
        /// The requested module name.
        module: String,
        /// The resolver's explanation.
        message: String,
    },

    /// A configured limit was exceeded.
    #[error("limit exceeded: {0}")]
    LimitExceeded(SemanticLimit),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Limits the engines enforce instead of overflowing the native stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SemanticLimit {
    /// Maximum evaluation or compilation depth exceeded. Every nested form
    /// the walker enters counts once.
    MaxDepth {
        /// The configured limit.
        limit: usize,
    },
    /// Source or data nested deeper than the readers and walkers accept.
    MaxNesting {
        /// The nesting limit.
        limit: usize,
    },
}

impl fmt::Display for SemanticLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxDepth { limit } => write!(f, "max depth ({limit}) exceeded"),
            Self::MaxNesting { limit } => write!(f, "max nesting depth ({limit}) exceeded"),
        }
    }
}

/// Result alias using the Lambent error type.
pub type Result<T> = std::result::Result<T, Error>;
