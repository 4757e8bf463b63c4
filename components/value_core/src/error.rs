//! Script error values and engine error types
//!
//! Two distinct concerns live here:
//! - `ErrorData` is the *inspected* value: a script-level error object with a
//!   name, message, captured stack text, optional cause chain and extra
//!   properties.
//! - `JsError`/`JsResult` is the *engine* error channel: what property
//!   getters, custom inspection hooks and native calls raise back into the
//!   host.

use std::fmt;

use thiserror::Error;

use crate::object::{Prototype, PropertyBag};
use crate::value::JsValue;

/// The kind of script error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Generic Error
    Error,
    /// TypeError - type mismatch errors
    TypeError,
    /// ReferenceError - undefined variable access
    ReferenceError,
    /// SyntaxError - parse/syntax errors
    SyntaxError,
    /// RangeError - numeric range violations
    RangeError,
    /// URIError - malformed URI
    URIError,
    /// EvalError - eval failures (legacy)
    EvalError,
    /// AggregateError - multiple errors combined
    AggregateError,
}

impl ErrorKind {
    /// Get the error name as a string
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Error => "Error",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::ReferenceError => "ReferenceError",
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::RangeError => "RangeError",
            ErrorKind::URIError => "URIError",
            ErrorKind::EvalError => "EvalError",
            ErrorKind::AggregateError => "AggregateError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error raised by engine operations (getter evaluation, native calls,
/// invalid option values)
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {message}")]
pub struct JsError {
    /// The error classification
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl JsError {
    /// Create a new generic error
    pub fn new(message: impl Into<String>) -> Self {
        JsError {
            kind: ErrorKind::Error,
            message: message.into(),
        }
    }

    /// Create a TypeError
    pub fn type_error(message: impl Into<String>) -> Self {
        JsError {
            kind: ErrorKind::TypeError,
            message: message.into(),
        }
    }

    /// Create a RangeError
    pub fn range_error(message: impl Into<String>) -> Self {
        JsError {
            kind: ErrorKind::RangeError,
            message: message.into(),
        }
    }

    /// Create a ReferenceError
    pub fn reference_error(message: impl Into<String>) -> Self {
        JsError {
            kind: ErrorKind::ReferenceError,
            message: message.into(),
        }
    }
}

/// Result type for engine operations
pub type JsResult<T> = Result<T, JsError>;

/// A script-level error value
///
/// Stack text is captured at construction time as the full multi-line block
/// (`Name: message\n    at frame...`), matching what a runtime's stack
/// accessor would return. An absent stack renders through the
/// `Name: message` fallback.
#[derive(Debug, Clone)]
pub struct ErrorData {
    /// The error's `name` property
    pub name: String,
    /// The error's `message` property
    pub message: String,
    /// Captured stack text, including the `Name: message` header line
    pub stack: Option<String>,
    /// Optional `cause` chain link
    pub cause: Option<JsValue>,
    /// Additional own properties
    pub extras: PropertyBag,
    /// Prototype link
    pub prototype: Prototype,
}

impl ErrorData {
    /// Create an error value of the given kind
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        ErrorData {
            name: kind.name().to_string(),
            message: message.into(),
            stack: None,
            cause: None,
            extras: PropertyBag::new(),
            prototype: Prototype::Ordinary,
        }
    }

    /// Create an error value with a custom name
    pub fn with_name(name: impl Into<String>, message: impl Into<String>) -> Self {
        ErrorData {
            name: name.into(),
            message: message.into(),
            stack: None,
            cause: None,
            extras: PropertyBag::new(),
            prototype: Prototype::Ordinary,
        }
    }

    /// Attach captured stack text
    pub fn set_stack(&mut self, stack: impl Into<String>) {
        self.stack = Some(stack.into());
    }

    /// Attach a cause value
    pub fn set_cause(&mut self, cause: JsValue) {
        self.cause = Some(cause);
    }

    /// `Error.prototype.toString` equivalent: `Name: message`, degrading to
    /// just the name for empty messages
    pub fn header(&self) -> String {
        if self.message.is_empty() {
            self.name.clone()
        } else {
            format!("{}: {}", self.name, self.message)
        }
    }

    /// The stack text used for rendering: the captured stack, or the header
    /// when no stack was captured
    pub fn stack_string(&self) -> String {
        match &self.stack {
            Some(stack) => stack.clone(),
            None => self.header(),
        }
    }
}
