//! Error handling for the VirtuShell core.
//!
//! Every fallible engine operation returns [`ShellResult`]. The `message`
//! field carries the exact line shown to the user, so the dispatcher can
//! surface any error as terminal output without rewording it; `kind` exists
//! for callers (and tests) that need to react to the error class rather
//! than its text.

use std::fmt;

/// Result type for all VirtuShell engine operations.
pub type ShellResult<T> = Result<T, ShellError>;

/// Main error type for all VirtuShell engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellError {
    pub kind: ErrorKind,
    pub message: String,
}

/// Categories of errors produced by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed operands (empty path, missing argument).
    Validation,
    /// A path segment or target entry does not exist.
    NotFound,
    /// The target entry already exists and the command refuses to clobber it.
    AlreadyExists,
    /// An entry exists but has the wrong kind (file where a directory is
    /// required, or the reverse).
    TypeMismatch,
    /// The command name is not registered.
    UnknownCommand,
    /// Engine invariant violation. Not reachable through command input.
    Internal,
}

impl ShellError {
    /// Create a new shell error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Create a validation error (missing or malformed operand).
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create an already-exists error.
    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyExists, message)
    }

    /// Create a type-mismatch error (file vs directory).
    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TypeMismatch, message)
    }

    /// Create a command-not-found error.
    pub fn command_not_found(command: &str) -> Self {
        Self::new(
            ErrorKind::UnknownCommand,
            format!("Command not found: {command}"),
        )
    }

    /// Create an internal invariant error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// The error class.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The user-facing line for this error.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The message is already phrased for the terminal.
        f.write_str(&self.message)
    }
}

impl std::error::Error for ShellError {}
