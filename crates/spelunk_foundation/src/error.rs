//! Error types for the Spelunk engine.
//!
//! Uses `thiserror` for ergonomic error definition. Almost all errors here
//! are world-construction errors: a misconfigured world is a programming
//! mistake and building it must fail loudly rather than limp along with
//! silently overwritten exits or shadowed identifiers.

use thiserror::Error;

/// Convenient result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Spelunk operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a duplicate exit error.
    #[must_use]
    pub fn duplicate_exit(room: String, direction: String) -> Self {
        Self::new(ErrorKind::DuplicateExit { room, direction })
    }

    /// Creates a duplicate identifier error.
    #[must_use]
    pub fn duplicate_ident(ident: String) -> Self {
        Self::new(ErrorKind::DuplicateIdent(ident))
    }

    /// Creates an unknown room error.
    #[must_use]
    pub fn unknown_room(ident: String) -> Self {
        Self::new(ErrorKind::UnknownRoom(ident))
    }

    /// Creates an unknown item error.
    #[must_use]
    pub fn unknown_item(ident: String) -> Self {
        Self::new(ErrorKind::UnknownItem(ident))
    }

    /// Creates an unknown toggle error.
    #[must_use]
    pub fn unknown_toggle(ident: String) -> Self {
        Self::new(ErrorKind::UnknownToggle(ident))
    }

    /// Creates a no-inverse error for a direction that cannot be mirrored.
    #[must_use]
    pub fn no_inverse(direction: String) -> Self {
        Self::new(ErrorKind::NoInverse(direction))
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
    /// An exit direction was wired twice on the same room.
    #[error("duplicate exit: room {room} already has an exit {direction}")]
    DuplicateExit {
        /// Identifier of the room being wired.
        room: String,
        /// The direction that was already occupied.
        direction: String,
    },

    /// Two rooms, items, or toggles were declared with the same identifier.
    #[error("duplicate identifier: {0}")]
    DuplicateIdent(String),

    /// A room identifier did not resolve during world construction.
    #[error("unknown room: {0}")]
    UnknownRoom(String),

    /// An item identifier did not resolve during world construction.
    #[error("unknown item: {0}")]
    UnknownItem(String),

    /// A toggle identifier did not resolve during world construction.
    #[error("unknown toggle: {0}")]
    UnknownToggle(String),

    /// A two-way exit was requested over a direction with no inverse.
    #[error("direction {0} has no inverse")]
    NoInverse(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
