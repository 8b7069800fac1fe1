//! Error types for the bot core.
//!
//! [`PlacebotError`] is the top-level error; [`HandlerError`] covers failures inside one user's turn.

use thiserror::Error;

/// Top-level error (bot transport, handler).
#[derive(Error, Debug)]
pub enum PlacebotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
}

/// Errors produced while handling one inbound event.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// A location arrived before any category was selected.
    #[error("No category selected")]
    MissingSelection,

    /// Callback payload (or stored selection) is not in the category catalog.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// The event is not valid in the current conversation state.
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

/// Result type for core operations; uses [`PlacebotError`].
pub type Result<T> = std::result::Result<T, PlacebotError>;
