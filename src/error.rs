//! Error types
//!
//! [`ProtocolError`] covers lines the controller sent that cannot be
//! understood. [`EngineError`] wraps it together with everything else that
//! ends a session.

use crate::board::Pos;

/// A line from the controller that cannot be understood.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    #[error("unknown command: {0:?}")]
    UnknownCommand(String),

    #[error("invalid color in init command: {0:?}")]
    InvalidColor(String),

    #[error("invalid random seed: {0:?}")]
    InvalidSeed(String),

    #[error("coordinate out of range: {0:?}")]
    CoordinateOutOfRange(String),
}

/// Errors that end a game session. None of them are recoverable.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("protocol violation: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("move received before init")]
    NotInitialized,

    #[error("opponent played illegal move {0}")]
    IllegalMove(Pos),

    #[error("session already terminated")]
    Terminated,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
