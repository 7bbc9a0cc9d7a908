//! Engine errors.
//!
//! Illegal moves are not errors: actions return the input state unchanged.
//! `EngineError` only covers failures at the crate boundary, where data
//! comes from outside the type system (position keys, checkpoints, score
//! records).

use thiserror::Error;

/// Errors surfaced at the engine boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A position key did not name any board slot.
    #[error("unknown board position: {0}")]
    UnknownPosition(String),

    /// A position was valid but belongs to another slot family.
    #[error("position {position} is not a {expected} position")]
    WrongPositionKind {
        position: String,
        expected: &'static str,
    },

    /// A decoded board did not have one stack per slot.
    #[error("corrupt board: expected {expected} stacks, found {found}")]
    CorruptBoard { expected: usize, found: usize },

    /// Checkpoint encoding or decoding failed.
    #[error("checkpoint error: {0}")]
    Checkpoint(#[from] bincode::Error),

    /// Score record could not be parsed or written.
    #[error("score record error: {0}")]
    ScoreRecord(#[from] serde_json::Error),
}

/// Result alias for engine boundary operations.
pub type EngineResult<T> = Result<T, EngineError>;
