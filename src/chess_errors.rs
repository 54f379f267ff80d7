//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type across the crate. Callers match on
//! it to decide between recoverable input problems and internal corruption:
//! - `IllegalMove`, `EmptyHistory`, `GameOver` and `InvalidSquare` are normal
//!   outcomes of user input; the front-end reports them and keeps going.
//! - `InvariantViolation` means the board and its caches disagree (missing or
//!   duplicate kings, stale king cache). Check detection is unsound from that
//!   point on, so the operation that noticed it aborts.
//! - `Stats` covers the persisted games-played counter, which lives outside
//!   the rules engine.

use thiserror::Error;

use crate::game_state::chess_types::Square;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// The requested `(from, to)` pair is not in the legal move set.
    #[error("illegal move {from} -> {to}")]
    IllegalMove { from: Square, to: Square },

    /// Undo was requested with nothing recorded.
    #[error("no moves to undo")]
    EmptyHistory,

    /// Undo was requested after checkmate/stalemate while the session locks it.
    #[error("game is over; undo is disabled")]
    GameOver,

    /// Board and cached state disagree.
    #[error("board invariant violated: {0}")]
    InvariantViolation(String),

    /// A square coordinate could not be parsed or is off the board.
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    /// The games-played record could not be read or written.
    #[error("stats persistence failed: {0}")]
    Stats(String),
}

impl From<std::io::Error> for ChessError {
    fn from(err: std::io::Error) -> Self {
        ChessError::Stats(err.to_string())
    }
}

impl From<serde_json::Error> for ChessError {
    fn from(err: serde_json::Error) -> Self {
        ChessError::Stats(err.to_string())
    }
}
