//! Append-only log of applied moves.
//!
//! Entries are never edited after they are recorded; undo pops the newest one
//! and hands it back to `unmake_move`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    entries: Vec<UndoState>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record(&mut self, entry: UndoState) {
        self.entries.push(entry);
    }

    pub fn pop_last(&mut self) -> ChessResult<UndoState> {
        self.entries.pop().ok_or(ChessError::EmptyHistory)
    }

    #[inline]
    pub fn last(&self) -> Option<&UndoState> {
        self.entries.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn moves(&self) -> impl Iterator<Item = ChessMove> + '_ {
        self.entries.iter().map(|entry| entry.mv)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
