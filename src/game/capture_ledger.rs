//! Captured pieces, grouped by the side that took them.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureLedger {
    by_capturer: [Vec<Piece>; 2],
}

impl CaptureLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, capturer: Color, piece: Piece) {
        self.by_capturer[capturer.index()].push(piece);
    }

    /// Removes the capturer's most recent capture.
    pub fn pop(&mut self, capturer: Color) -> Option<Piece> {
        self.by_capturer[capturer.index()].pop()
    }

    pub fn captured_by(&self, capturer: Color) -> &[Piece] {
        &self.by_capturer[capturer.index()]
    }

    pub fn clear(&mut self) {
        for pieces in &mut self.by_capturer {
            pieces.clear();
        }
    }
}
