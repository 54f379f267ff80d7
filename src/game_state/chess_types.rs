//! Core value types shared by every layer of the engine.
//!
//! Squares are `(row, col)` pairs with row 0 on black's back rank and row 7
//! on white's back rank. Pieces carry their own `has_moved` flag, which only
//! matters for kings and rooks (castling).

use std::fmt;

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

pub const BOARD_SIZE: usize = 8;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Closed set of piece behaviours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Only kings and rooks track whether they have moved.
    #[inline]
    pub const fn tracks_moved_flag(self) -> bool {
        matches!(self, PieceKind::King | PieceKind::Rook)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn moved(mut self) -> Self {
        self.has_moved = true;
        self
    }
}

/// Board coordinate, both components in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Callers guarantee `row < 8 && col < 8`; use `try_new` for untrusted input.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    #[inline]
    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::try_new(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square::new(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "({},{})", self.row, self.col);
        }
        let file = char::from(b'a' + self.col);
        let rank = char::from(b'8' - self.row);
        write!(f, "{file}{rank}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

impl CastlingSide {
    /// File the participating rook starts on.
    #[inline]
    pub const fn rook_file(self) -> u8 {
        match self {
            CastlingSide::Kingside => 7,
            CastlingSide::Queenside => 0,
        }
    }

    /// Column step from the king toward the rook.
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            CastlingSide::Kingside => 1,
            CastlingSide::Queenside => -1,
        }
    }
}

/// A proposed or generated move. Castling moves carry their side tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub castling: Option<CastlingSide>,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            castling: None,
        }
    }

    #[inline]
    pub const fn castle(from: Square, to: Square, side: CastlingSide) -> Self {
        Self {
            from,
            to,
            castling: Some(side),
        }
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.castling {
            Some(CastlingSide::Kingside) => write!(f, "{}{} (O-O)", self.from, self.to),
            Some(CastlingSide::Queenside) => write!(f, "{}{} (O-O-O)", self.from, self.to),
            None => write!(f, "{}{}", self.from, self.to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_offsets_stay_on_board() {
        let a8 = Square::new(0, 0);
        assert_eq!(a8.offset(-1, 0), None);
        assert_eq!(a8.offset(1, 1), Some(Square::new(1, 1)));
        assert_eq!(Square::new(7, 7).offset(0, 1), None);
    }

    #[test]
    fn square_display_uses_white_perspective_ranks() {
        assert_eq!(Square::new(7, 0).to_string(), "a1");
        assert_eq!(Square::new(0, 7).to_string(), "h8");
        assert_eq!(Square::new(6, 4).to_string(), "e2");
    }

    #[test]
    fn off_board_square_is_flagged_and_still_displays() {
        assert!(Square::new(7, 7).is_on_board());
        assert!(!Square::new(8, 0).is_on_board());
        assert!(!Square::new(0, 200).is_on_board());
        assert_eq!(Square::new(8, 0).to_string(), "(8,0)");
    }

    #[test]
    fn all_squares_covers_board_once() {
        assert_eq!(Square::all().count(), 64);
    }
}
