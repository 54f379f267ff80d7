//! Canonical chess-rule constants.
//!
//! Standard starting layout and the rank constants used by pawn movement and
//! promotion.

use crate::game_state::chess_types::{Color, PieceKind};

/// Back-rank arrangement from file a to file h.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// File both kings start on.
pub const KING_START_FILE: u8 = 4;

#[inline]
pub const fn back_rank_row(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Any pawn landing on row 0 or 7 is promoted, whatever its color.
#[inline]
pub const fn is_promotion_row(row: u8) -> bool {
    row == 0 || row == 7
}
