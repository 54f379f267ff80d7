//! Single-step king targets. Castling is not a raw move; it is generated by
//! the legal move layer, which can consult the attack oracle.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::Board;
use crate::moves::piece_moves::step_targets;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub fn king_targets(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    step_targets(board, from, color, &KING_OFFSETS, out);
}
