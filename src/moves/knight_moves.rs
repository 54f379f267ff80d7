use crate::game_state::chess_types::*;
use crate::game_state::game_state::Board;
use crate::moves::piece_moves::step_targets;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[inline]
pub fn knight_targets(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    step_targets(board, from, color, &KNIGHT_OFFSETS, out);
}
