use crate::game_state::chess_types::*;
use crate::game_state::game_state::Board;
use crate::moves::bishop_moves::bishop_targets;
use crate::moves::rook_moves::rook_targets;

/// Union of rook and bishop rays.
#[inline]
pub fn queen_targets(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    rook_targets(board, from, color, out);
    bishop_targets(board, from, color, out);
}
