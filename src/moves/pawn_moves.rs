use crate::game_state::chess_rules::pawn_start_row;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::Board;

/// Forward pushes onto empty squares, the double push from the start row and
/// diagonal captures of enemy pieces. No en-passant.
pub fn pawn_targets(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    let dir = color.pawn_direction();

    if let Some(one_step) = from.offset(dir, 0) {
        if board.is_empty(one_step) {
            out.push(one_step);

            if from.row == pawn_start_row(color) {
                if let Some(two_step) = from.offset(2 * dir, 0) {
                    if board.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for col_delta in [-1i8, 1i8] {
        let Some(to) = from.offset(dir, col_delta) else {
            continue;
        };
        if matches!(board.get(to), Some(piece) if piece.color != color) {
            out.push(to);
        }
    }
}
