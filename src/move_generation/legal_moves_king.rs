//! Castling candidates.
//!
//! All of the following must hold: the king has not moved and is not
//! attacked; the rook on the matching corner file is ours and has not moved;
//! every square strictly between them is empty; and the king would be safe on
//! both the square it crosses and the square it lands on.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_generator::is_legal;

pub fn generate_castling_moves(game_state: &GameState, king_from: Square, out: &mut Vec<ChessMove>) {
    let Some(king) = game_state.piece_at(king_from) else {
        return;
    };
    if king.kind != PieceKind::King || king.has_moved {
        return;
    }

    // Cannot castle out of check.
    if is_square_attacked(&game_state.board, king_from, king.color.opposite()) {
        return;
    }

    for side in [CastlingSide::Kingside, CastlingSide::Queenside] {
        if let Some(mv) = castling_move(game_state, king_from, king.color, side) {
            out.push(mv);
        }
    }
}

fn castling_move(
    game_state: &GameState,
    king_from: Square,
    color: Color,
    side: CastlingSide,
) -> Option<ChessMove> {
    let rook_square = Square::new(king_from.row, side.rook_file());
    let rook = game_state.piece_at(rook_square)?;
    if rook.kind != PieceKind::Rook || rook.color != color || rook.has_moved {
        return None;
    }

    let dir = side.direction();
    let mut col = king_from.col as i8 + dir;
    while col != rook_square.col as i8 {
        let between = Square::try_new(king_from.row as i8, col)?;
        if !game_state.board.is_empty(between) {
            return None;
        }
        col += dir;
    }

    let crossing = king_from.offset(0, dir)?;
    let landing = king_from.offset(0, 2 * dir)?;
    // The landing square must lie strictly between king and rook.
    if landing == rook_square {
        return None;
    }

    let safe = is_legal(game_state, ChessMove::new(king_from, crossing))
        && is_legal(game_state, ChessMove::new(king_from, landing));
    safe.then(|| ChessMove::castle(king_from, landing, side))
}
