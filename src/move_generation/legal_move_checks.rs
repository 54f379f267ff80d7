//! Attack oracle.
//!
//! A square is attacked by a color when any piece of that color can reach it
//! with its raw target set. Castling never counts as an attack and no legality
//! filtering happens here, so the oracle can run on scratch boards.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::Board;
use crate::moves::piece_moves::generator_for;

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let mut targets = Vec::with_capacity(28);
    for (from, piece) in board.pieces_of(attacker_color) {
        targets.clear();
        generator_for(piece.kind)(board, from, attacker_color, &mut targets);
        if targets.contains(&square) {
            return true;
        }
    }
    false
}

/// Every attacker of `square` with its kind, row-major.
pub fn attackers_to_square(
    board: &Board,
    square: Square,
    attacker_color: Color,
) -> Vec<(Square, PieceKind)> {
    let mut attackers = Vec::new();
    let mut targets = Vec::with_capacity(28);
    for (from, piece) in board.pieces_of(attacker_color) {
        targets.clear();
        generator_for(piece.kind)(board, from, attacker_color, &mut targets);
        if targets.contains(&square) {
            attackers.push((from, piece.kind));
        }
    }
    attackers
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    is_square_attacked(&game_state.board, game_state.king_square(color), color.opposite())
}

/// Fresh `[white, black]` check flags for the position.
pub fn check_flags(game_state: &GameState) -> [bool; 2] {
    [
        is_king_in_check(game_state, Color::White),
        is_king_in_check(game_state, Color::Black),
    ]
}
