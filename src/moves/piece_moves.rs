//! Per-type dispatch for raw (pseudo-legal, castling-free) target generation.
//!
//! Every piece kind maps to one generator function. The move generator and the
//! attack oracle both go through `generator_for`, so a new piece behaviour only
//! has to be added to the match below.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::Board;
use crate::moves::bishop_moves::bishop_targets;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_targets;
use crate::moves::queen_moves::queen_targets;
use crate::moves::rook_moves::rook_targets;

/// Appends every square a piece of `color` on `from` can reach on `board`.
pub type TargetGenerator = fn(&Board, Square, Color, &mut Vec<Square>);

#[inline]
pub fn generator_for(kind: PieceKind) -> TargetGenerator {
    match kind {
        PieceKind::Pawn => pawn_targets,
        PieceKind::Knight => knight_targets,
        PieceKind::Bishop => bishop_targets,
        PieceKind::Rook => rook_targets,
        PieceKind::Queen => queen_targets,
        PieceKind::King => king_targets,
    }
}

/// Raw targets for whatever stands on `from`; empty when the square is empty.
pub fn raw_targets(board: &Board, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    if let Some(piece) = board.get(from) {
        generator_for(piece.kind)(board, from, piece.color, &mut out);
    }
    out
}

/// Walk from `from` in one direction, stopping before friendly pieces and on
/// the first enemy piece.
pub fn trace_ray(
    board: &Board,
    from: Square,
    color: Color,
    d_row: i8,
    d_col: i8,
    out: &mut Vec<Square>,
) {
    let mut current = from;
    while let Some(next) = current.offset(d_row, d_col) {
        match board.get(next) {
            None => out.push(next),
            Some(piece) => {
                if piece.color != color {
                    out.push(next);
                }
                break;
            }
        }
        current = next;
    }
}

/// Fixed-offset stepping for knights and kings.
pub fn step_targets(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for (d_row, d_col) in offsets {
        let Some(to) = from.offset(*d_row, *d_col) else {
            continue;
        };
        match board.get(to) {
            Some(piece) if piece.color == color => {}
            _ => out.push(to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_targets_on_empty_square_is_empty() {
        let game = GameState::new_game();
        assert!(raw_targets(&game.board, Square::new(4, 4)).is_empty());
    }

    #[test]
    fn trace_ray_includes_first_enemy_and_stops() {
        let mut board = Board::empty();
        let rook = Square::new(7, 0);
        board.set(rook, Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set(Square::new(4, 0), Some(Piece::new(PieceKind::Pawn, Color::Black)));

        let mut out = Vec::new();
        trace_ray(&board, rook, Color::White, -1, 0, &mut out);
        assert_eq!(
            out,
            vec![Square::new(6, 0), Square::new(5, 0), Square::new(4, 0)]
        );
    }

    #[test]
    fn trace_ray_excludes_friendly_blocker() {
        let mut board = Board::empty();
        let rook = Square::new(7, 0);
        board.set(rook, Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set(Square::new(5, 0), Some(Piece::new(PieceKind::Pawn, Color::White)));

        let mut out = Vec::new();
        trace_ray(&board, rook, Color::White, -1, 0, &mut out);
        assert_eq!(out, vec![Square::new(6, 0)]);
    }
}
