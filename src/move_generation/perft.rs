//! Perft node counting for move generator verification.
//!
//! Counts leaf nodes at a fixed depth plus per-leaf tallies of captures,
//! castles, promotions, checks and terminal positions.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::{
    FastLegalMoveGenerator, GeneratedMove, LegalMoveGenerator, MoveGenerator,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
    pub stalemates: usize,
}

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(game_state)? {
        perft_recurse(generator, &mv, depth, 1, &mut total)?;
    }
    Ok(total)
}

/// Full tallies, including check and terminal annotations.
pub fn perft_annotated(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    perft(&LegalMoveGenerator, game_state, depth)
}

/// Node counts only; check and terminal tallies stay zero.
pub fn perft_legal(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    perft(&FastLegalMoveGenerator, game_state, depth)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    mv: &GeneratedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    if current_depth == search_depth {
        counts.nodes += 1;

        if mv.undo.captured_piece.is_some() {
            counts.captures += 1;
        }
        if mv.chess_move.castling.is_some() {
            counts.castles += 1;
        }
        if mv.undo.moved_piece.kind == PieceKind::Pawn
            && mv.game_after_move.piece_at(mv.chess_move.to).map(|p| p.kind) == Some(PieceKind::Queen)
        {
            counts.promotions += 1;
        }
        if mv.annotations.gives_check {
            counts.checks += 1;
        }
        if mv.annotations.is_checkmate {
            counts.checkmates += 1;
        }
        if mv.annotations.is_stalemate {
            counts.stalemates += 1;
        }

        return Ok(());
    }

    for child in generator.generate_legal_moves(&mv.game_after_move)? {
        perft_recurse(generator, &child, search_depth, current_depth + 1, counts)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let counts = perft_legal(&GameState::new_game(), 0).expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn perft_start_position_matches_reference_counts() {
        let game = GameState::new_game();
        assert_eq!(perft_legal(&game, 1).expect("perft").nodes, 20);
        assert_eq!(perft_legal(&game, 2).expect("perft").nodes, 400);
        assert_eq!(perft_legal(&game, 3).expect("perft").nodes, 8902);
    }

    #[test]
    fn perft_depth_three_tallies_captures_and_checks() {
        let counts = perft_annotated(&GameState::new_game(), 3).expect("perft");
        assert_eq!(counts.nodes, 8902);
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.checks, 12);
        assert_eq!(counts.checkmates, 0);
        assert_eq!(counts.castles, 0);
        assert_eq!(counts.promotions, 0);
    }

    #[test]
    fn castling_position_counts_both_castles() {
        let pieces = [
            (Square::new(7, 4), Piece::new(PieceKind::King, Color::White)),
            (Square::new(7, 0), Piece::new(PieceKind::Rook, Color::White)),
            (Square::new(7, 7), Piece::new(PieceKind::Rook, Color::White)),
            (Square::new(0, 4), Piece::new(PieceKind::King, Color::Black)),
        ];
        let game = GameState::from_pieces(Color::White, &pieces).expect("valid position");
        let counts = perft_legal(&game, 1).expect("perft");
        assert_eq!(counts.castles, 2);
        // 5 king steps, 2 castles, a1 rook 10, h1 rook 9.
        assert_eq!(counts.nodes, 26);
    }
}
