//! Move generator abstraction used by perft and automated playouts.
//!
//! A generator yields each legal move together with the position it produces
//! and what it captured, so callers can walk the game tree without
//! re-applying moves themselves.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::legal_move_status::{refresh_status, GameStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveAnnotations {
    pub gives_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
}

#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub chess_move: ChessMove,
    pub game_after_move: GameState,
    pub undo: UndoState,
    pub annotations: MoveAnnotations,
}

pub trait MoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> ChessResult<Vec<GeneratedMove>>;
}

/// Applies every legal move and classifies the resulting position.
pub struct LegalMoveGenerator;

/// Applies every legal move without the terminal-state pass.
pub struct FastLegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> ChessResult<Vec<GeneratedMove>> {
        generate_with(game_state, true)
    }
}

impl MoveGenerator for FastLegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> ChessResult<Vec<GeneratedMove>> {
        generate_with(game_state, false)
    }
}

fn generate_with(game_state: &GameState, annotate: bool) -> ChessResult<Vec<GeneratedMove>> {
    let legal = generate_legal_moves(game_state);
    let mut out = Vec::with_capacity(legal.len());

    for chess_move in legal {
        let mut next = *game_state;
        let undo = apply_move(&mut next, chess_move)?;

        let annotations = if annotate {
            let report = refresh_status(&mut next)?;
            MoveAnnotations {
                gives_check: matches!(report.status, GameStatus::Check | GameStatus::Checkmate),
                is_checkmate: report.status == GameStatus::Checkmate,
                is_stalemate: report.status == GameStatus::Stalemate,
            }
        } else {
            MoveAnnotations::default()
        };

        out.push(GeneratedMove {
            chess_move,
            game_after_move: next,
            undo,
            annotations,
        });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{FastLegalMoveGenerator, LegalMoveGenerator, MoveGenerator};
    use crate::game_state::chess_types::GameState;

    #[test]
    fn fast_generator_matches_legal_move_count_on_startpos() {
        let game = GameState::new_game();
        let annotated = LegalMoveGenerator
            .generate_legal_moves(&game)
            .expect("annotated move generation should succeed");
        let fast = FastLegalMoveGenerator
            .generate_legal_moves(&game)
            .expect("fast move generation should succeed");
        assert_eq!(annotated.len(), fast.len());
        assert_eq!(fast.len(), 20);
        assert!(annotated.iter().all(|mv| !mv.annotations.gives_check));
    }

    #[test]
    fn generated_positions_hand_the_move_to_the_opponent() {
        let game = GameState::new_game();
        for generated in FastLegalMoveGenerator
            .generate_legal_moves(&game)
            .expect("generation should succeed")
        {
            assert_eq!(generated.game_after_move.side_to_move, game.side_to_move.opposite());
            assert_eq!(generated.undo.mv, generated.chess_move);
        }
    }
}
