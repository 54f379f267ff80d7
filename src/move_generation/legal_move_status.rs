//! Terminal-state evaluation.
//!
//! Run after every applied move: recompute both check flags from scratch,
//! then classify the side to move by whether it has any legal move.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{attackers_to_square, check_flags};
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub status: GameStatus,
    pub side_to_move: Color,
    /// `[white, black]`
    pub in_check: [bool; 2],
    pub legal_move_count: usize,
    /// Pieces giving check to the side to move.
    pub checkers: Vec<Square>,
}

impl StatusReport {
    /// The side that delivered mate, if any.
    pub fn winner(&self) -> Option<Color> {
        match self.status {
            GameStatus::Checkmate => Some(self.side_to_move.opposite()),
            _ => None,
        }
    }
}

/// Classify `game_state` for its side to move. Fails if the king cache is
/// inconsistent with the board.
pub fn evaluate(game_state: &GameState) -> ChessResult<StatusReport> {
    game_state.verify_kings()?;

    let side = game_state.side_to_move;
    let in_check = check_flags(game_state);
    let legal_move_count = generate_legal_moves(game_state).len();
    let side_in_check = in_check[side.index()];

    let status = match (legal_move_count, side_in_check) {
        (0, true) => GameStatus::Checkmate,
        (0, false) => GameStatus::Stalemate,
        (_, true) => GameStatus::Check,
        (_, false) => GameStatus::Ongoing,
    };

    let checkers = if side_in_check {
        attackers_to_square(&game_state.board, game_state.king_square(side), side.opposite())
            .into_iter()
            .map(|(square, _)| square)
            .collect()
    } else {
        Vec::new()
    };

    Ok(StatusReport {
        status,
        side_to_move: side,
        in_check,
        legal_move_count,
        checkers,
    })
}

/// Evaluate and store the fresh check flags on the position.
pub fn refresh_status(game_state: &mut GameState) -> ChessResult<StatusReport> {
    let report = evaluate(game_state)?;
    game_state.in_check = report.in_check;
    Ok(report)
}
