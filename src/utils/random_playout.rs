//! Seeded random playouts.
//!
//! Plays both sides with uniformly random legal moves until the game ends or
//! a ply cap is hit. Used by the front-end's demo command and by the
//! property-style tests that walk many reachable positions.

use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::chess_errors::ChessResult;
use crate::game::move_history::MoveHistory;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::legal_move_status::{evaluate, refresh_status, GameStatus};

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub final_state: GameState,
    pub history: MoveHistory,
    pub final_status: GameStatus,
}

/// Play from `start` until checkmate, stalemate or `max_plies` moves.
/// `on_position` sees every position reached, including the start.
pub fn random_playout<R, F>(
    start: &GameState,
    rng: &mut R,
    max_plies: u16,
    mut on_position: F,
) -> ChessResult<PlayoutResult>
where
    R: Rng + ?Sized,
    F: FnMut(&GameState),
{
    let mut game_state = *start;
    let mut history = MoveHistory::new();
    let mut final_status = evaluate(&game_state)?.status;
    on_position(&game_state);

    while history.len() < max_plies as usize && !final_status.is_terminal() {
        let legal = generate_legal_moves(&game_state);
        let Some(mv) = legal.choose(&mut *rng).copied() else {
            break;
        };
        history.record(apply_move(&mut game_state, mv)?);
        final_status = refresh_status(&mut game_state)?.status;
        on_position(&game_state);
    }

    debug!(
        "playout finished after {} plies with {:?}",
        history.len(),
        final_status
    );

    Ok(PlayoutResult {
        final_state: game_state,
        history,
        final_status,
    })
}
