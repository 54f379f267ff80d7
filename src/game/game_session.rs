//! Caller-facing game surface.
//!
//! The free functions operate on explicit `GameState` values and never mutate
//! their input: an accepted move comes back as a new position, a rejected one
//! leaves the caller's copy untouched. `GameSession` is the single place a
//! front-end keeps the live position, swapping it only after a call succeeds,
//! and adds history, the capture ledger and the games-played hook.

use chrono::Utc;
use log::{debug, info, warn};

use crate::chess_errors::{ChessError, ChessResult};
use crate::config::session_config::SessionConfig;
use crate::game::capture_ledger::CaptureLedger;
use crate::game::move_history::MoveHistory;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, unmake_move};
use crate::move_generation::legal_move_generator::{find_legal_move, legal_moves_from};
use crate::move_generation::legal_move_status::{evaluate, refresh_status, StatusReport};
use crate::stats::games_played::GamesPlayedStore;

/// Result of an accepted move.
#[derive(Debug, Clone)]
pub struct MoveOutcome {
    pub game_state: GameState,
    pub chess_move: ChessMove,
    pub captured: Option<Piece>,
    pub undo: UndoState,
    pub report: StatusReport,
}

pub fn new_game() -> GameState {
    GameState::new_game()
}

pub fn reset() -> GameState {
    GameState::new_game()
}

pub fn legal_moves(game_state: &GameState, square: Square) -> Vec<ChessMove> {
    legal_moves_from(game_state, square)
}

pub fn status(game_state: &GameState) -> ChessResult<StatusReport> {
    evaluate(game_state)
}

/// Apply `(from, to)` if it is in the legal set, returning the new position.
/// Off-board coordinates are rejected before the board is consulted.
pub fn try_move(game_state: &GameState, from: Square, to: Square) -> ChessResult<MoveOutcome> {
    for square in [from, to] {
        if !square.is_on_board() {
            return Err(ChessError::InvalidSquare(square.to_string()));
        }
    }
    let chess_move = find_legal_move(game_state, from, to).ok_or(ChessError::IllegalMove { from, to })?;

    let mut next = *game_state;
    let undo = apply_move(&mut next, chess_move)?;
    let report = refresh_status(&mut next)?;

    Ok(MoveOutcome {
        game_state: next,
        chess_move,
        captured: undo.captured_piece,
        undo,
        report,
    })
}

/// Pop the newest entry and return the position before it.
pub fn undo(history: &mut MoveHistory, game_state: &GameState) -> ChessResult<GameState> {
    let entry = history.pop_last()?;
    let mut previous = *game_state;
    unmake_move(&mut previous, &entry)?;
    previous.verify_kings()?;
    Ok(previous)
}

pub struct GameSession {
    game_state: GameState,
    history: MoveHistory,
    captures: CaptureLedger,
    report: StatusReport,
    config: SessionConfig,
    stats: Option<GamesPlayedStore>,
    result_recorded: bool,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> ChessResult<Self> {
        info!("new game started");
        Self::from_position(config, new_game())
    }

    /// Start a session from an arbitrary position with an empty history.
    pub fn from_position(config: SessionConfig, game_state: GameState) -> ChessResult<Self> {
        let report = evaluate(&game_state)?;
        let stats = config.stats_path.clone().map(GamesPlayedStore::new);
        Ok(Self {
            game_state,
            history: MoveHistory::new(),
            captures: CaptureLedger::new(),
            report,
            config,
            stats,
            result_recorded: false,
        })
    }

    #[inline]
    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    #[inline]
    pub fn status(&self) -> &StatusReport {
        &self.report
    }

    #[inline]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn captured_by(&self, capturer: Color) -> &[Piece] {
        self.captures.captured_by(capturer)
    }

    pub fn winner(&self) -> Option<Color> {
        self.report.winner()
    }

    pub fn is_over(&self) -> bool {
        self.report.status.is_terminal()
    }

    pub fn legal_moves(&self, square: Square) -> Vec<ChessMove> {
        legal_moves(&self.game_state, square)
    }

    /// Games-played total from the configured store, if any.
    pub fn games_played(&self) -> ChessResult<Option<u64>> {
        match &self.stats {
            Some(store) => Ok(Some(store.load()?.games_played)),
            None => Ok(None),
        }
    }

    pub fn try_move(&mut self, from: Square, to: Square) -> ChessResult<MoveOutcome> {
        let outcome = try_move(&self.game_state, from, to).map_err(|err| {
            debug!("rejected {from}{to}: {err}");
            err
        })?;

        let mover = outcome.undo.moved_piece.color;
        if let Some(piece) = outcome.captured {
            self.captures.record(mover, piece);
        }
        self.history.record(outcome.undo);
        self.game_state = outcome.game_state;
        self.report = outcome.report.clone();

        if self.report.status.is_terminal() {
            self.on_game_finished();
        }

        Ok(outcome)
    }

    /// Revert the newest move. Refused after a finished game unless the
    /// session allows it, in which case the result is cleared and play resumes.
    pub fn undo(&mut self) -> ChessResult<&GameState> {
        if self.is_over() && !self.config.allow_undo_after_game_over {
            warn!("undo refused: game is over");
            return Err(ChessError::GameOver);
        }

        let entry = self.history.last().copied().ok_or(ChessError::EmptyHistory)?;
        let mut previous = self.game_state;
        unmake_move(&mut previous, &entry)?;
        let report = evaluate(&previous)?;

        self.history.pop_last()?;
        if entry.captured_piece.is_some() {
            self.captures.pop(entry.moved_piece.color);
        }
        self.game_state = previous;
        self.report = report;

        debug!("undid {}", entry.mv);
        Ok(&self.game_state)
    }

    /// Back to the initial position; history, captures and the recorded result are discarded.
    pub fn reset(&mut self) -> ChessResult<()> {
        self.game_state = reset();
        self.report = evaluate(&self.game_state)?;
        self.history.clear();
        self.captures.clear();
        self.result_recorded = false;
        info!("game reset");
        Ok(())
    }

    fn on_game_finished(&mut self) {
        match self.report.winner() {
            Some(winner) => info!("checkmate, {winner} wins"),
            None => info!("stalemate, game drawn"),
        }

        if self.result_recorded {
            return;
        }
        self.result_recorded = true;

        if let Some(store) = &self.stats {
            if let Err(err) = store.record_completed_game(Utc::now()) {
                warn!("could not update games played: {err}");
            }
        }
    }
}
