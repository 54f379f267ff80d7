//! Crate root module declarations for the CrownFall two-player chess game.
//!
//! The rules engine (board model, move generation, legality filtering, move
//! application and terminal-state evaluation) lives under `game_state`,
//! `moves` and `move_generation`. `game` layers history, captures and the
//! caller-facing session on top, and the remaining modules hold ambient
//! support used by the terminal front-end.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod piece_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_status;
    pub mod legal_moves_king;
    pub mod move_generator;
    pub mod perft;
}

pub mod game {
    pub mod capture_ledger;
    pub mod game_session;
    pub mod move_history;
}

pub mod cli {
    pub mod terminal_loop;
}

pub mod config {
    pub mod session_config;
}

pub mod stats {
    pub mod games_played;
}

pub mod utils {
    pub mod algebraic;
    pub mod random_playout;
    pub mod render_game_state;
}
