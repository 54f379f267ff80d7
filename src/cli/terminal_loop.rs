//! Text front-end and command loop.
//!
//! Plays the role of the board UI: it parses commands, forwards moves to the
//! session, renders the board and reports the outcome. Illegal input is
//! reported and otherwise ignored, mirroring a piece snapping back.

use std::io::{self, BufRead, Write};

use log::warn;
use rand::{rngs::StdRng, SeedableRng};

use crate::chess_errors::ChessError;
use crate::config::session_config::SessionConfig;
use crate::game::game_session::GameSession;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_status::GameStatus;
use crate::utils::algebraic::{algebraic_to_square, parse_move_squares};
use crate::utils::random_playout::random_playout;
use crate::utils::render_game_state::{render_captures, render_game_state};

const HELP_TEXT: &str = "\
commands:
  e2e4 | e2 e4     move a piece
  moves <square>   list legal destinations for a square
  undo             take back the last move
  reset            start a new game
  board            redraw the board
  history          list moves played
  demo [plies]     show a random game from the start (default 40 plies)
  stats            games completed so far
  help             this text
  quit             leave";

pub fn run_stdio_loop(config: SessionConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut terminal = TerminalState::new(config).map_err(io::Error::other)?;

    terminal.draw(&mut stdout)?;
    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = terminal.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct TerminalState {
    session: GameSession,
}

impl TerminalState {
    pub fn new(config: SessionConfig) -> Result<Self, ChessError> {
        Ok(Self {
            session: GameSession::new(config)?,
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns `Ok(true)` when the loop should stop.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd.to_ascii_lowercase().as_str() {
            "quit" | "exit" => return Ok(true),
            "help" => writeln!(out, "{HELP_TEXT}")?,
            "board" => self.draw(out)?,
            "moves" => self.list_moves(parts.next(), out)?,
            "undo" => match self.session.undo().map(|_| ()) {
                Ok(()) => self.draw(out)?,
                Err(err) => writeln!(out, "{err}")?,
            },
            "reset" | "new" => match self.session.reset() {
                Ok(()) => self.draw(out)?,
                Err(err) => writeln!(out, "{err}")?,
            },
            "history" => self.print_history(out)?,
            "demo" => {
                let plies = parts
                    .next()
                    .and_then(|value| value.parse::<u16>().ok())
                    .unwrap_or(40);
                self.run_demo(plies, out)?;
            }
            "stats" => match self.session.games_played() {
                Ok(Some(count)) => writeln!(out, "games completed: {count}")?,
                Ok(None) => writeln!(out, "games are not being recorded (use --stats <path>)")?,
                Err(err) => writeln!(out, "{err}")?,
            },
            _ => self.play_move(trimmed, out)?,
        }

        Ok(false)
    }

    pub fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        let unicode = self.session.config().unicode_board;
        writeln!(out, "{}", render_game_state(self.session.game_state(), unicode))?;
        writeln!(
            out,
            "{}",
            render_captures(
                self.session.captured_by(Color::White),
                self.session.captured_by(Color::Black),
                unicode
            )
        )?;
        writeln!(out, "{}", status_line(&self.session))?;
        Ok(())
    }

    fn play_move(&mut self, text: &str, out: &mut impl Write) -> io::Result<()> {
        let (from, to) = match parse_move_squares(text) {
            Ok(squares) => squares,
            Err(_) => {
                writeln!(out, "unknown command '{text}' (try 'help')")?;
                return Ok(());
            }
        };

        if self.session.is_over() {
            writeln!(out, "game is over; 'undo' or 'reset' to continue")?;
            return Ok(());
        }

        match self.session.try_move(from, to) {
            Ok(_) => self.draw(out),
            Err(err) => writeln!(out, "{err}"),
        }
    }

    fn list_moves(&self, square: Option<&str>, out: &mut impl Write) -> io::Result<()> {
        let Some(name) = square else {
            return writeln!(out, "usage: moves <square>");
        };
        let square = match algebraic_to_square(name) {
            Ok(square) => square,
            Err(err) => return writeln!(out, "{err}"),
        };

        let moves = self.session.legal_moves(square);
        if moves.is_empty() {
            return writeln!(out, "no legal moves from {square}");
        }
        let targets: Vec<String> = moves.iter().map(|mv| mv.to.to_string()).collect();
        writeln!(out, "{square}: {}", targets.join(" "))
    }

    fn print_history(&self, out: &mut impl Write) -> io::Result<()> {
        let moves: Vec<ChessMove> = self.session.history().moves().collect();
        if moves.is_empty() {
            return writeln!(out, "no moves yet");
        }
        for (index, pair) in moves.chunks(2).enumerate() {
            match pair {
                [white, black] => writeln!(out, "{:>3}. {white}  {black}", index + 1)?,
                [white] => writeln!(out, "{:>3}. {white}", index + 1)?,
                _ => {}
            }
        }
        Ok(())
    }

    fn run_demo(&self, plies: u16, out: &mut impl Write) -> io::Result<()> {
        let seed: u64 = rand::random();
        let mut rng = StdRng::seed_from_u64(seed);
        let result = match random_playout(&GameState::new_game(), &mut rng, plies, |_| {}) {
            Ok(result) => result,
            Err(err) => {
                warn!("demo playout failed: {err}");
                return writeln!(out, "{err}");
            }
        };

        let unicode = self.session.config().unicode_board;
        writeln!(out, "demo seed {seed}, {} plies", result.history.len())?;
        writeln!(out, "{}", render_game_state(&result.final_state, unicode))?;
        writeln!(out, "result: {:?}", result.final_status)
    }
}

fn status_line(session: &GameSession) -> String {
    let report = session.status();
    match report.status {
        GameStatus::Checkmate => match report.winner() {
            Some(winner) => format!("Checkmate! {winner} wins!"),
            None => "Checkmate!".to_owned(),
        },
        GameStatus::Stalemate => "Stalemate! Game ends in a draw.".to_owned(),
        GameStatus::Check => format!("{}'s turn. {} is in check!", report.side_to_move, report.side_to_move),
        GameStatus::Ongoing => format!("{}'s turn", report.side_to_move),
    }
}
