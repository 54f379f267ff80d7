//! Core mailbox board state representation.
//!
//! `GameState` is the position snapshot the engine operates on: an 8x8 grid
//! of optional pieces, the side to move, a cached king square per color and
//! per-color check flags. The check flags are only meaningful right after a
//! move has been applied and evaluated; scratch boards built while probing
//! legality never touch them.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{back_rank_row, pawn_start_row, BACK_RANK, KING_START_FILE};
use crate::game_state::chess_types::*;

/// Bare 8x8 grid. Copying it is how legality probes get a scratch board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row as usize][square.col as usize] = piece;
    }

    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Occupied squares with their pieces, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    /// `[white, black]`, always the square holding that color's king.
    pub king_squares: [Square; 2],
    /// `[white, black]`, refreshed by status evaluation after each move.
    pub in_check: [bool; 2],
}

impl GameState {
    /// Standard initial setup with white to move.
    pub fn new_game() -> Self {
        let mut board = Board::empty();
        for color in [Color::White, Color::Black] {
            let back = back_rank_row(color);
            let pawns = pawn_start_row(color);
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board.set(Square::new(back, col as u8), Some(Piece::new(*kind, color)));
                board.set(Square::new(pawns, col as u8), Some(Piece::new(PieceKind::Pawn, color)));
            }
        }

        Self {
            board,
            side_to_move: Color::White,
            king_squares: [
                Square::new(back_rank_row(Color::White), KING_START_FILE),
                Square::new(back_rank_row(Color::Black), KING_START_FILE),
            ],
            in_check: [false; 2],
        }
    }

    /// Build a position from an explicit piece list, deriving the king cache
    /// and check flags. Fails unless each color has exactly one king.
    pub fn from_pieces(side_to_move: Color, pieces: &[(Square, Piece)]) -> ChessResult<Self> {
        let mut board = Board::empty();
        for (square, piece) in pieces {
            board.set(*square, Some(*piece));
        }

        let king_squares = [
            find_unique_king(&board, Color::White)?,
            find_unique_king(&board, Color::Black)?,
        ];

        let mut state = Self {
            board,
            side_to_move,
            king_squares,
            in_check: [false; 2],
        };
        state.in_check = crate::move_generation::legal_move_checks::check_flags(&state);
        Ok(state)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.get(square)
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.in_check[color.index()]
    }

    /// Confirm each color has exactly one king and that it sits on the cached square.
    pub fn verify_kings(&self) -> ChessResult<()> {
        for color in [Color::White, Color::Black] {
            let found = find_unique_king(&self.board, color)?;
            let cached = self.king_square(color);
            if found != cached {
                return Err(ChessError::InvariantViolation(format!(
                    "{color} king cached on {cached} but found on {found}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

fn find_unique_king(board: &Board, color: Color) -> ChessResult<Square> {
    let mut kings = board
        .pieces_of(color)
        .filter(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(square, _)| square);

    let first = kings
        .next()
        .ok_or_else(|| ChessError::InvariantViolation(format!("{color} king is missing")))?;
    if let Some(extra) = kings.next() {
        return Err(ChessError::InvariantViolation(format!(
            "{color} has more than one king ({first} and {extra})"
        )));
    }
    Ok(first)
}
