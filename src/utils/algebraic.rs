//! Coordinate conversions between `e4`-style names and board squares.
//!
//! File `a` is column 0 and rank `1` is row 7 (white's back rank).

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

/// Parse a move written as `e2e4`, `e2-e4` or `e2 e4`.
pub fn parse_move_squares(text: &str) -> ChessResult<(Square, Square)> {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if compact.len() != 4 || !compact.is_ascii() {
        return Err(ChessError::InvalidSquare(text.to_owned()));
    }
    let from = algebraic_to_square(&compact[..2])?;
    let to = algebraic_to_square(&compact[2..])?;
    Ok((from, to))
}
