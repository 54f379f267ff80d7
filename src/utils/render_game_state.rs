//! Terminal board renderer.
//!
//! Draws the board from white's side with rank 8 at the top, marks a checked
//! king, and lists captured pieces under the board.

use crate::game_state::chess_types::*;

pub fn render_game_state(game_state: &GameState, unicode: bool) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..BOARD_SIZE as u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..BOARD_SIZE as u8 {
            let square = Square::new(row, col);
            match game_state.piece_at(square) {
                Some(piece) => out.push(piece_symbol(piece, unicode)),
                None => out.push(if unicode { '·' } else { '.' }),
            }

            let checked_king = [Color::White, Color::Black].into_iter().any(|color| {
                game_state.is_in_check(color) && game_state.king_square(color) == square
            });
            if checked_king {
                out.push('!');
            } else if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// One line per side listing what it has captured.
pub fn render_captures(white_took: &[Piece], black_took: &[Piece], unicode: bool) -> String {
    let line = |pieces: &[Piece]| -> String {
        pieces
            .iter()
            .map(|piece| piece_symbol(*piece, unicode).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };
    format!(
        "White captured: {}\nBlack captured: {}",
        line(white_took),
        line(black_took)
    )
}

pub fn piece_symbol(piece: Piece, unicode: bool) -> char {
    if !unicode {
        let letter = match piece.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        return match piece.color {
            Color::White => letter.to_ascii_uppercase(),
            Color::Black => letter,
        };
    }

    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
