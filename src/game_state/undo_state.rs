use crate::game_state::chess_types::*;

/// Single undo record produced by `apply_move` and consumed by `unmake_move`.
///
/// Holds exactly what the move overwrote, so undo never replays from the
/// start. Castling entries also remember the rook as it stood before the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: ChessMove,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    /// `(origin, rook)` for castling moves.
    pub castled_rook: Option<(Square, Piece)>,
    pub prev_king_squares: [Square; 2],
    pub prev_in_check: [bool; 2],
    pub prev_side_to_move: Color,
}
