//! Move application and reversal.
//!
//! `apply_move` commits an already-validated move in place and returns the
//! undo record; `unmake_move` consumes that record and restores the exact
//! prior position. Neither touches the check flags beyond restoring them on
//! undo; status evaluation refreshes them after a move.

use log::debug;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::is_promotion_row;
use crate::game_state::chess_types::*;

pub fn apply_move(game_state: &mut GameState, mv: ChessMove) -> ChessResult<UndoState> {
    for square in [mv.from, mv.to] {
        if !square.is_on_board() {
            return Err(ChessError::InvalidSquare(square.to_string()));
        }
    }
    let moved_piece = game_state.piece_at(mv.from).ok_or(ChessError::IllegalMove {
        from: mv.from,
        to: mv.to,
    })?;

    let mut undo = UndoState {
        mv,
        moved_piece,
        captured_piece: None,
        castled_rook: None,
        prev_king_squares: game_state.king_squares,
        prev_in_check: game_state.in_check,
        prev_side_to_move: game_state.side_to_move,
    };

    if let Some(side) = mv.castling {
        let rook_from = Square::new(mv.from.row, side.rook_file());
        let rook_to = castled_rook_square(mv.to, side)?;
        let rook = game_state
            .piece_at(rook_from)
            .filter(|piece| piece.kind == PieceKind::Rook)
            .ok_or_else(|| {
                ChessError::InvariantViolation(format!("castling without a rook on {rook_from}"))
            })?;
        game_state.board.set(rook_from, None);
        game_state.board.set(rook_to, Some(rook.moved()));
        undo.castled_rook = Some((rook_from, rook));
    }

    undo.captured_piece = game_state.board.take(mv.to);
    game_state.board.set(mv.from, None);

    let mut placed = moved_piece;
    if placed.kind == PieceKind::King {
        game_state.king_squares[placed.color.index()] = mv.to;
    }
    if placed.kind.tracks_moved_flag() {
        placed.has_moved = true;
    }
    if placed.kind == PieceKind::Pawn && is_promotion_row(mv.to.row) {
        placed.kind = PieceKind::Queen;
    }
    game_state.board.set(mv.to, Some(placed));

    game_state.side_to_move = game_state.side_to_move.opposite();

    debug!(
        "applied {} {:?} {}{}",
        moved_piece.color,
        moved_piece.kind,
        mv,
        undo.captured_piece
            .map(|piece| format!(" capturing {:?}", piece.kind))
            .unwrap_or_default()
    );

    Ok(undo)
}

pub fn unmake_move(game_state: &mut GameState, undo: &UndoState) -> ChessResult<()> {
    let mv = undo.mv;

    game_state.board.set(mv.to, undo.captured_piece);
    game_state.board.set(mv.from, Some(undo.moved_piece));

    if let (Some(side), Some((rook_from, rook))) = (mv.castling, undo.castled_rook) {
        let rook_to = castled_rook_square(mv.to, side)?;
        game_state.board.set(rook_to, None);
        game_state.board.set(rook_from, Some(rook));
    }

    game_state.king_squares = undo.prev_king_squares;
    game_state.in_check = undo.prev_in_check;
    game_state.side_to_move = undo.prev_side_to_move;

    debug!("reverted {}", mv);
    Ok(())
}

/// The rook lands next to the king, on the side the king came from.
fn castled_rook_square(king_to: Square, side: CastlingSide) -> ChessResult<Square> {
    king_to
        .offset(0, -side.direction())
        .ok_or_else(|| ChessError::InvariantViolation(format!("no rook square beside {king_to}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::find_legal_move;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn quiet_move_relocates_piece_and_flips_side() {
        let mut game = GameState::new_game();
        let before = game;
        let mv = ChessMove::new(sq(6, 4), sq(4, 4));
        let undo = apply_move(&mut game, mv).expect("apply should succeed");

        assert!(game.piece_at(sq(6, 4)).is_none());
        assert_eq!(game.piece_at(sq(4, 4)).map(|p| p.kind), Some(PieceKind::Pawn));
        assert_eq!(game.side_to_move, Color::Black);
        assert_eq!(undo.captured_piece, None);

        unmake_move(&mut game, &undo).expect("undo should succeed");
        assert_eq!(game, before);
    }

    #[test]
    fn capture_returns_the_overwritten_piece() {
        let pieces = [
            (sq(7, 4), Piece::new(PieceKind::King, Color::White)),
            (sq(4, 4), Piece::new(PieceKind::Rook, Color::White)),
            (sq(1, 4), Piece::new(PieceKind::Bishop, Color::Black)),
            (sq(0, 0), Piece::new(PieceKind::King, Color::Black)),
        ];
        let mut game = GameState::from_pieces(Color::White, &pieces).expect("valid position");
        let before = game;
        let undo = apply_move(&mut game, ChessMove::new(sq(4, 4), sq(1, 4))).expect("apply");

        assert_eq!(
            undo.captured_piece,
            Some(Piece::new(PieceKind::Bishop, Color::Black))
        );
        let rook = game.piece_at(sq(1, 4)).expect("rook moved");
        assert!(rook.has_moved);

        unmake_move(&mut game, &undo).expect("undo");
        assert_eq!(game, before);
        assert!(!game.piece_at(sq(4, 4)).expect("rook restored").has_moved);
    }

    #[test]
    fn kingside_castle_moves_rook_and_marks_both_moved() {
        let pieces = [
            (sq(7, 4), Piece::new(PieceKind::King, Color::White)),
            (sq(7, 7), Piece::new(PieceKind::Rook, Color::White)),
            (sq(0, 4), Piece::new(PieceKind::King, Color::Black)),
        ];
        let mut game = GameState::from_pieces(Color::White, &pieces).expect("valid position");
        let before = game;
        let mv = find_legal_move(&game, sq(7, 4), sq(7, 6)).expect("castling is legal");
        assert_eq!(mv.castling, Some(CastlingSide::Kingside));

        let undo = apply_move(&mut game, mv).expect("apply");
        let king = game.piece_at(sq(7, 6)).expect("king on g1");
        let rook = game.piece_at(sq(7, 5)).expect("rook on f1");
        assert_eq!(king.kind, PieceKind::King);
        assert!(king.has_moved);
        assert_eq!(rook.kind, PieceKind::Rook);
        assert!(rook.has_moved);
        assert!(game.piece_at(sq(7, 7)).is_none());
        assert_eq!(game.king_square(Color::White), sq(7, 6));

        unmake_move(&mut game, &undo).expect("undo");
        assert_eq!(game, before);
        assert!(!game.piece_at(sq(7, 7)).expect("rook back on h1").has_moved);
    }

    #[test]
    fn queenside_castle_puts_rook_on_d_file() {
        let pieces = [
            (sq(0, 4), Piece::new(PieceKind::King, Color::Black)),
            (sq(0, 0), Piece::new(PieceKind::Rook, Color::Black)),
            (sq(7, 4), Piece::new(PieceKind::King, Color::White)),
        ];
        let mut game = GameState::from_pieces(Color::Black, &pieces).expect("valid position");
        let mv = find_legal_move(&game, sq(0, 4), sq(0, 2)).expect("castling is legal");
        apply_move(&mut game, mv).expect("apply");
        assert_eq!(game.piece_at(sq(0, 3)).map(|p| p.kind), Some(PieceKind::Rook));
        assert!(game.piece_at(sq(0, 0)).is_none());
        assert_eq!(game.king_square(Color::Black), sq(0, 2));
    }

    #[test]
    fn pawn_reaching_last_rank_becomes_queen() {
        let pieces = [
            (sq(7, 4), Piece::new(PieceKind::King, Color::White)),
            (sq(1, 0), Piece::new(PieceKind::Pawn, Color::White)),
            (sq(0, 7), Piece::new(PieceKind::King, Color::Black)),
        ];
        let mut game = GameState::from_pieces(Color::White, &pieces).expect("valid position");
        let before = game;
        let moves = crate::move_generation::legal_move_generator::legal_moves_from(&game, sq(1, 0));
        assert_eq!(moves, vec![ChessMove::new(sq(1, 0), sq(0, 0))]);

        let undo = apply_move(&mut game, moves[0]).expect("apply");
        let promoted = game.piece_at(sq(0, 0)).expect("promoted piece");
        assert_eq!(promoted.kind, PieceKind::Queen);
        assert_eq!(promoted.color, Color::White);

        unmake_move(&mut game, &undo).expect("undo");
        assert_eq!(game, before);
        assert_eq!(game.piece_at(sq(1, 0)).map(|p| p.kind), Some(PieceKind::Pawn));
    }

    #[test]
    fn black_pawn_promotes_on_row_seven() {
        let pieces = [
            (sq(7, 7), Piece::new(PieceKind::King, Color::White)),
            (sq(6, 2), Piece::new(PieceKind::Pawn, Color::Black)),
            (sq(7, 3), Piece::new(PieceKind::Knight, Color::White)),
            (sq(0, 4), Piece::new(PieceKind::King, Color::Black)),
        ];
        let mut game = GameState::from_pieces(Color::Black, &pieces).expect("valid position");
        apply_move(&mut game, ChessMove::new(sq(6, 2), sq(7, 3))).expect("apply");
        assert_eq!(
            game.piece_at(sq(7, 3)),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
    }

    #[test]
    fn applying_from_empty_square_is_rejected() {
        let mut game = GameState::new_game();
        let before = game;
        let result = apply_move(&mut game, ChessMove::new(sq(4, 4), sq(3, 4)));
        assert!(matches!(result, Err(ChessError::IllegalMove { .. })));
        assert_eq!(game, before);
    }

    #[test]
    fn applying_off_board_move_is_rejected() {
        let mut game = GameState::new_game();
        let before = game;
        let result = apply_move(&mut game, ChessMove::new(sq(6, 4), sq(6, 8)));
        assert!(matches!(result, Err(ChessError::InvalidSquare(_))));
        assert_eq!(game, before);
    }
}
