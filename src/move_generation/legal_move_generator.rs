//! Legality filter and legal move enumeration.
//!
//! Candidates come from the raw per-piece generators plus castling. Each
//! candidate is displaced on a scratch copy of the board and king cache, and
//! survives only if the mover's king is not attacked afterwards. The probe
//! only relocates the primary piece: rook hops and promotion cannot change
//! whether the mover's own king is safe.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_moves_king::generate_castling_moves;
use crate::moves::piece_moves::generator_for;

/// True when `mv` does not leave the mover's king attacked. An empty or
/// off-board origin is never legal.
pub fn is_legal(game_state: &GameState, mv: ChessMove) -> bool {
    if !mv.from.is_on_board() || !mv.to.is_on_board() {
        return false;
    }
    let Some(piece) = game_state.piece_at(mv.from) else {
        return false;
    };

    let mut scratch = game_state.board;
    let mut king_squares = game_state.king_squares;

    scratch.set(mv.to, scratch.get(mv.from));
    scratch.set(mv.from, None);
    if piece.kind == PieceKind::King {
        king_squares[piece.color.index()] = mv.to;
    }

    !is_square_attacked(&scratch, king_squares[piece.color.index()], piece.color.opposite())
}

/// Raw moves plus castling for the piece on `from`, ignoring king safety.
pub fn pseudo_legal_moves(game_state: &GameState, from: Square) -> Vec<ChessMove> {
    if !from.is_on_board() {
        return Vec::new();
    }
    let Some(piece) = game_state.piece_at(from) else {
        return Vec::new();
    };

    let mut targets = Vec::with_capacity(28);
    generator_for(piece.kind)(&game_state.board, from, piece.color, &mut targets);

    let mut moves: Vec<ChessMove> = targets
        .into_iter()
        .map(|to| ChessMove::new(from, to))
        .collect();

    if piece.kind == PieceKind::King {
        generate_castling_moves(game_state, from, &mut moves);
    }

    moves
}

/// Legal moves for the piece on `square`. Empty when the square is empty,
/// off the board, or holds a piece of the side not to move.
pub fn legal_moves_from(game_state: &GameState, square: Square) -> Vec<ChessMove> {
    if !square.is_on_board() {
        return Vec::new();
    }
    match game_state.piece_at(square) {
        Some(piece) if piece.color == game_state.side_to_move => {
            let mut moves = pseudo_legal_moves(game_state, square);
            moves.retain(|mv| is_legal(game_state, *mv));
            moves
        }
        _ => Vec::new(),
    }
}

/// Every legal move for the side to move, row-major by origin square.
pub fn generate_legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    let side = game_state.side_to_move;
    let mut legal = Vec::with_capacity(64);
    for (from, _) in game_state.board.pieces_of(side) {
        legal.extend(legal_moves_from(game_state, from));
    }
    legal
}

/// Looks up the legal move matching `(from, to)`, carrying any castling tag.
pub fn find_legal_move(game_state: &GameState, from: Square, to: Square) -> Option<ChessMove> {
    legal_moves_from(game_state, from)
        .into_iter()
        .find(|mv| mv.to == to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::apply_move;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn start_position_has_twenty_legal_moves() {
        let game = GameState::new_game();
        let moves = generate_legal_moves(&game);
        assert_eq!(moves.len(), 20);

        let knight_moves = moves
            .iter()
            .filter(|mv| game.piece_at(mv.from).map(|p| p.kind) == Some(PieceKind::Knight))
            .count();
        assert_eq!(knight_moves, 4);
    }

    #[test]
    fn opponent_pieces_have_no_moves_on_wrong_turn() {
        let game = GameState::new_game();
        assert!(legal_moves_from(&game, sq(1, 4)).is_empty());
        assert!(legal_moves_from(&game, sq(4, 4)).is_empty());
    }

    #[test]
    fn pinned_piece_cannot_leave_the_pin_line() {
        let pieces = [
            (sq(7, 4), Piece::new(PieceKind::King, Color::White)),
            (sq(5, 4), Piece::new(PieceKind::Knight, Color::White)),
            (sq(0, 4), Piece::new(PieceKind::Rook, Color::Black)),
            (sq(0, 0), Piece::new(PieceKind::King, Color::Black)),
        ];
        let game = GameState::from_pieces(Color::White, &pieces).expect("valid position");
        assert!(legal_moves_from(&game, sq(5, 4)).is_empty());
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let pieces = [
            (sq(7, 4), Piece::new(PieceKind::King, Color::White)),
            (sq(0, 3), Piece::new(PieceKind::Rook, Color::Black)),
            (sq(0, 7), Piece::new(PieceKind::King, Color::Black)),
        ];
        let game = GameState::from_pieces(Color::White, &pieces).expect("valid position");
        let moves = legal_moves_from(&game, sq(7, 4));
        assert!(moves.iter().all(|mv| mv.to.col != 3));
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn king_may_capture_an_undefended_attacker() {
        let pieces = [
            (sq(7, 4), Piece::new(PieceKind::King, Color::White)),
            (sq(6, 4), Piece::new(PieceKind::Queen, Color::Black)),
            (sq(0, 0), Piece::new(PieceKind::King, Color::Black)),
        ];
        let game = GameState::from_pieces(Color::White, &pieces).expect("valid position");
        let moves = legal_moves_from(&game, sq(7, 4));
        assert_eq!(moves, vec![ChessMove::new(sq(7, 4), sq(6, 4))]);
    }

    #[test]
    fn no_legal_move_leaves_own_king_attacked() {
        let mut game = GameState::new_game();
        for (from, to) in [
            (sq(6, 4), sq(4, 4)),
            (sq(1, 5), sq(2, 5)),
            (sq(7, 3), sq(3, 7)),
        ] {
            let mv = find_legal_move(&game, from, to).expect("scripted move is legal");
            apply_move(&mut game, mv).expect("apply should succeed");
        }

        // Black is in check from h5; every reply must resolve it.
        let side = game.side_to_move;
        for mv in generate_legal_moves(&game) {
            let mut next = game;
            apply_move(&mut next, mv).expect("apply should succeed");
            assert!(!is_square_attacked(
                &next.board,
                next.king_square(side),
                side.opposite()
            ));
        }
    }

    #[test]
    fn find_legal_move_rejects_unknown_pairs() {
        let game = GameState::new_game();
        assert!(find_legal_move(&game, sq(6, 4), sq(3, 4)).is_none());
        assert!(find_legal_move(&game, sq(6, 4), sq(4, 4)).is_some());
    }

    #[test]
    fn off_board_squares_yield_no_moves() {
        let game = GameState::new_game();
        assert!(legal_moves_from(&game, sq(8, 0)).is_empty());
        assert!(pseudo_legal_moves(&game, sq(0, 9)).is_empty());
        assert!(!is_legal(&game, ChessMove::new(sq(6, 4), sq(9, 4))));
        assert!(find_legal_move(&game, sq(8, 0), sq(7, 0)).is_none());
    }
}
