//! Pawn movement.

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;

/// Forward pushes (one square, or two from an unmoved pawn) onto empty
/// squares, and one-square diagonal captures of an opposing piece.
pub(super) fn pawn_move(board: &Board, pawn: Piece, moved: bool, dest: Square) -> bool {
    let from = pawn.square();
    let forward = pawn.color().forward();
    let df = dest.file() - from.file();
    let dr = dest.rank() - from.rank();

    match (df.abs(), dr * forward) {
        (0, 1) => !board.is_occupied(dest),
        (0, 2) => {
            !moved
                && !board.is_occupied(dest)
                && from.offset(0, forward).is_some_and(|mid| !board.is_occupied(mid))
        }
        (1, 1) => board.piece(dest).is_some_and(|target| target.color() != pawn.color()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn place(board: &mut Board, kind: PieceKind, color: Color, at: &str) {
        board.set_piece(sq(at), Some(Piece::new(kind, color, sq(at))));
    }

    #[test]
    fn single_and_double_push() {
        let board = Board::starting_position();
        let pawn = board.piece(sq("A2")).unwrap();
        assert!(pawn.is_valid_move(&board, sq("A3")));
        assert!(pawn.is_valid_move(&board, sq("A4")));
        assert!(!pawn.is_valid_move(&board, sq("A5")));
        assert!(!pawn.is_valid_move(&board, sq("B3")));

        let black = board.piece(sq("D7")).unwrap();
        assert!(black.is_valid_move(&board, sq("D6")));
        assert!(black.is_valid_move(&board, sq("D5")));
        assert!(!black.is_valid_move(&board, sq("D8")));
    }

    #[test]
    fn moved_pawn_loses_double_push() {
        let mut board = Board::starting_position();
        board.relocate(sq("A2"), sq("A3"));
        let pawn = board.piece(sq("A3")).unwrap();
        assert!(pawn.is_valid_move(&board, sq("A4")));
        assert!(!pawn.is_valid_move(&board, sq("A5")));
    }

    #[test]
    fn never_backwards_or_sideways() {
        let mut board = Board::empty();
        place(&mut board, PieceKind::Pawn, Color::White, "D4");
        place(&mut board, PieceKind::Pawn, Color::Black, "E5");
        let white = board.piece(sq("D4")).unwrap();
        assert!(!white.is_valid_move(&board, sq("D3")));
        assert!(!white.is_valid_move(&board, sq("C4")));
        assert!(!white.is_valid_move(&board, sq("D4")));

        let black = board.piece(sq("E5")).unwrap();
        assert!(!black.is_valid_move(&board, sq("E6")));
        assert!(black.is_valid_move(&board, sq("E4")));
    }

    #[test]
    fn pushes_need_empty_squares() {
        let mut board = Board::empty();
        place(&mut board, PieceKind::Pawn, Color::White, "E2");
        place(&mut board, PieceKind::Knight, Color::Black, "E3");
        let pawn = board.piece(sq("E2")).unwrap();
        assert!(!pawn.is_valid_move(&board, sq("E3")));
        assert!(!pawn.is_valid_move(&board, sq("E4")), "double push jumps a blocker");

        board.set_piece(sq("E3"), None);
        place(&mut board, PieceKind::Knight, Color::White, "E4");
        assert!(pawn.is_valid_move(&board, sq("E3")));
        assert!(!pawn.is_valid_move(&board, sq("E4")));
    }

    #[test]
    fn diagonal_only_captures_opponents() {
        let mut board = Board::starting_position();
        let pawn = board.piece(sq("A2")).unwrap();
        assert!(!pawn.is_valid_move(&board, sq("B3")), "empty diagonal");

        place(&mut board, PieceKind::Pawn, Color::White, "A6");
        let advanced = board.piece(sq("A6")).unwrap();
        assert!(advanced.is_valid_move(&board, sq("B7")));
        assert!(!advanced.is_valid_move(&board, sq("A7")));

        place(&mut board, PieceKind::Knight, Color::White, "B3");
        assert!(!pawn.is_valid_move(&board, sq("B3")), "own piece on the diagonal");
    }
}
