//! Knight movement.

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;

use super::empty_or_enemy;

/// An L-shaped jump: Manhattan distance 3 without sharing a rank, file, or
/// diagonal. Knights ignore obstruction.
pub(super) fn knight_move(board: &Board, knight: Piece, dest: Square) -> bool {
    let from = knight.square();
    from.manhattan_distance(dest) == 3
        && !from.same_rank(dest)
        && !from.same_file(dest)
        && !from.same_diagonal(dest)
        && empty_or_enemy(board, knight, dest)
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

    #[test]
    fn eight_jumps_from_the_center() {
        let mut board = Board::empty();
        board.set_piece(sq("D4"), Some(Piece::new(PieceKind::Knight, Color::White, sq("D4"))));
        let knight = board.piece(sq("D4")).unwrap();
        let mut dests = knight.valid_destinations(&board);
        dests.sort();
        let mut expected: Vec<Square> = ["B3", "B5", "C2", "C6", "E2", "E6", "F3", "F5"]
            .into_iter()
            .map(sq)
            .collect();
        expected.sort();
        assert_eq!(dests, expected);
    }

    #[test]
    fn jumps_over_pieces_but_not_onto_own() {
        let board = Board::starting_position();
        let knight = board.piece(sq("B1")).unwrap();
        assert!(knight.is_valid_move(&board, sq("A3")));
        assert!(knight.is_valid_move(&board, sq("C3")));
        assert!(!knight.is_valid_move(&board, sq("D2")));
        assert!(!knight.is_valid_move(&board, sq("B3")));
        assert!(!knight.is_valid_move(&board, sq("B4")), "distance 3 along a file");
        assert!(!knight.is_valid_move(&board, sq("D4")), "distance 5");
    }

    #[test]
    fn captures_opponent() {
        let mut board = Board::starting_position();
        board.set_piece(sq("C3"), Some(Piece::new(PieceKind::Pawn, Color::Black, sq("C3"))));
        let knight = board.piece(sq("B1")).unwrap();
        assert!(knight.is_valid_move(&board, sq("C3")));
    }
}
