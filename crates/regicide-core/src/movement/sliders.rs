//! Sliding piece (bishop, rook, queen) movement.

use crate::board::{Board, Line};
use crate::piece::Piece;
use crate::square::Square;

use super::empty_or_enemy;

/// Return `true` if `dest` is reachable from the piece along `line` with no
/// piece strictly in between.
fn slides_along(board: &Board, piece: Piece, dest: Square, line: Line) -> bool {
    let from = piece.square();
    from != dest
        && board.is_obstructed(from, dest, line) == Ok(false)
        && empty_or_enemy(board, piece, dest)
}

pub(super) fn bishop_move(board: &Board, bishop: Piece, dest: Square) -> bool {
    slides_along(board, bishop, dest, Line::Diagonal)
}

pub(super) fn rook_move(board: &Board, rook: Piece, dest: Square) -> bool {
    slides_along(board, rook, dest, Line::File) || slides_along(board, rook, dest, Line::Rank)
}

pub(super) fn queen_move(board: &Board, queen: Piece, dest: Square) -> bool {
    rook_move(board, queen, dest) || bishop_move(board, queen, dest)
}
