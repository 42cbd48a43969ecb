//! King movement.

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;

use super::empty_or_enemy;

/// One step in any of the eight directions. Castling is a separate action
/// and is never a valid ordinary king move.
pub(super) fn king_move(board: &Board, king: Piece, dest: Square) -> bool {
    let from = king.square();
    let distance = from.manhattan_distance(dest);
    (distance == 1 || (distance == 2 && from.same_diagonal(dest))) && empty_or_enemy(board, king, dest)
}
