//! Movement legality per piece variant.
//!
//! These rules answer "can this piece go there by its own pattern"; they know
//! nothing about whose turn it is or whether the mover's king ends up
//! attacked. [`Game`](crate::Game) layers self-check safety on top.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::color::Color;
use crate::piece::{Piece, Variant};
use crate::square::Square;

use self::king::king_move;
use self::knights::knight_move;
use self::pawns::pawn_move;
use self::sliders::{bishop_move, queen_move, rook_move};

impl Piece {
    /// Return `true` if this piece may move to `dest` by its movement pattern.
    pub fn is_valid_move(self, board: &Board, dest: Square) -> bool {
        match self.variant() {
            Variant::Pawn { moved } => pawn_move(board, self, moved, dest),
            Variant::Knight => knight_move(board, self, dest),
            Variant::Bishop => bishop_move(board, self, dest),
            Variant::Rook { .. } => rook_move(board, self, dest),
            Variant::Queen => queen_move(board, self, dest),
            Variant::King { .. } => king_move(board, self, dest),
        }
    }

    /// Integer form of [`is_valid_move`](Self::is_valid_move); destinations
    /// off the board are never valid.
    pub fn is_valid_move_to(self, board: &Board, file: i32, rank: i32) -> bool {
        Square::new(file, rank).is_ok_and(|dest| self.is_valid_move(board, dest))
    }

    /// Return every square this piece may move to by its pattern.
    pub fn valid_destinations(self, board: &Board) -> Vec<Square> {
        Square::all().filter(|&dest| self.is_valid_move(board, dest)).collect()
    }
}

impl Board {
    /// Return `true` if any piece of `by_color` could move to `sq`.
    pub fn is_attacked(&self, sq: Square, by_color: Color) -> bool {
        self.pieces_of(by_color)
            .into_iter()
            .any(|piece| piece.is_valid_move(self, sq))
    }
}

/// The destination is empty or holds an opposing piece.
fn empty_or_enemy(board: &Board, piece: Piece, dest: Square) -> bool {
    board.piece(dest).is_none_or(|other| other.color() != piece.color())
}
