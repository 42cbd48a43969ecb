//! Castling: the combined king and rook move toward either corner.

use std::fmt;

use tracing::{debug, trace};

use crate::board::{Board, Line};
use crate::color::Color;
use crate::error::CastlingError;
use crate::game::Game;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// File index of the king's home square.
const KING_FILE: i32 = 4;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// File of the rook's home corner.
    #[inline]
    pub const fn rook_file(self) -> i32 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// File the king lands on.
    #[inline]
    pub const fn king_target_file(self) -> i32 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// File the rook lands on, next to the king on the inside.
    #[inline]
    pub const fn rook_target_file(self) -> i32 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Direction of king travel along the rank.
    #[inline]
    const fn step(self) -> i32 {
        match self {
            CastleSide::KingSide => 1,
            CastleSide::QueenSide => -1,
        }
    }
}

impl fmt::Display for CastleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastleSide::KingSide => write!(f, "king side"),
            CastleSide::QueenSide => write!(f, "queen side"),
        }
    }
}

/// The four squares involved in one castling move.
#[derive(Debug, Clone, Copy)]
struct CastlePlan {
    king_from: Square,
    king_to: Square,
    rook_from: Square,
    rook_to: Square,
}

impl CastlePlan {
    fn for_side(color: Color, side: CastleSide) -> Option<CastlePlan> {
        let rank = color.home_rank();
        Some(CastlePlan {
            king_from: Square::new(KING_FILE, rank).ok()?,
            king_to: Square::new(side.king_target_file(), rank).ok()?,
            rook_from: Square::new(side.rook_file(), rank).ok()?,
            rook_to: Square::new(side.rook_target_file(), rank).ok()?,
        })
    }

    /// Squares the king stands on from home to landing, inclusive.
    fn king_path(self, side: CastleSide) -> impl Iterator<Item = Square> {
        (0..3).filter_map(move |i| self.king_from.offset(i * side.step(), 0))
    }
}

impl Game {
    /// Return `true` if the side to move may castle toward `side`.
    ///
    /// Requires an unmoved king and an unmoved rook of the mover on their home
    /// squares, nothing between them, and no square on the king's path
    /// (home, crossing, landing) attacked.
    pub fn can_castle(&self, side: CastleSide) -> bool {
        let color = self.current_color();
        let Some(plan) = CastlePlan::for_side(color, side) else {
            return false;
        };
        let board = self.board();

        if !is_unmoved(board.piece(plan.king_from), PieceKind::King, color) {
            trace!(%color, %side, "castling refused: king has moved or is absent");
            return false;
        }
        if !is_unmoved(board.piece(plan.rook_from), PieceKind::Rook, color) {
            trace!(%color, %side, "castling refused: rook has moved or is absent");
            return false;
        }
        if board.is_obstructed(plan.king_from, plan.rook_from, Line::Rank) != Ok(false) {
            trace!(%color, %side, "castling refused: path is blocked");
            return false;
        }

        for sq in plan.king_path(side) {
            let mut probe = *board;
            probe.relocate(plan.king_from, sq);
            if self.king_in_check(&probe, color, Some(sq)) {
                trace!(%color, %side, square = %sq, "castling refused: king path attacked");
                return false;
            }
        }
        true
    }

    /// Castle toward `side` for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`CastlingError`] if [`can_castle`](Self::can_castle) is false.
    /// The game is unchanged on error.
    pub fn castle(&mut self, side: CastleSide) -> Result<(), CastlingError> {
        let color = self.current_color();
        let plan = CastlePlan::for_side(color, side)
            .filter(|_| self.can_castle(side))
            .ok_or(CastlingError { color, side })?;

        let mut board: Board = *self.board();
        board.relocate(plan.king_from, plan.king_to);
        board.relocate(plan.rook_from, plan.rook_to);
        self.commit(board, color, Some(plan.king_to), (plan.king_from, plan.king_to));

        debug!(%color, %side, king = %plan.king_to, rook = %plan.rook_to, "castled");
        Ok(())
    }
}

fn is_unmoved(piece: Option<Piece>, kind: PieceKind, color: Color) -> bool {
    piece.is_some_and(|p| p.kind() == kind && p.color() == color && p.is_unmoved())
}
