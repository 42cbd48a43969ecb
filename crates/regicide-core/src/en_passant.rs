//! En passant: capturing a pawn that just double-stepped past an adjacent pawn.

use std::fmt;

use tracing::{debug, trace};

use crate::board::Board;
use crate::error::EnPassantError;
use crate::game::Game;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Which neighbor of the double-stepped pawn makes the capture.
///
/// `Left` is the pawn on the lower file (toward A), `Right` the higher file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flank {
    Left,
    Right,
}

impl Flank {
    /// Both flanks, left first.
    pub const ALL: [Flank; 2] = [Flank::Left, Flank::Right];

    /// File offset from the double-stepped pawn to the capturer.
    #[inline]
    pub const fn file_delta(self) -> i32 {
        match self {
            Flank::Left => -1,
            Flank::Right => 1,
        }
    }

    /// Return the opposite flank.
    #[inline]
    pub const fn other(self) -> Flank {
        match self {
            Flank::Left => Flank::Right,
            Flank::Right => Flank::Left,
        }
    }
}

impl fmt::Display for Flank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flank::Left => write!(f, "left"),
            Flank::Right => write!(f, "right"),
        }
    }
}

/// Squares of one en passant capture.
#[derive(Debug, Clone, Copy)]
struct Capture {
    /// The capturing pawn.
    from: Square,
    /// Where the capturing pawn lands.
    to: Square,
    /// The double-stepped pawn being removed.
    victim: Square,
}

impl Game {
    /// Return `true` if the side to move has an en passant capture on either
    /// flank.
    pub fn is_en_passant_possible(&self) -> bool {
        Flank::ALL.into_iter().any(|flank| self.check_side_passant(flank))
    }

    /// Return `true` if the pawn on `flank` of the last double-stepped pawn
    /// may capture it en passant.
    ///
    /// The last action must have been an opposing pawn's double step, the
    /// flank square must hold a pawn of the side to move, and the square the
    /// victim passed over must be empty. Self-check safety is not considered.
    pub fn check_side_passant(&self, flank: Flank) -> bool {
        self.capture_for(flank).is_some()
    }

    /// Capture en passant with the pawn on `flank`, returning the capturing
    /// pawn's start and landing squares.
    ///
    /// # Errors
    ///
    /// - [`EnPassantError::Unavailable`] if no en passant capture exists.
    /// - [`EnPassantError::WrongSide`] if one exists only on the other flank.
    /// - [`EnPassantError::ExposesKing`] if capturing would leave the mover's
    ///   king attacked.
    ///
    /// The game is unchanged on error.
    pub fn en_passant(&mut self, flank: Flank) -> Result<(Square, Square), EnPassantError> {
        let Some(capture) = self.capture_for(flank) else {
            if self.check_side_passant(flank.other()) {
                trace!(requested = %flank, "en passant refused: wrong flank");
                return Err(EnPassantError::WrongSide {
                    requested: flank,
                    eligible: flank.other(),
                });
            }
            trace!(requested = %flank, "en passant refused: unavailable");
            return Err(EnPassantError::Unavailable);
        };

        let color = self.current_color();
        let board = self.board_after(capture);
        let king = self.king_square(color);
        if self.king_in_check(&board, color, king) {
            trace!(%flank, "en passant refused: exposes king");
            return Err(EnPassantError::ExposesKing { flank });
        }

        self.commit(board, color, king, (capture.from, capture.to));
        debug!(%color, from = %capture.from, to = %capture.to, captured = %capture.victim, "en passant");
        Ok((capture.from, capture.to))
    }

    /// Return `true` if the en passant capture on `flank` exists and keeps the
    /// mover's king safe.
    pub(crate) fn en_passant_is_safe(&self, flank: Flank) -> bool {
        self.capture_for(flank).is_some_and(|capture| {
            let color = self.current_color();
            !self.king_in_check(&self.board_after(capture), color, self.king_square(color))
        })
    }

    fn capture_for(&self, flank: Flank) -> Option<Capture> {
        let (start, victim) = self.double_step?;
        let board = self.board();
        let color = self.current_color();

        if !start.same_file(victim) || start.manhattan_distance(victim) != 2 {
            return None;
        }
        let target = board.piece(victim)?;
        if target.kind() != PieceKind::Pawn || target.color() == color {
            return None;
        }

        let from = victim.offset(flank.file_delta(), 0)?;
        let capturer = board.piece(from)?;
        if capturer.kind() != PieceKind::Pawn || capturer.color() != color {
            return None;
        }

        let to = victim.offset(0, color.forward())?;
        if board.is_occupied(to) {
            return None;
        }
        Some(Capture { from, to, victim })
    }

    fn board_after(&self, capture: Capture) -> Board {
        let mut board = *self.board();
        board.set_piece(capture.victim, None);
        board.relocate(capture.from, capture.to);
        board
    }
}
