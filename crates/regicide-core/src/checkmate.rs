//! Checkmate detection by searching for any legal escape.

use std::fmt;

use tracing::trace;

use crate::color::Color;
use crate::en_passant::Flank;
use crate::game::Game;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// One action that gets a checked side out of check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// The king steps to a safe square.
    KingStep { from: Square, to: Square },
    /// Another piece captures the checker or blocks the line.
    Cover { from: Square, to: Square },
    /// An en passant capture that resolves the check.
    EnPassant(Flank),
}

impl fmt::Display for Escape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Escape::KingStep { from, to } => write!(f, "king {from} to {to}"),
            Escape::Cover { from, to } => write!(f, "{from} to {to}"),
            Escape::EnPassant(flank) => write!(f, "en passant from the {flank}"),
        }
    }
}

impl Game {
    /// Return `true` if `color` is in check and has no legal way out.
    pub fn is_check_mate(&self, color: Color) -> bool {
        if !self.is_check(color) {
            return false;
        }
        match self.find_escape(color) {
            Some(escape) => {
                trace!(%color, %escape, "check, not mate");
                false
            }
            None => true,
        }
    }

    /// Return some action that leaves `color` out of check, if one exists.
    ///
    /// King steps are tried first, then every other piece. En passant only
    /// counts when `color` is the side to move. Castling is never an escape:
    /// it requires the king's home square to be unattacked.
    pub fn find_escape(&self, color: Color) -> Option<Escape> {
        let pieces = self.board().pieces_of(color);
        let (kings, others): (Vec<_>, Vec<_>) = pieces.into_iter().partition(|p| p.kind() == PieceKind::King);

        for piece in kings.into_iter().chain(others) {
            let from = piece.square();
            for to in piece.valid_destinations(self.board()) {
                if self.speculate(from, to).is_ok() {
                    return Some(if piece.kind() == PieceKind::King {
                        Escape::KingStep { from, to }
                    } else {
                        Escape::Cover { from, to }
                    });
                }
            }
        }

        if color != self.current_color() {
            return None;
        }
        Flank::ALL
            .into_iter()
            .find(|&flank| self.en_passant_is_safe(flank))
            .map(Escape::EnPassant)
    }
}
