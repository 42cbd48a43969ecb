//! A piece on the board: color, variant payload, and current square.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Per-variant state. Only pawns, rooks, and kings remember whether they moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Pawn { moved: bool },
    Knight,
    Bishop,
    Rook { moved: bool },
    Queen,
    King { moved: bool },
}

impl Variant {
    /// Return the fresh (unmoved) variant for a kind.
    pub const fn unmoved(kind: PieceKind) -> Variant {
        match kind {
            PieceKind::Pawn => Variant::Pawn { moved: false },
            PieceKind::Knight => Variant::Knight,
            PieceKind::Bishop => Variant::Bishop,
            PieceKind::Rook => Variant::Rook { moved: false },
            PieceKind::Queen => Variant::Queen,
            PieceKind::King => Variant::King { moved: false },
        }
    }

    /// Return the kind tag.
    pub const fn kind(self) -> PieceKind {
        match self {
            Variant::Pawn { .. } => PieceKind::Pawn,
            Variant::Knight => PieceKind::Knight,
            Variant::Bishop => PieceKind::Bishop,
            Variant::Rook { .. } => PieceKind::Rook,
            Variant::Queen => PieceKind::Queen,
            Variant::King { .. } => PieceKind::King,
        }
    }
}

/// A colored piece standing on a square.
///
/// Pieces are plain values. The [`Board`](crate::Board) stamps the square of
/// the cell it stores a piece in, so `piece.square()` always names its cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    variant: Variant,
    square: Square,
}

impl Piece {
    /// Create an unmoved piece of the given kind and color.
    ///
    /// The square is provisional until the piece is stored on a board.
    pub const fn new(kind: PieceKind, color: Color, square: Square) -> Piece {
        Piece {
            color,
            variant: Variant::unmoved(kind),
            square,
        }
    }

    /// Return the color.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Return the variant payload.
    #[inline]
    pub const fn variant(self) -> Variant {
        self.variant
    }

    /// Return the kind tag.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.variant.kind()
    }

    /// Return the square the piece stands on.
    #[inline]
    pub const fn square(self) -> Square {
        self.square
    }

    /// Return the "has moved" flag, or `None` for variants that do not track it.
    pub const fn has_moved(self) -> Option<bool> {
        match self.variant {
            Variant::Pawn { moved } | Variant::Rook { moved } | Variant::King { moved } => Some(moved),
            _ => None,
        }
    }

    /// Return `true` for a pawn, rook, or king that has not moved yet.
    #[inline]
    pub const fn is_unmoved(self) -> bool {
        matches!(self.has_moved(), Some(false))
    }

    /// Return this piece relocated to `square`.
    #[inline]
    pub(crate) const fn at(self, square: Square) -> Piece {
        Piece { square, ..self }
    }

    /// Return this piece relocated to `square` with its moved flag set.
    pub(crate) const fn moved_to(self, square: Square) -> Piece {
        let variant = match self.variant {
            Variant::Pawn { .. } => Variant::Pawn { moved: true },
            Variant::Rook { .. } => Variant::Rook { moved: true },
            Variant::King { .. } => Variant::King { moved: true },
            other => other,
        };
        Piece {
            color: self.color,
            variant,
            square,
        }
    }

    /// Return the Unicode glyph for this piece.
    #[inline]
    pub const fn glyph(self) -> char {
        self.kind().glyph(self.color)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.color, self.kind(), self.square)?;
        if self.has_moved() == Some(true) {
            write!(f, " (moved)")?;
        }
        Ok(())
    }
}
