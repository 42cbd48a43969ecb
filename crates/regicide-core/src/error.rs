//! Error types for coordinates, line queries, and rejected actions.

use crate::board::Line;
use crate::castling::CastleSide;
use crate::color::Color;
use crate::en_passant::Flank;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A coordinate outside the 8x8 grid, or text that is not a square label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// One of the axes lies outside `0..=7`.
    #[error("invalid position: file {file}, rank {rank}")]
    OutOfBoard {
        /// Zero-based file.
        file: i32,
        /// Zero-based rank.
        rank: i32,
    },
    /// The text is not a letter followed by a digit.
    #[error("malformed square: \"{text}\"")]
    Malformed {
        /// The offending text.
        text: String,
    },
}

/// An obstruction query was made for two squares that do not share the line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{from} and {to} do not share a {line:?}")]
pub struct LineError {
    /// First endpoint.
    pub from: Square,
    /// Second endpoint.
    pub to: Square,
    /// The requested line.
    pub line: Line,
}

/// An ordinary move was refused. The board is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The start square holds no piece.
    #[error("no piece on {from}")]
    EmptySquare {
        /// The empty start square.
        from: Square,
    },
    /// The start square holds a piece of the side not to move.
    #[error("{from} holds a {found} piece, but {mover} is to move")]
    NotYourPiece {
        /// The start square.
        from: Square,
        /// Color of the piece found there.
        found: Color,
        /// Color of the side to move.
        mover: Color,
    },
    /// The piece cannot reach the destination by its movement pattern.
    #[error("a {kind} cannot move from {from} to {to}")]
    InvalidPattern {
        /// The moving piece's kind.
        kind: PieceKind,
        /// The start square.
        from: Square,
        /// The requested destination.
        to: Square,
    },
    /// The move would leave the mover's own king in check.
    #[error("moving from {from} to {to} exposes your own king")]
    ExposesKing {
        /// The start square.
        from: Square,
        /// The requested destination.
        to: Square,
    },
}

/// Castling was requested but is not available.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{color} cannot castle {side}: a piece has moved, the path is blocked, or the path is attacked")]
pub struct CastlingError {
    /// The side that asked to castle.
    pub color: Color,
    /// The requested side.
    pub side: CastleSide,
}

/// An en passant capture was requested but is not available.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnPassantError {
    /// No pawn of the mover can capture en passant in the current position.
    #[error("en passant is not possible in the current position")]
    Unavailable,
    /// En passant is possible, but from the other flank.
    #[error("en passant is not possible from the {requested} flank, only from the {eligible} flank")]
    WrongSide {
        /// The flank the caller asked for.
        requested: Flank,
        /// The flank that qualifies.
        eligible: Flank,
    },
    /// The capture would leave the mover's own king in check.
    #[error("en passant from the {flank} flank exposes your own king")]
    ExposesKing {
        /// The requested flank.
        flank: Flank,
    },
}
