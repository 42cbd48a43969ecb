//! Core chess rules: board representation, piece movement, and game state.
//!
//! Moves are validated by reachability on a mailbox [`Board`]; self-check
//! safety is decided on a copy of the board before anything is committed.

mod board;
mod castling;
mod checkmate;
mod color;
mod en_passant;
mod error;
mod game;
mod movement;
mod piece;
mod piece_kind;
mod square;

pub use board::{Board, Line, PrettyBoard};
pub use castling::CastleSide;
pub use checkmate::Escape;
pub use color::Color;
pub use en_passant::Flank;
pub use error::{CastlingError, EnPassantError, LineError, MoveError, PositionError};
pub use game::Game;
pub use piece::{Piece, Variant};
pub use piece_kind::PieceKind;
pub use square::Square;
