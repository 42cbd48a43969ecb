//! Driver errors.

use regicide_core::{CastlingError, EnPassantError, MoveError, PositionError};

/// Errors that can occur while reading or executing player commands.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    /// The input line held no command.
    #[error("empty command")]
    EmptyCommand,

    /// The first word is not a known action.
    #[error("unknown action `{verb}`; expected M, GR, PR, GP, DP, H, B or A")]
    UnknownCommand {
        /// The unrecognized first word.
        verb: String,
    },

    /// A move command is missing its start or destination square.
    #[error("a move needs a start and a destination, e.g. `M E2 E4`")]
    MissingSquare,

    /// An input line was not valid UTF-8.
    #[error("input line is not valid UTF-8")]
    NotUtf8,

    /// A command was followed by words it does not take.
    #[error("unexpected `{token}` after the command")]
    TrailingInput {
        /// The first extra word.
        token: String,
    },

    /// A square could not be parsed.
    #[error(transparent)]
    Position(#[from] PositionError),

    /// An ordinary move was refused.
    #[error(transparent)]
    Move(#[from] MoveError),

    /// Castling was refused.
    #[error(transparent)]
    Castling(#[from] CastlingError),

    /// An en passant capture was refused.
    #[error(transparent)]
    EnPassant(#[from] EnPassantError),

    /// An I/O error occurred while reading commands or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

impl PlayError {
    /// Return `true` for errors that end the session rather than the action.
    pub fn is_fatal(&self) -> bool {
        matches!(self, PlayError::Io { .. })
    }
}
