//! Player command parsing.

use regicide_core::{CastleSide, Flank, Square};

use crate::error::PlayError;

/// A parsed player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `M <from> <to>` -- move a piece.
    Move { from: Square, to: Square },
    /// `GR` (queen side) or `PR` (king side) -- castle.
    Castle(CastleSide),
    /// `GP` (left flank) or `DP` (right flank) -- capture en passant.
    EnPassant(Flank),
    /// `H` -- print the action history.
    History,
    /// `B` -- redraw the board.
    Board,
    /// `A` -- abandon the game.
    Abandon,
}

/// Parse a single line of player input into a [`Command`].
///
/// Verbs and squares are case-insensitive.
pub fn parse_command(line: &str) -> Result<Command, PlayError> {
    let mut tokens = line.split_whitespace();
    let verb = tokens.next().ok_or(PlayError::EmptyCommand)?;

    let command = match verb.to_ascii_uppercase().as_str() {
        "M" => {
            let from = tokens.next().ok_or(PlayError::MissingSquare)?;
            let to = tokens.next().ok_or(PlayError::MissingSquare)?;
            Command::Move {
                from: from.parse()?,
                to: to.parse()?,
            }
        }
        "GR" => Command::Castle(CastleSide::QueenSide),
        "PR" => Command::Castle(CastleSide::KingSide),
        "GP" => Command::EnPassant(Flank::Left),
        "DP" => Command::EnPassant(Flank::Right),
        "H" => Command::History,
        "B" => Command::Board,
        "A" => Command::Abandon,
        _ => {
            return Err(PlayError::UnknownCommand {
                verb: verb.to_string(),
            });
        }
    };

    match tokens.next() {
        Some(extra) => Err(PlayError::TrailingInput {
            token: extra.to_string(),
        }),
        None => Ok(command),
    }
}
