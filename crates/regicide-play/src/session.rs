//! Interactive two-player session: prompt, read a command, apply it, repeat.

use std::fmt;
use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use regicide_core::{CastleSide, Color, Game};

use crate::command::{Command, parse_command};
use crate::error::PlayError;
use crate::history::{Action, ActionKind, History};

/// Session settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Name shown for the White player.
    pub white_name: String,
    /// Name shown for the Black player.
    pub black_name: String,
    /// Print the board before each prompt that follows a change.
    pub show_board: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            white_name: "White".to_string(),
            black_name: "Black".to_string(),
            show_board: true,
        }
    }
}

impl SessionConfig {
    /// Return the configured name of `color`'s player.
    pub fn name(&self, color: Color) -> &str {
        match color {
            Color::White => &self.white_name,
            Color::Black => &self.black_name,
        }
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    Checkmate,
    Abandon,
    /// Input ran out before the game was decided.
    InputClosed,
}

/// The result of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// The winning side, or `None` if the game was left undecided.
    pub winner: Option<Color>,
    pub reason: EndReason,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.winner, self.reason) {
            (Some(winner), EndReason::Checkmate) => write!(f, "{winner} wins by checkmate"),
            (Some(winner), EndReason::Abandon) => write!(f, "{} abandons, {winner} wins", !winner),
            _ => write!(f, "the game ends without a result"),
        }
    }
}

/// What the loop should do after a command was executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A move, castle, or en passant capture was played and the turn passed.
    Played,
    /// The player asked for the action history.
    ShowHistory,
    /// The player asked for the board.
    ShowBoard,
    /// The game is over.
    Finished(Outcome),
}

/// A game between two players sharing one input stream.
#[derive(Debug, Clone, Default)]
pub struct Session {
    game: Game,
    history: History,
    config: SessionConfig,
}

impl Session {
    /// Create a session on a fresh game.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_game(Game::new(), config)
    }

    /// Create a session continuing an existing game.
    pub fn with_game(game: Game, config: SessionConfig) -> Self {
        Self {
            game,
            history: History::new(),
            config,
        }
    }

    /// Return the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Return the actions recorded so far.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Apply one command for the side to move.
    ///
    /// Successful moves, castles, and en passant captures are recorded and
    /// pass the turn exactly once. Refused actions change nothing.
    pub fn execute(&mut self, command: Command) -> Result<Step, PlayError> {
        let player = self.game.current_color();
        let turn = self.game.turn_number();

        let kind = match command {
            Command::History => return Ok(Step::ShowHistory),
            Command::Board => return Ok(Step::ShowBoard),
            Command::Abandon => {
                self.history.push(Action {
                    turn,
                    player,
                    kind: ActionKind::Abandon,
                });
                info!(%player, turn, "player abandoned");
                return Ok(Step::Finished(Outcome {
                    winner: Some(!player),
                    reason: EndReason::Abandon,
                }));
            }
            Command::Move { from, to } => {
                self.game.turn(from, to)?;
                ActionKind::Move { from, to }
            }
            Command::Castle(side) => {
                self.game.castle(side)?;
                match side {
                    CastleSide::QueenSide => ActionKind::CastleQueenSide,
                    CastleSide::KingSide => ActionKind::CastleKingSide,
                }
            }
            Command::EnPassant(flank) => {
                let (from, to) = self.game.en_passant(flank)?;
                ActionKind::EnPassant { flank, from, to }
            }
        };

        self.history.push(Action { turn, player, kind });
        self.game.pass_turn();

        let next = self.game.current_color();
        if self.game.is_check_mate(next) {
            info!(winner = %player, turn, "checkmate");
            return Ok(Step::Finished(Outcome {
                winner: Some(player),
                reason: EndReason::Checkmate,
            }));
        }
        Ok(Step::Played)
    }

    /// Run the session until checkmate, abandonment, or end of input.
    ///
    /// Refused commands are reported on `writer` and the same player is
    /// prompted again.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::Io`] if reading or writing fails.
    pub fn run<R: BufRead, W: Write>(&mut self, mut reader: R, mut writer: W) -> Result<Outcome, PlayError> {
        info!(
            white = %self.config.white_name,
            black = %self.config.black_name,
            "session started"
        );

        let mut buf = Vec::new();
        let mut redraw = self.config.show_board;
        let outcome = loop {
            self.prompt(&mut writer, redraw)?;
            redraw = false;

            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break Outcome {
                    winner: None,
                    reason: EndReason::InputClosed,
                };
            }
            let result = match std::str::from_utf8(&buf) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    debug!(cmd = %trimmed, "received command");
                    parse_command(trimmed).and_then(|command| self.execute(command))
                }
                Err(_) => Err(PlayError::NotUtf8),
            };

            match result {
                Ok(Step::Played) => {
                    if let Some(action) = self.history.last() {
                        writeln!(writer, "{action}")?;
                    }
                    redraw = self.config.show_board;
                }
                Ok(Step::ShowHistory) => {
                    writeln!(writer, "==== history ====")?;
                    write!(writer, "{}", self.history)?;
                }
                Ok(Step::ShowBoard) => redraw = true,
                Ok(Step::Finished(outcome)) => {
                    if self.config.show_board {
                        writeln!(writer, "{}", self.game.board().pretty())?;
                    }
                    break outcome;
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    warn!(error = %e, "action rejected");
                    writeln!(writer, "{e}")?;
                }
            }
        };

        writeln!(writer, "==== game over ====")?;
        writeln!(writer, "{}", self.describe(outcome))?;
        writer.flush()?;
        info!(?outcome, "session finished");
        Ok(outcome)
    }

    fn prompt<W: Write>(&self, writer: &mut W, show_board: bool) -> Result<(), PlayError> {
        let mover = self.game.current_color();
        if show_board {
            writeln!(writer, "{}", self.game.board().pretty())?;
        }
        writeln!(
            writer,
            "==== turn {}: {} ({mover}) to play ====",
            self.game.turn_number(),
            self.config.name(mover)
        )?;
        if self.game.is_check(mover) {
            writeln!(writer, "You are in check.")?;
        }
        if self.game.is_en_passant_possible() {
            writeln!(writer, "An en passant capture is available (GP: left, DP: right).")?;
        }
        write!(
            writer,
            "Action? M <from> <to>, GR/PR castle, GP/DP en passant, H history, B board, A abandon: "
        )?;
        writer.flush()?;
        Ok(())
    }

    fn describe(&self, outcome: Outcome) -> String {
        match outcome.winner {
            Some(winner) => format!("{outcome}. The winner is {}.", self.config.name(winner)),
            None => outcome.to_string(),
        }
    }
}
