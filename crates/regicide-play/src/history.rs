//! Record of the actions played in a session.

use std::fmt;

use regicide_core::{Color, Flank, Square};

/// What a player did on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Move { from: Square, to: Square },
    CastleQueenSide,
    CastleKingSide,
    EnPassant { flank: Flank, from: Square, to: Square },
    Abandon,
}

/// One recorded action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    /// Turn counter at the time of the action.
    pub turn: u32,
    /// The side that acted.
    pub player: Color,
    pub kind: ActionKind,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "turn {}, {}: ", self.turn, self.player)?;
        match self.kind {
            ActionKind::Move { from, to } => write!(f, "moves {from} to {to}"),
            ActionKind::CastleQueenSide => write!(f, "castles queen side"),
            ActionKind::CastleKingSide => write!(f, "castles king side"),
            ActionKind::EnPassant { flank, from, to } => {
                write!(f, "takes en passant from the {flank}, {from} to {to}")
            }
            ActionKind::Abandon => write!(f, "abandons"),
        }
    }
}

/// Actions in the order they were played.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    actions: Vec<Action>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> History {
        History::default()
    }

    /// Append an action.
    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Return the number of recorded actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Return `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Return the most recent action.
    pub fn last(&self) -> Option<&Action> {
        self.actions.last()
    }

    /// Iterate over the actions in play order.
    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.actions.is_empty() {
            return writeln!(f, "no actions yet");
        }
        for action in &self.actions {
            writeln!(f, "{action}")?;
        }
        Ok(())
    }
}
