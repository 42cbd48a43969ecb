//! Interactive two-player driver for regicide.

pub mod command;
pub mod error;
pub mod history;
pub mod session;

pub use command::{Command, parse_command};
pub use error::PlayError;
pub use history::{Action, ActionKind, History};
pub use session::{EndReason, Outcome, Session, SessionConfig, Step};
