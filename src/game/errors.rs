use thiserror::Error;

use super::types::Direction;
use super::verbs::Verb;

/// Verb precondition failures. The `Display` text is the ERROR record output.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Nothing found")]
    NothingFound,

    #[error("You can't go that way")]
    NoExit,

    #[error("The way {0} is locked")]
    ExitLocked(Direction),

    #[error("There is no {0} here")]
    NotHere(String),

    #[error("The {0} cannot be taken")]
    CannotTake(String),

    #[error("You don't have that item")]
    NotCarrying,

    #[error("Nothing happens")]
    NoEffect(String),

    #[error("{}", .0.missing_target_prompt())]
    MissingTarget(Verb),

    /// Configured start location is not part of the world.
    #[error("unknown room: {0}")]
    UnknownRoom(String),
}
