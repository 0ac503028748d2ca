use thiserror::Error;

use super::session::IdentityField;

/// Failures the interpreter reports as ERROR transcript records.
///
/// The `Display` text is exactly what the player sees.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// `set-username` / `set-hostname` given without a value.
    #[error("{field} not provided")]
    MissingArgument { field: IdentityField },

    /// A control command received more tokens than it accepts.
    #[error("Invalid command")]
    ArgumentOverflow,

    /// Line matched neither a control command nor a delegate verb.
    #[error("Unknown command: {0}. For a list of commands, type \"help\"")]
    UnknownCommand(String),
}
