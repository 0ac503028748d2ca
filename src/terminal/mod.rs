//! # Terminal Core Module
//!
//! The command interpreter and the state it owns for one session.
//!
//! ## Components
//!
//! - [`interpreter`] - line classification, control commands and delegation
//! - [`transcript`] - transcript records and the append-only store
//! - [`session`] - username/hostname identity and prompt
//! - [`help`] - help table formatting
//! - [`errors`] - interpreter error taxonomy
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Shell (bin)    │ ← reads lines, renders transcript
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │  Command        │ ← control commands, unknown-command fallback
//! │  Interpreter    │
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │  Delegate       │ ← game verbs (see `crate::game`)
//! └─────────────────┘
//! ```

pub mod errors;
pub mod help;
pub mod interpreter;
pub mod session;
pub mod transcript;

pub use errors::CommandError;
pub use help::{format_help_table, HelpEntry};
pub use interpreter::{
    CommandDelegate, CommandInterpreter, ControlCommand, DelegateReply, InterpreterBuilder,
    SessionSnapshot,
};
pub use session::{IdentityField, SessionIdentity};
pub use transcript::{Emphasis, Severity, Span, StyledText, TranscriptRecord, TranscriptStore};
