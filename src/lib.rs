//! # Termquest - Terminal Text Adventure Core
//!
//! Termquest is a small text adventure driven through a shell-like terminal.
//! The player types lines; a command interpreter recognizes its own control
//! commands and hands everything else to the adventure's verb vocabulary.
//! Every outcome lands in a transcript that a front end renders.
//!
//! ## Features
//!
//! - **Command Interpreter**: `clear`, `set-username`, `set-hostname` and `help` control commands with an unknown-command fallback.
//! - **Transcript**: append-only records of command, output and severity, with emphasis spans instead of inline markup.
//! - **Adventure**: rooms, exits, items, and the `look`, `go`, `pickup`, `drop`, `use`, `inventory` verbs.
//! - **Pluggable Matching**: full-line or leading-token verb dispatch, selected by configuration.
//!
//! ## Quick Start
//!
//! ```rust
//! use termquest::game::Adventure;
//! use termquest::terminal::CommandInterpreter;
//!
//! let mut session = CommandInterpreter::builder(Adventure::new(), "player", "termquest").build();
//! session.handle_command("pickup sword");
//! session.handle_command("inventory");
//!
//! assert_eq!(session.transcript().len(), 2);
//! assert!(session.delegate().player().is_armed());
//! ```
//!
//! ## Module Organization
//!
//! - [`terminal`] - Command interpreter, transcript store and session identity
//! - [`game`] - Player state, world map and verb handlers
//! - [`config`] - Configuration management and validation
//! - [`validation`] - Identity string validation
//! - [`logutil`] - Log-safe escaping of player input
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Shell (bin)    │ ← reads lines, renders transcript
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │  Terminal       │ ← control commands, transcript, identity
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │  Game           │ ← verbs, player state, world
//! └─────────────────┘
//! ```

pub mod config;
pub mod game;
pub mod logutil;
pub mod terminal;
pub mod validation;

use anyhow::Result;

use crate::config::Config;
use crate::game::{Adventure, START_LOCATION_ID};
use crate::terminal::CommandInterpreter;

/// An interpreter session driving the adventure.
pub type GameSession = CommandInterpreter<Adventure>;

/// Build a session from validated configuration.
pub fn new_session(config: &Config) -> Result<GameSession> {
    let start = config
        .game
        .start_location
        .as_deref()
        .unwrap_or(START_LOCATION_ID);
    let adventure = Adventure::starting_at(start)?.with_dispatch_mode(config.game.dispatch);

    let mut builder = CommandInterpreter::builder(
        adventure,
        config.session.username.clone(),
        config.session.hostname.clone(),
    )
    .show_banner(config.game.show_banner);
    if let Some(command) = &config.session.command {
        builder = builder.command(command.clone());
    }
    Ok(builder.build())
}

#[cfg(feature = "api-reexports")]
#[allow(unused_imports)]
pub use game::{DispatchMode, PlayerDecision, PlayerState, Verb};
#[cfg(feature = "api-reexports")]
#[allow(unused_imports)]
pub use terminal::{Severity, SessionSnapshot, TranscriptRecord, TranscriptStore};
