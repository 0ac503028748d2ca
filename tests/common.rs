//! Test utilities shared by the integration tests.

use termquest::game::Adventure;
use termquest::terminal::{CommandInterpreter, TranscriptRecord};
use termquest::GameSession;

/// A fresh session with the canonical world and default identity.
pub fn session() -> GameSession {
    CommandInterpreter::builder(Adventure::new(), "player", "termquest").build()
}

/// Run each line in order.
#[allow(dead_code)] // Not every test file replays scripts.
pub fn run_all(session: &mut GameSession, lines: &[&str]) {
    for line in lines {
        session.handle_command(line);
    }
}

/// Most recent transcript record; panics on an empty transcript.
#[allow(dead_code)]
pub fn last(session: &GameSession) -> &TranscriptRecord {
    session.transcript().last().expect("transcript has a record")
}
