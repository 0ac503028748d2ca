//! The command interpreter: classifies one raw line, runs its effect and
//! records the outcome in the transcript.
//!
//! Classification order:
//! 1. control commands (`clear`, `set-username`, `set-hostname`, `help`)
//! 2. delegate verbs, resolved by the [`CommandDelegate`]
//! 3. unknown command
//!
//! Every line is fully resolved inside one [`CommandInterpreter::handle_command`]
//! call. Callers must serialize submissions; the interpreter keeps no
//! in-flight state between calls and does no locking of its own.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::logutil::escape_log;

use super::errors::CommandError;
use super::help::{render_full_help, HelpEntry};
use super::session::{IdentityField, SessionIdentity};
use super::transcript::{Emphasis, StyledText, TranscriptRecord, TranscriptStore};

const HELP_HINT: &str = "\"help\"";

/// Reply from a delegate that recognized a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelegateReply {
    /// Append this record.
    Record(TranscriptRecord),
    /// Empty the transcript, same as the `clear` control command.
    Clear,
}

/// The game-action vocabulary the interpreter delegates to.
///
/// How a line is matched to an action is entirely the delegate's business;
/// the interpreter only hands over the trimmed line and its whitespace tokens
/// (verb included).
pub trait CommandDelegate {
    /// Help entries describing the delegate's vocabulary.
    fn help_entries(&self) -> Vec<HelpEntry>;

    /// Resolve and run `line`. `None` means the line is not part of the
    /// delegate's vocabulary.
    fn dispatch(&mut self, line: &str, tokens: &[String]) -> Option<DelegateReply>;
}

/// Built-in interpreter directives, checked before any delegate verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    Clear,
    SetUsername,
    SetHostname,
    Help,
}

impl ControlCommand {
    pub const ALL: [ControlCommand; 4] = [
        ControlCommand::Clear,
        ControlCommand::SetUsername,
        ControlCommand::SetHostname,
        ControlCommand::Help,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            ControlCommand::Clear => "clear",
            ControlCommand::SetUsername => "set-username",
            ControlCommand::SetHostname => "set-hostname",
            ControlCommand::Help => "help",
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            ControlCommand::Clear => "clear",
            ControlCommand::SetUsername => "set-username <name>",
            ControlCommand::SetHostname => "set-hostname <name>",
            ControlCommand::Help => "help",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ControlCommand::Clear => "Clear the terminal",
            ControlCommand::SetUsername => "Change the username shown in the prompt",
            ControlCommand::SetHostname => "Change the hostname shown in the prompt",
            ControlCommand::Help => "Show this help",
        }
    }

    /// Help table for the control vocabulary.
    pub fn help_entries() -> Vec<HelpEntry> {
        Self::ALL
            .iter()
            .map(|cmd| HelpEntry::new(cmd.usage(), cmd.description()))
            .collect()
    }

    /// `clear` and `help` match the whole line; the identity setters match
    /// on the leading token.
    pub fn classify(line: &str, tokens: &[&str]) -> Option<Self> {
        if line == Self::Clear.keyword() {
            return Some(Self::Clear);
        }
        match tokens.first() {
            Some(&first) if first == Self::SetUsername.keyword() => return Some(Self::SetUsername),
            Some(&first) if first == Self::SetHostname.keyword() => return Some(Self::SetHostname),
            _ => {}
        }
        if line == Self::Help.keyword() {
            return Some(Self::Help);
        }
        None
    }
}

/// Read-only view handed to presentation after each call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub command: String,
    pub history: Vec<TranscriptRecord>,
    pub username: String,
    pub hostname: String,
}

/// Builder mirroring the interpreter's initialization parameters.
pub struct InterpreterBuilder<D> {
    delegate: D,
    identity: SessionIdentity,
    command: String,
    help_entries: Option<Vec<HelpEntry>>,
    history: Vec<TranscriptRecord>,
    show_banner: bool,
}

impl<D: CommandDelegate> InterpreterBuilder<D> {
    /// Seed for the "last command" field.
    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    /// Help entries appended after the built-in table. Defaults to the
    /// delegate's own entries.
    pub fn help_entries(mut self, entries: Vec<HelpEntry>) -> Self {
        self.help_entries = Some(entries);
        self
    }

    /// Initial transcript, kept in order.
    pub fn history(mut self, history: Vec<TranscriptRecord>) -> Self {
        self.history = history;
        self
    }

    pub fn show_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    pub fn build(self) -> CommandInterpreter<D> {
        let help_entries = self
            .help_entries
            .unwrap_or_else(|| self.delegate.help_entries());
        CommandInterpreter {
            delegate: self.delegate,
            identity: self.identity,
            command: self.command,
            transcript: TranscriptStore::from_records(self.history),
            help_entries,
            show_banner: self.show_banner,
        }
    }
}

/// Owns one session: identity, transcript and the delegate vocabulary.
pub struct CommandInterpreter<D> {
    delegate: D,
    identity: SessionIdentity,
    command: String,
    transcript: TranscriptStore,
    help_entries: Vec<HelpEntry>,
    show_banner: bool,
}

impl<D: CommandDelegate> CommandInterpreter<D> {
    pub fn builder(
        delegate: D,
        username: impl Into<String>,
        hostname: impl Into<String>,
    ) -> InterpreterBuilder<D> {
        InterpreterBuilder {
            delegate,
            identity: SessionIdentity::new(username, hostname),
            command: String::new(),
            help_entries: None,
            history: Vec::new(),
            show_banner: true,
        }
    }

    /// Process one raw input line. Never fails; problems become ERROR records.
    pub fn handle_command(&mut self, raw_line: &str) {
        let line = raw_line.trim();
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let control = ControlCommand::classify(line, &tokens);
        debug!(
            "command received: line={} control={:?}",
            escape_log(line),
            control
        );

        match control {
            Some(ControlCommand::Clear) => self.clear_transcript(),
            Some(ControlCommand::SetUsername) => {
                self.update_identity(line, &tokens, IdentityField::Username)
            }
            Some(ControlCommand::SetHostname) => {
                self.update_identity(line, &tokens, IdentityField::Hostname)
            }
            Some(ControlCommand::Help) => {
                let record = self.help_record(line);
                self.record(line, record);
            }
            None => self.delegate_or_unknown(line, &tokens),
        }
    }

    fn delegate_or_unknown(&mut self, line: &str, tokens: &[&str]) {
        let owned: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        match self.delegate.dispatch(line, &owned) {
            Some(DelegateReply::Record(record)) => {
                debug!(
                    "delegate handled line={} severity={:?}",
                    escape_log(line),
                    record.severity()
                );
                self.record(line, record);
            }
            Some(DelegateReply::Clear) => self.clear_transcript(),
            None => {
                debug!("unknown command: {}", escape_log(line));
                let record = unknown_command_record(line);
                self.record(line, record);
            }
        }
    }

    fn record(&mut self, line: &str, record: TranscriptRecord) {
        self.transcript.append(record);
        self.command = line.to_string();
    }

    fn clear_transcript(&mut self) {
        info!("transcript cleared ({} records)", self.transcript.len());
        self.transcript.clear();
    }

    /// Success is silent: the identity changes and no record is appended.
    fn update_identity(&mut self, line: &str, tokens: &[&str], field: IdentityField) {
        match identity_value(tokens, field) {
            Ok(value) => {
                info!("{} changed to {}", field, escape_log(value));
                match field {
                    IdentityField::Username => self.identity.set_username(value),
                    IdentityField::Hostname => self.identity.set_hostname(value),
                }
            }
            Err(err) => self
                .transcript
                .append(TranscriptRecord::error(line, err.to_string())),
        }
    }

    fn help_record(&self, line: &str) -> TranscriptRecord {
        let page = render_full_help(
            &ControlCommand::help_entries(),
            &self.help_entries,
            self.show_banner,
        );
        TranscriptRecord::info(line, page)
    }

    pub fn identity(&self) -> &SessionIdentity {
        &self.identity
    }

    pub fn username(&self) -> &str {
        self.identity.username()
    }

    pub fn hostname(&self) -> &str {
        self.identity.hostname()
    }

    /// Last line that produced a record (or the initial seed).
    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn transcript(&self) -> &TranscriptStore {
        &self.transcript
    }

    /// Restartable view over the transcript, oldest first.
    pub fn history(&self) -> std::slice::Iter<'_, TranscriptRecord> {
        self.transcript.records()
    }

    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            command: self.command.clone(),
            history: self.transcript.as_slice().to_vec(),
            username: self.identity.username().to_string(),
            hostname: self.identity.hostname().to_string(),
        }
    }
}

fn identity_value<'a>(tokens: &[&'a str], field: IdentityField) -> Result<&'a str, CommandError> {
    match tokens {
        [_, value] => Ok(*value),
        [] | [_] => Err(CommandError::MissingArgument { field }),
        _ => Err(CommandError::ArgumentOverflow),
    }
}

fn unknown_command_record(line: &str) -> TranscriptRecord {
    let message = CommandError::UnknownCommand(line.to_string()).to_string();
    let mut out = StyledText::new();
    match message.rfind(HELP_HINT) {
        Some(idx) => {
            out.push_str(&message[..idx])
                .push_emphasized(HELP_HINT, Emphasis::Command)
                .push_str(&message[idx + HELP_HINT.len()..]);
        }
        None => {
            out.push_str(&message);
        }
    }
    TranscriptRecord::error(line, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Delegate with a single full-line verb.
    struct Echo;

    impl CommandDelegate for Echo {
        fn help_entries(&self) -> Vec<HelpEntry> {
            vec![HelpEntry::new("echo", "Repeat a word")]
        }

        fn dispatch(&mut self, line: &str, tokens: &[String]) -> Option<DelegateReply> {
            match tokens.first().map(String::as_str) {
                Some("echo") => Some(DelegateReply::Record(TranscriptRecord::info(
                    line,
                    tokens[1..].join(" "),
                ))),
                Some("wipe") => Some(DelegateReply::Clear),
                _ => None,
            }
        }
    }

    fn interpreter() -> CommandInterpreter<Echo> {
        CommandInterpreter::builder(Echo, "guest", "box").build()
    }

    #[test]
    fn classify_respects_priority_and_token_boundaries() {
        assert_eq!(ControlCommand::classify("clear", &["clear"]), Some(ControlCommand::Clear));
        assert_eq!(
            ControlCommand::classify("set-username a", &["set-username", "a"]),
            Some(ControlCommand::SetUsername)
        );
        assert_eq!(
            ControlCommand::classify("set-usernames a", &["set-usernames", "a"]),
            None
        );
        assert_eq!(ControlCommand::classify("help me", &["help", "me"]), None);
    }

    #[test]
    fn delegate_record_updates_last_command() {
        let mut term = interpreter();
        term.handle_command("  echo hi there ");
        assert_eq!(term.transcript().len(), 1);
        assert_eq!(term.transcript().as_slice()[0].output(), "hi there");
        assert_eq!(term.command(), "echo hi there");
    }

    #[test]
    fn delegate_clear_empties_transcript() {
        let mut term = interpreter();
        term.handle_command("echo one");
        term.handle_command("wipe");
        assert!(term.transcript().is_empty());
    }

    #[test]
    fn unknown_command_hint_is_emphasized() {
        let record = unknown_command_record("dance");
        assert!(record.is_error());
        assert_eq!(
            record.output(),
            "Unknown command: dance. For a list of commands, type \"help\""
        );
        assert_eq!(record.spans().len(), 1);
        assert_eq!(record.spans()[0].slice(record.output()), Some("\"help\""));
    }

    #[test]
    fn identity_value_shapes() {
        assert_eq!(identity_value(&["set-hostname", "h"], IdentityField::Hostname), Ok("h"));
        assert_eq!(
            identity_value(&["set-hostname"], IdentityField::Hostname),
            Err(CommandError::MissingArgument {
                field: IdentityField::Hostname
            })
        );
        assert_eq!(
            identity_value(&["set-hostname", "a", "b"], IdentityField::Hostname),
            Err(CommandError::ArgumentOverflow)
        );
    }
}
