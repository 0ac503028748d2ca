//! The closed player verb vocabulary and the policies that map an input line
//! onto it.

use serde::{Deserialize, Serialize};

use crate::terminal::HelpEntry;

/// Every verb the player vocabulary knows. The set is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verb {
    Look,
    Go,
    Pickup,
    Drop,
    Use,
    Inventory,
    Clear,
    UserHelp,
}

impl Verb {
    pub const ALL: [Verb; 8] = [
        Verb::Look,
        Verb::Inventory,
        Verb::Go,
        Verb::Pickup,
        Verb::Drop,
        Verb::Use,
        Verb::Clear,
        Verb::UserHelp,
    ];

    /// Dispatch key. `user --help` is the only multi-word key.
    pub fn key(self) -> &'static str {
        match self {
            Verb::Look => "look",
            Verb::Go => "go",
            Verb::Pickup => "pickup",
            Verb::Drop => "drop",
            Verb::Use => "use",
            Verb::Inventory => "inventory",
            Verb::Clear => "clear",
            Verb::UserHelp => "user --help",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Verb::Look => "Look at the item",
            Verb::Go => "Go to the direction",
            Verb::Pickup => "Pickup the item",
            Verb::Drop => "Drop the item",
            Verb::Use => "Use the item",
            Verb::Inventory => "Show the inventory",
            Verb::Clear => "Clear the terminal",
            Verb::UserHelp => "Show the User Help",
        }
    }

    /// Reply when the verb needs an argument and got none.
    pub fn missing_target_prompt(self) -> &'static str {
        match self {
            Verb::Go => "Go where?",
            Verb::Pickup => "Pickup what?",
            Verb::Drop => "Drop what?",
            Verb::Use => "Use what?",
            Verb::Look => "Look at what?",
            Verb::Inventory | Verb::Clear | Verb::UserHelp => "Invalid command",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|verb| verb.key() == key)
    }

    pub fn help_entries() -> Vec<HelpEntry> {
        Self::ALL
            .iter()
            .map(|verb| HelpEntry::new(verb.key(), verb.description()))
            .collect()
    }
}

/// Strategy for resolving an input line to a verb.
pub trait VerbMatcher: Send + Sync {
    fn match_verb(&self, line: &str, tokens: &[String]) -> Option<Verb>;
}

/// The whole line must equal a verb key, so verbs taking arguments only match
/// when the exact line is a key.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactLineMatcher;

impl VerbMatcher for ExactLineMatcher {
    fn match_verb(&self, line: &str, _tokens: &[String]) -> Option<Verb> {
        Verb::from_key(line)
    }
}

/// Whole-line key first (covers `user --help`), then the leading token.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadingTokenMatcher;

impl VerbMatcher for LeadingTokenMatcher {
    fn match_verb(&self, line: &str, tokens: &[String]) -> Option<Verb> {
        Verb::from_key(line).or_else(|| tokens.first().and_then(|first| Verb::from_key(first)))
    }
}

/// Configurable choice of [`VerbMatcher`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DispatchMode {
    ExactLine,
    #[default]
    LeadingToken,
}

impl DispatchMode {
    pub fn matcher(self) -> Box<dyn VerbMatcher> {
        match self {
            DispatchMode::ExactLine => Box::new(ExactLineMatcher),
            DispatchMode::LeadingToken => Box::new(LeadingTokenMatcher),
        }
    }
}
