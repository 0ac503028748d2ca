/// Help page content for `help` and `user --help`.
mod common;

use termquest::game::{Adventure, Verb};
use termquest::terminal::{
    CommandInterpreter, ControlCommand, Emphasis, HelpEntry, Severity,
};

#[test]
fn test_help_lists_every_control_command_and_verb() {
    let mut session = common::session();
    session.handle_command("help");
    assert_eq!(session.transcript().len(), 1);

    let record = common::last(&session);
    assert_eq!(record.severity(), Severity::Info);
    for cmd in ControlCommand::ALL {
        assert!(
            record.output().contains(cmd.keyword()),
            "help should mention {}",
            cmd.keyword()
        );
    }
    for verb in Verb::ALL {
        let line = format!("{} - {}", verb.key(), verb.description());
        assert!(record.output().contains(&line), "missing '{}'", line);
    }
    assert_eq!(session.command(), "help");
}

#[test]
fn test_help_uses_supplied_entries() {
    let adventure = Adventure::new();
    let mut session = CommandInterpreter::builder(adventure, "player", "termquest")
        .help_entries(vec![HelpEntry::new("dance", "Dance a little jig")])
        .show_banner(false)
        .build();
    session.handle_command("help");

    let output = common::last(&session).output();
    assert!(output.starts_with("\nAvailable commands"));
    assert!(output.ends_with("dance - Dance a little jig"));
    assert!(!output.contains("pickup - Pickup the item"));
}

#[test]
fn test_help_with_arguments_is_not_help() {
    let mut session = common::session();
    session.handle_command("help me");
    assert!(common::last(&session).is_error());
}

#[test]
fn test_user_help_is_scoped_to_player_verbs() {
    let mut session = common::session();
    session.handle_command("user --help");
    let record = common::last(&session);
    assert_eq!(record.severity(), Severity::Info);
    assert!(record.output().starts_with("Player commands\n\n"));
    assert!(record.output().contains("inventory - Show the inventory"));
    assert!(!record.output().contains("set-username"));

    let commands: Vec<&str> = record
        .spans()
        .iter()
        .filter(|span| span.emphasis == Emphasis::Command)
        .filter_map(|span| span.slice(record.output()))
        .collect();
    let keys: Vec<&str> = Verb::ALL.iter().map(|verb| verb.key()).collect();
    assert_eq!(commands, keys);
}
