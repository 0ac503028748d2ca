/// Delegate verb dispatch under both matching policies.
mod common;

use termquest::game::{Adventure, DispatchMode};
use termquest::terminal::{CommandInterpreter, Severity};

#[test]
fn test_pickup_moves_item_and_is_idempotent() {
    let mut session = common::session();
    session.handle_command("pickup sword");
    assert_eq!(common::last(&session).severity(), Severity::Info);
    assert_eq!(session.delegate().player().inventory, vec!["sword"]);
    assert!(!session
        .delegate()
        .world()
        .room("clearing")
        .unwrap()
        .has_item("sword"));

    session.handle_command("pickup sword");
    let record = common::last(&session);
    assert!(record.is_error());
    assert_eq!(record.output(), "There is no sword here");
    assert_eq!(session.delegate().player().inventory, vec!["sword"]);
}

#[test]
fn test_verbs_without_arguments_prompt_for_target() {
    let mut session = common::session();
    for (line, expected) in [
        ("go", "Go where?"),
        ("pickup", "Pickup what?"),
        ("drop", "Drop what?"),
        ("use", "Use what?"),
    ] {
        session.handle_command(line);
        let record = common::last(&session);
        assert!(record.is_error(), "{} should fail", line);
        assert_eq!(record.output(), expected);
    }
}

#[test]
fn test_drop_requires_carrying() {
    let mut session = common::session();
    session.handle_command("drop sword");
    assert_eq!(common::last(&session).output(), "You don't have that item");
}

#[test]
fn test_look_unknown_target() {
    let mut session = common::session();
    session.handle_command("look unicorn");
    let record = common::last(&session);
    assert!(record.is_error());
    assert_eq!(record.output(), "Nothing found");
}

#[test]
fn test_look_describes_room_and_items() {
    let mut session = common::session();
    session.handle_command("look");
    let output = common::last(&session).output().to_string();
    assert!(output.starts_with("Clearing\n"));
    assert!(output.contains("Exits: north, east"));
    assert!(output.contains("You see: sword, signpost"));

    session.handle_command("look signpost");
    assert!(common::last(&session).output().starts_with("The signpost reads"));
}

#[test]
fn test_go_invalid_direction() {
    let mut session = common::session();
    session.handle_command("go west");
    assert_eq!(common::last(&session).output(), "You can't go that way");
    session.handle_command("go sideways");
    assert_eq!(common::last(&session).output(), "You can't go that way");
    assert_eq!(session.delegate().player().location, "clearing");
}

#[test]
fn test_inventory_lists_or_reports_empty() {
    let mut session = common::session();
    session.handle_command("inventory");
    assert_eq!(common::last(&session).output(), "Your inventory is empty.");
    session.handle_command("pickup sword");
    session.handle_command("inventory");
    assert_eq!(common::last(&session).output(), "You are carrying:\n  sword");
}

#[test]
fn test_clear_verb_is_shadowed_by_control_command() {
    let mut session = common::session();
    session.handle_command("look");
    session.handle_command("clear");
    assert!(session.transcript().is_empty());
}

#[test]
fn test_exact_line_mode_only_matches_whole_keys() {
    let adventure = Adventure::new().with_dispatch_mode(DispatchMode::ExactLine);
    let mut session = CommandInterpreter::builder(adventure, "player", "termquest").build();

    session.handle_command("pickup sword");
    let record = common::last(&session);
    assert!(record.is_error());
    assert!(record.output().starts_with("Unknown command: pickup sword."));
    assert!(session.delegate().player().inventory.is_empty());

    session.handle_command("inventory");
    assert_eq!(common::last(&session).severity(), Severity::Info);
    session.handle_command("user --help");
    assert!(common::last(&session).output().starts_with("Player commands"));
}

#[test]
fn test_leading_token_needs_exact_verb() {
    let mut session = common::session();
    session.handle_command("pickups sword");
    assert!(common::last(&session)
        .output()
        .starts_with("Unknown command: pickups sword."));
    session.handle_command("user");
    assert!(common::last(&session).output().starts_with("Unknown command: user."));
}
