/// Seeded history, snapshots and the initial command field.
use termquest::game::Adventure;
use termquest::terminal::{CommandInterpreter, SessionSnapshot, Severity, TranscriptRecord};

fn seed() -> Vec<TranscriptRecord> {
    vec![
        TranscriptRecord::info("look", "Clearing"),
        TranscriptRecord::error("go west", "You can't go that way"),
        TranscriptRecord::info("inventory", "Your inventory is empty."),
    ]
}

#[test]
fn test_seeded_history_is_kept_in_order() {
    let session = CommandInterpreter::builder(Adventure::new(), "player", "termquest")
        .history(seed())
        .build();

    let records: Vec<TranscriptRecord> = session.history().cloned().collect();
    assert_eq!(records, seed());
    // The view is restartable
    assert_eq!(session.history().count(), 3);
    assert_eq!(session.history().count(), 3);
    assert_eq!(session.command(), "");
}

#[test]
fn test_new_records_append_after_seed() {
    let mut session = CommandInterpreter::builder(Adventure::new(), "player", "termquest")
        .history(seed())
        .command("inventory")
        .build();
    assert_eq!(session.command(), "inventory");

    session.handle_command("look nothing");
    assert_eq!(session.transcript().len(), 4);
    assert_eq!(&session.transcript().as_slice()[..3], seed().as_slice());
    assert_eq!(
        session.transcript().last().map(|r| r.severity()),
        Some(Severity::Error)
    );
}

#[test]
fn test_snapshot_serializes_round_trip() {
    let mut session = CommandInterpreter::builder(Adventure::new(), "ada", "engine").build();
    session.handle_command("pickup sword");
    session.handle_command("bogus");

    let snapshot = session.snapshot();
    assert_eq!(snapshot.username, "ada");
    assert_eq!(snapshot.hostname, "engine");
    assert_eq!(snapshot.command, "bogus");
    assert_eq!(snapshot.history.len(), 2);

    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"severity\":\"error\""));
    let restored: SessionSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, snapshot);
}
