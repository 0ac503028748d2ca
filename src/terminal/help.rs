//! Help tables shared by the interpreter's `help` command and the player's
//! `user --help` verb.

use serde::{Deserialize, Serialize};

use super::transcript::{Emphasis, StyledText};

/// Banner printed at the top of the full `help` output.
pub const HELP_BANNER: &str = r"
  _____                    ___                  _
 |_   _|__ _ __ _ __ ___  / _ \ _   _  ___  ___| |_
   | |/ _ \ '__| '_ ` _ \| | | | | | |/ _ \/ __| __|
   | |  __/ |  | | | | | | |_| | |_| |  __/\__ \ |_
   |_|\___|_|  |_| |_| |_|\__\_\\__,_|\___||___/\__|
";

const ENTRY_SEPARATOR: &str = "\n\n";

/// One command/description pair in a help table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpEntry {
    pub command: String,
    pub description: String,
}

impl HelpEntry {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
        }
    }
}

/// Render each entry as `<command> - <description>`, entries separated by a
/// blank line. Commands and descriptions carry emphasis spans.
pub fn format_help_table(entries: &[HelpEntry]) -> StyledText {
    let mut out = StyledText::new();
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            out.push_str(ENTRY_SEPARATOR);
        }
        out.push_emphasized(&entry.command, Emphasis::Command)
            .push_str(" - ")
            .push_emphasized(&entry.description, Emphasis::Description);
    }
    out
}

/// Full help page: banner, built-in table, then the delegate's table.
pub fn render_full_help(
    builtin: &[HelpEntry],
    delegate: &[HelpEntry],
    show_banner: bool,
) -> StyledText {
    let mut out = StyledText::new();
    if show_banner {
        out.push_str(HELP_BANNER).push_str("\n\n");
    }
    out.push_str("\nAvailable commands\n\n");
    out.append(format_help_table(builtin));
    out.push_str(ENTRY_SEPARATOR);
    out.append(format_help_table(delegate));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_joins_entries_with_blank_lines() {
        let table = format_help_table(&[
            HelpEntry::new("look", "Look at the item"),
            HelpEntry::new("go", "Go to the direction"),
        ]);
        assert_eq!(
            table.as_str(),
            "look - Look at the item\n\ngo - Go to the direction"
        );
        assert_eq!(table.spans().len(), 4);
        assert_eq!(table.spans()[2].slice(table.as_str()), Some("go"));
    }

    #[test]
    fn empty_table_renders_nothing() {
        assert!(format_help_table(&[]).is_empty());
    }

    #[test]
    fn full_help_can_skip_banner() {
        let page = render_full_help(&[HelpEntry::new("help", "Show help")], &[], false);
        assert!(page.as_str().starts_with("\nAvailable commands"));
        assert!(!page.as_str().contains("|_|"));
    }
}
