//! Log-safe rendering of raw input lines.
//!
//! Player input is arbitrary text. Before it reaches a log line it is
//! escaped so a single command always stays on a single log line.

use std::fmt::Write;

/// Characters of input kept in a log preview.
pub const MAX_LOG_PREVIEW: usize = 160;

/// Escape backslashes and control characters, truncating with `…` after
/// [`MAX_LOG_PREVIEW`] characters.
pub fn escape_log(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(MAX_LOG_PREVIEW) + 8);
    for (count, ch) in s.chars().enumerate() {
        if count >= MAX_LOG_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{1b}' => out.push_str("\\e"),
            c if c.is_control() => {
                let _ = write!(&mut out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_commands_pass_through() {
        assert_eq!(escape_log("pickup sword"), "pickup sword");
    }

    #[test]
    fn terminal_escapes_stay_visible() {
        assert_eq!(escape_log("go\u{1b}[2Jnorth\n"), "go\\e[2Jnorth\\n");
        assert_eq!(escape_log("a\\b\u{0}"), "a\\\\b\\x00");
    }

    #[test]
    fn long_input_is_truncated() {
        let long = "x".repeat(MAX_LOG_PREVIEW + 10);
        let escaped = escape_log(&long);
        assert!(escaped.ends_with('…'));
        assert_eq!(escaped.chars().count(), MAX_LOG_PREVIEW + 1);
    }
}
