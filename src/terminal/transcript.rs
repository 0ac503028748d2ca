//! Transcript records and the append-only store that holds them.
//!
//! A record is created once per accepted input line and never mutated
//! afterwards. Output text is plain; styling is carried separately as a list
//! of emphasized byte ranges so a renderer can pick its own medium.

use serde::{Deserialize, Serialize};

/// Classification of a transcript record for presentation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Info,
    Error,
}

/// Kind of emphasis a renderer may apply to a span of output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    /// A command keyword (help tables, hints).
    Command,
    /// A description paired with a command.
    Description,
    /// A room, item or other notable word in game text.
    Keyword,
}

/// Byte range `[start, end)` of a record's output carrying an emphasis hint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub emphasis: Emphasis,
}

impl Span {
    /// Text covered by this span, if the range is valid for `text`.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start..self.end)
    }
}

/// Output text under construction, with emphasis spans tracked alongside.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    text: String,
    spans: Vec<Span>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_str(&mut self, s: &str) -> &mut Self {
        self.text.push_str(s);
        self
    }

    pub fn push_emphasized(&mut self, s: &str, emphasis: Emphasis) -> &mut Self {
        let start = self.text.len();
        self.text.push_str(s);
        if !s.is_empty() {
            self.spans.push(Span {
                start,
                end: self.text.len(),
                emphasis,
            });
        }
        self
    }

    /// Append another styled fragment, shifting its spans to the new offset.
    pub fn append(&mut self, other: StyledText) -> &mut Self {
        let offset = self.text.len();
        self.text.push_str(&other.text);
        self.spans.extend(other.spans.into_iter().map(|span| Span {
            start: span.start + offset,
            end: span.end + offset,
            emphasis: span.emphasis,
        }));
        self
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_parts(self) -> (String, Vec<Span>) {
        (self.text, self.spans)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        Self {
            text,
            spans: Vec::new(),
        }
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        Self::from(text.to_string())
    }
}

/// One logged command/output/severity triple.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranscriptRecord {
    command: String,
    output: String,
    severity: Severity,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    spans: Vec<Span>,
}

impl TranscriptRecord {
    pub fn new(command: impl Into<String>, output: impl Into<StyledText>, severity: Severity) -> Self {
        let (output, spans) = output.into().into_parts();
        Self {
            command: command.into(),
            output,
            severity,
            spans,
        }
    }

    pub fn info(command: impl Into<String>, output: impl Into<StyledText>) -> Self {
        Self::new(command, output, Severity::Info)
    }

    pub fn error(command: impl Into<String>, output: impl Into<StyledText>) -> Self {
        Self::new(command, output, Severity::Error)
    }

    /// Raw input line the record was produced for.
    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Emphasis hints over `output()`.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }
}

/// Ordered, append-only log of transcript records.
///
/// Records are never edited or removed individually; `clear` is the only way
/// entries leave the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptStore {
    records: Vec<TranscriptRecord>,
}

impl TranscriptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing records, kept in the given order.
    pub fn from_records(records: Vec<TranscriptRecord>) -> Self {
        Self { records }
    }

    pub fn append(&mut self, record: TranscriptRecord) {
        self.records.push(record);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Restartable view over every record, oldest first.
    pub fn records(&self) -> std::slice::Iter<'_, TranscriptRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[TranscriptRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&TranscriptRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a TranscriptStore {
    type Item = &'a TranscriptRecord;
    type IntoIter = std::slice::Iter<'a, TranscriptRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styled_text_tracks_span_offsets() {
        let mut head = StyledText::new();
        head.push_str("go ").push_emphasized("north", Emphasis::Keyword);

        let mut tail = StyledText::new();
        tail.push_str(" then ").push_emphasized("look", Emphasis::Command);
        head.append(tail);

        assert_eq!(head.as_str(), "go north then look");
        let words: Vec<&str> = head
            .spans()
            .iter()
            .filter_map(|s| s.slice(head.as_str()))
            .collect();
        assert_eq!(words, vec!["north", "look"]);
    }

    #[test]
    fn empty_emphasis_adds_no_span() {
        let mut text = StyledText::new();
        text.push_emphasized("", Emphasis::Command);
        assert!(text.spans().is_empty());
    }

    #[test]
    fn store_is_append_only_until_cleared() {
        let mut store = TranscriptStore::new();
        store.append(TranscriptRecord::info("look", "A clearing."));
        store.append(TranscriptRecord::error("go up", "You can't go that way"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.records().count(), 2);
        // view is restartable
        assert_eq!(store.records().next().map(|r| r.command()), Some("look"));
        assert!(store.last().is_some_and(TranscriptRecord::is_error));

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn record_serializes_without_empty_spans() {
        let record = TranscriptRecord::info("inventory", "Your inventory is empty.");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"severity\":\"info\""));
        assert!(!json.contains("spans"));
        let back: TranscriptRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
