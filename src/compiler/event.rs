//! Records emitted by the compiler

use serde::Serialize;
use std::fmt;

/// A sung note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteEvent {
    /// Start time in beats
    pub start: u64,
    /// Length in beats
    pub duration: u64,
    /// Semitones relative to the reference C
    pub pitch: i32,
    /// Syllable text, trailing space included at word ends
    pub text: String,
}

impl NoteEvent {
    pub fn new(start: u64, duration: u64, pitch: i32, text: impl Into<String>) -> Self {
        Self {
            start,
            duration,
            pitch,
            text: text.into(),
        }
    }

    /// First beat after this note
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.duration)
    }
}

/// One output record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    Note(NoteEvent),
    /// End of a lyrics line, stamped with the time the line finished
    LineBreak { time: u64 },
    End,
}

impl Record {
    pub fn note(start: u64, duration: u64, pitch: i32, text: impl Into<String>) -> Self {
        Record::Note(NoteEvent::new(start, duration, pitch, text))
    }

    pub fn as_note(&self) -> Option<&NoteEvent> {
        match self {
            Record::Note(note) => Some(note),
            _ => None,
        }
    }
}

/// Record markers of the song notation
pub mod marker {
    pub const NOTE: char = ':';
    pub const LINE_BREAK: char = '-';
    pub const END: char = 'E';
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Note(note) => write!(
                f,
                "{} {} {} {} {}",
                marker::NOTE,
                note.start,
                note.duration,
                note.pitch,
                note.text
            ),
            Record::LineBreak { time } => write!(f, "{} {}", marker::LINE_BREAK, time),
            Record::End => write!(f, "{}", marker::END),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_line() {
        assert_eq!(Record::note(4, 8, 28, "there").to_string(), ": 4 8 28 there");
        assert_eq!(Record::note(0, 4, 24, "hi ").to_string(), ": 0 4 24 hi ");
    }

    #[test]
    fn test_marker_lines() {
        assert_eq!(Record::LineBreak { time: 12 }.to_string(), "- 12");
        assert_eq!(Record::End.to_string(), "E");
    }

    #[test]
    fn test_json_tagging() {
        let json = serde_json::to_value(Record::LineBreak { time: 3 }).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "line_break", "time": 3 }));

        let json = serde_json::to_value(Record::note(0, 2, -1, "la")).unwrap();
        assert_eq!(json["type"], "note");
        assert_eq!(json["pitch"], -1);
    }
}
