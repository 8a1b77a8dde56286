//! Timeline compiler - walks lyrics, pitches and times in lockstep
//!
//! Each input line triple becomes one line of the song. Within a line, every
//! slot pulls one syllable, one note name and one time token, and emits a
//! note at the current time cursor. Time tokens are beat counts; a token of
//! the form `r<n>` is a rest that advances the cursor by `n` and is followed
//! by the note's own length in the same slot.

pub mod diagnostic;
pub mod event;
pub mod note;
pub mod source;
pub mod syllable;

use crate::error::Result;
use diagnostic::{Diagnostic, Missing};
use event::{NoteEvent, Record};
use source::LineSource;
use std::str::SplitWhitespace;
use syllable::Syllables;

/// Note length used when a slot has no usable time token
pub const DEFAULT_DURATION: u64 = 2;

/// Prefix marking a rest in the times input
pub const REST_PREFIX: char = 'r';

/// The three parallel inputs of a conversion
pub struct Sources<'a> {
    pub lyrics: LineSource<'a>,
    pub pitches: LineSource<'a>,
    pub times: LineSource<'a>,
}

impl<'a> Sources<'a> {
    pub fn new(lyrics: LineSource<'a>, pitches: LineSource<'a>, times: LineSource<'a>) -> Self {
        Self {
            lyrics,
            pitches,
            times,
        }
    }

    /// In-memory sources, all marked as specified
    pub fn from_text(lyrics: &'a str, pitches: &'a str, times: &'a str) -> Self {
        Self::new(
            LineSource::from_text(lyrics),
            LineSource::from_text(pitches),
            LineSource::from_text(times),
        )
    }

    pub fn specified(&self) -> Specified {
        Specified {
            lyrics: self.lyrics.is_specified(),
            pitches: self.pitches.is_specified(),
            times: self.times.is_specified(),
        }
    }
}

/// Which inputs were supplied; only these are checked for gaps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Specified {
    pub lyrics: bool,
    pub pitches: bool,
    pub times: bool,
}

impl Specified {
    pub fn all() -> Self {
        Self {
            lyrics: true,
            pitches: true,
            times: true,
        }
    }
}

/// Output of one conversion run
#[derive(Debug, Clone, Default)]
pub struct Track {
    /// Records in emission order, ending with [`Record::End`]
    pub records: Vec<Record>,
    /// Slots where a specified input ran short
    pub diagnostics: Vec<Diagnostic>,
}

impl Track {
    pub fn notes(&self) -> impl Iterator<Item = &NoteEvent> {
        self.records.iter().filter_map(Record::as_note)
    }
}

/// Main compiler state
#[derive(Debug, Default)]
pub struct Compiler {
    /// Time cursor in beats
    time: u64,
    /// Time cursor at the end of the previous line
    prev_time: u64,
    /// A line has finished and its break marker is not written yet
    pending_line_break: bool,
    /// Inputs checked for gaps
    specified: Specified,
    /// Lines processed so far
    line_count: usize,
    records: Vec<Record>,
    diagnostics: Vec<Diagnostic>,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiler for driving line by line with [`Compiler::compile_line`]
    pub fn with_specified(specified: Specified) -> Self {
        Self {
            specified,
            ..Self::default()
        }
    }

    /// Current time cursor
    pub fn time(&self) -> u64 {
        self.time
    }

    /// Convert all three sources to a track
    ///
    /// Runs until every source is exhausted. A blank line still counts as a
    /// line: it gets its line break and no notes.
    pub fn compile(&mut self, mut sources: Sources<'_>) -> Result<Track> {
        *self = Self::with_specified(sources.specified());

        loop {
            let lyrics = sources.lyrics.next_line()?;
            let pitches = sources.pitches.next_line()?;
            let times = sources.times.next_line()?;

            if lyrics.is_none() && pitches.is_none() && times.is_none() {
                break;
            }

            self.compile_line(
                lyrics.as_deref().unwrap_or(""),
                pitches.as_deref().unwrap_or(""),
                times.as_deref().unwrap_or(""),
            );
        }

        Ok(self.finish())
    }

    /// Compile one line triple
    pub fn compile_line(&mut self, lyrics: &str, pitches: &str, times: &str) {
        if self.pending_line_break {
            self.records.push(Record::LineBreak {
                time: self.prev_time,
            });
            self.pending_line_break = false;
        }

        let mut syllables = Syllables::new(lyrics);
        let mut pitch_tokens = pitches.split_whitespace();
        let mut time_tokens = times.split_whitespace();
        let mut notes = 0usize;

        while self.compile_slot(&mut syllables, &mut pitch_tokens, &mut time_tokens) {
            notes += 1;
        }

        self.line_count += 1;
        tracing::debug!(line = self.line_count, notes, time = self.time, "line compiled");

        self.prev_time = self.time;
        self.pending_line_break = true;
    }

    /// Emit the end marker and hand over everything compiled so far
    pub fn finish(&mut self) -> Track {
        self.records.push(Record::End);
        tracing::info!(
            lines = self.line_count,
            diagnostics = self.diagnostics.len(),
            end_time = self.time,
            "conversion finished"
        );
        Track {
            records: std::mem::take(&mut self.records),
            diagnostics: std::mem::take(&mut self.diagnostics),
        }
    }

    /// Compile one note slot, returning false once the line is used up
    fn compile_slot(
        &mut self,
        syllables: &mut Syllables<'_>,
        pitch_tokens: &mut SplitWhitespace<'_>,
        time_tokens: &mut SplitWhitespace<'_>,
    ) -> bool {
        let syllable = syllables.next_syllable();
        let pitch = pitch_tokens.next();

        let mut time_token = time_tokens.next();
        if let Some(rest) = time_token.and_then(|t| t.strip_prefix(REST_PREFIX)) {
            self.time = self.time.saturating_add(leading_number(rest).unwrap_or(0));
            time_token = time_tokens.next();
        }
        let duration = time_token
            .and_then(leading_number)
            .unwrap_or(DEFAULT_DURATION);

        if syllable.is_empty() && pitch.is_none() && time_token.is_none() {
            return false;
        }

        let missing = Missing {
            syllable: self.specified.lyrics && syllable.is_empty(),
            pitch: self.specified.pitches && pitch.is_none(),
            duration: self.specified.times && time_token.is_none(),
        };
        if missing.any() {
            let diagnostic = Diagnostic {
                time: self.time,
                missing,
            };
            tracing::debug!(%diagnostic, "inputs out of step");
            self.diagnostics.push(diagnostic);
        }

        let pitch = note::note_to_pitch(pitch.unwrap_or(""));
        self.records
            .push(Record::note(self.time, duration, pitch, syllable));

        let advance = if time_token.is_some() {
            duration
        } else {
            DEFAULT_DURATION
        };
        self.time = self.time.saturating_add(advance);

        true
    }
}

/// Parse the leading decimal digits of a token
///
/// `"8"` and `"8x"` give 8; a token that doesn't start with a digit gives
/// `None`.
fn leading_number(token: &str) -> Option<u64> {
    let end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    token[..end].parse().ok()
}
