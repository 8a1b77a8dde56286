//! Lyric syllable tokenizer
//!
//! Lyrics are written as words separated by spaces, with hyphens marking
//! syllable boundaries inside a word:
//!
//! - `ka-ra-o-ke` yields `ka`, `ra`, `o`, `ke ` (the last syllable of a word
//!   keeps its trailing space)
//! - a free-standing `-` is a held syllable and yields [`HELD_SYLLABLE`]
//! - `\` escapes the next character, so `\-` and `\ ` are literal text

use std::iter::Peekable;
use std::str::Chars;

/// Syllable emitted for a free-standing hyphen
pub const HELD_SYLLABLE: &str = "~";

/// Cursor over the syllables of one lyrics line
#[derive(Debug, Clone)]
pub struct Syllables<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Syllables<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            chars: line.chars().peekable(),
        }
    }

    /// Take the next syllable from the line
    ///
    /// Returns an empty string once the line is exhausted, and keeps doing so
    /// on every later call.
    pub fn next_syllable(&mut self) -> String {
        let mut syllable = String::new();

        let first = loop {
            match self.chars.next() {
                None => return syllable,
                Some(c) if c.is_ascii_whitespace() => continue,
                Some(c) => break c,
            }
        };

        let mut c = first;
        if first == '-' {
            match self.chars.peek() {
                None => return HELD_SYLLABLE.to_string(),
                Some(&next) if next.is_ascii_whitespace() => {
                    self.chars.next();
                    return HELD_SYLLABLE.to_string();
                }
                // Leave the second hyphen for the next call
                Some('-') => return HELD_SYLLABLE.to_string(),
                Some(_) => {
                    // Hyphen glued to text only separates; the text starts here
                    if let Some(next) = self.chars.next() {
                        c = next;
                    }
                }
            }
        }

        loop {
            match c {
                ' ' => {
                    syllable.push(' ');
                    return syllable;
                }
                '\\' => match self.chars.next() {
                    Some(escaped) => syllable.push(escaped),
                    None => return syllable,
                },
                other => syllable.push(other),
            }

            match self.chars.peek() {
                None | Some('-') => return syllable,
                Some(_) => {}
            }
            match self.chars.next() {
                Some(next) => c = next,
                None => return syllable,
            }
        }
    }

    /// Check whether any characters remain unread
    pub fn is_exhausted(&mut self) -> bool {
        self.chars.peek().is_none()
    }
}

impl Iterator for Syllables<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let syllable = self.next_syllable();
        if syllable.is_empty() {
            None
        } else {
            Some(syllable)
        }
    }
}
