//! Line-oriented input sources

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

/// One of the three parallel inputs
///
/// A source is either absent (never specified) or a finite sequence of lines.
/// Once it runs dry it stays dry.
pub struct LineSource<'a> {
    reader: Option<Box<dyn BufRead + 'a>>,
    specified: bool,
    at_start: bool,
}

impl<'a> LineSource<'a> {
    /// A source that was not specified and never yields a line
    pub fn absent() -> Self {
        Self {
            reader: None,
            specified: false,
            at_start: false,
        }
    }

    pub fn from_reader<R: BufRead + 'a>(reader: R) -> Self {
        Self {
            reader: Some(Box::new(reader)),
            specified: true,
            at_start: true,
        }
    }

    pub fn from_text(text: &'a str) -> Self {
        Self::from_reader(Cursor::new(text.as_bytes()))
    }

    /// Open a file, naming its role in the error if it can't be read
    pub fn open(role: &'static str, path: &Path) -> Result<LineSource<'static>> {
        let file = File::open(path).map_err(|source| Error::OpenSource {
            role,
            path: path.to_path_buf(),
            source,
        })?;
        Ok(LineSource::from_reader(BufReader::new(file)))
    }

    /// Open a file if a path was given, otherwise an absent source
    pub fn open_optional(role: &'static str, path: Option<&Path>) -> Result<LineSource<'static>> {
        match path {
            Some(path) => Self::open(role, path),
            None => Ok(LineSource::absent()),
        }
    }

    /// Whether this source was supplied at all
    pub fn is_specified(&self) -> bool {
        self.specified
    }

    /// Read the next line without its terminator
    ///
    /// Returns `None` at end of input and on every call after that.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(None);
        };

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            self.reader = None;
            return Ok(None);
        }

        if self.at_start {
            self.at_start = false;
            if let Some(stripped) = line.strip_prefix('\u{FEFF}') {
                line = stripped.to_string();
            }
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_source() {
        let mut source = LineSource::absent();
        assert!(!source.is_specified());
        assert_eq!(source.next_line().unwrap(), None);
    }

    #[test]
    fn test_lines_and_fused_end() {
        let mut source = LineSource::from_text("one\r\ntwo\n\nthree");
        assert_eq!(source.next_line().unwrap().as_deref(), Some("one"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("two"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some(""));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("three"));
        assert_eq!(source.next_line().unwrap(), None);
        assert_eq!(source.next_line().unwrap(), None);
        assert!(source.is_specified());
    }

    #[test]
    fn test_bom_stripped_from_first_line_only() {
        let mut source = LineSource::from_text("\u{FEFF}la\n\u{FEFF}li\n");
        assert_eq!(source.next_line().unwrap().as_deref(), Some("la"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("\u{FEFF}li"));
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let bytes: &[u8] = &[0x61, 0xFF, 0x0A];
        let mut source = LineSource::from_reader(bytes);
        assert!(matches!(source.next_line(), Err(Error::Io(_))));
    }

    #[test]
    fn test_open_missing_file() {
        let err = LineSource::open("lyrics", Path::new("/nonexistent/lyrics.txt"))
            .err()
            .expect("open should fail");
        assert!(matches!(err, Error::OpenSource { role: "lyrics", .. }));
        assert!(err.to_string().starts_with("Error opening lyrics file"));
    }
}
