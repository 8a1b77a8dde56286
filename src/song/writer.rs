//! Song notation text writer

use super::header::SongHeader;
use crate::compiler::event::Record;
use crate::compiler::Track;
use crate::error::Result;
use std::io::Write;

/// Writes the header and records of a song
pub struct SongWriter<W: Write> {
    out: W,
}

impl<W: Write> SongWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_header(&mut self, header: &SongHeader) -> Result<()> {
        self.out.write_all(header.to_text().as_bytes())?;
        Ok(())
    }

    /// Write one record
    ///
    /// The end marker is the last thing in the file and gets no newline.
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        match record {
            Record::End => write!(self.out, "{}", record)?,
            _ => writeln!(self.out, "{}", record)?,
        }
        Ok(())
    }

    pub fn write_track(&mut self, track: &Track) -> Result<()> {
        for record in &track.records {
            self.write_record(record)?;
        }
        Ok(())
    }

    /// Flush and give back the underlying writer
    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_track() {
        let track = Track {
            records: vec![
                Record::note(0, 4, 24, "hi "),
                Record::LineBreak { time: 4 },
                Record::note(6, 2, 28, "yo"),
                Record::End,
            ],
            diagnostics: Vec::new(),
        };
        let mut writer = SongWriter::new(Vec::new());
        writer.write_track(&track).unwrap();
        let text = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(text, ": 0 4 24 hi \n- 4\n: 6 2 28 yo\nE");
    }

    #[test]
    fn test_header_then_records() {
        let mut writer = SongWriter::new(Vec::new());
        writer.write_header(&SongHeader::default()).unwrap();
        writer.write_record(&Record::End).unwrap();
        let text = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert!(text.starts_with("#ENCODING:UTF8\n"));
        assert!(text.ends_with("#GAP:1000\nE"));
    }
}
