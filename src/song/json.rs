//! JSON rendering of a converted song

use super::header::SongHeader;
use crate::compiler::diagnostic::Diagnostic;
use crate::compiler::event::Record;
use crate::compiler::Track;
use serde::Serialize;

/// Top-level JSON structure for a song
#[derive(Debug, Clone, Serialize)]
pub struct SongJson {
    /// Metadata block (absent when the header is suppressed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<SongHeader>,
    pub records: Vec<Record>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl SongJson {
    pub fn new(header: Option<&SongHeader>, track: &Track) -> Self {
        Self {
            header: header.cloned(),
            records: track.records.clone(),
            diagnostics: track.diagnostics.clone(),
        }
    }

    pub fn render(&self, compact: bool) -> serde_json::Result<String> {
        if compact {
            serde_json::to_string(self)
        } else {
            serde_json::to_string_pretty(self)
        }
    }
}
