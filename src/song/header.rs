//! Song metadata block

use serde::Serialize;

/// `#KEY:VALUE` lines written ahead of the notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongHeader {
    pub encoding: String,
    pub title: String,
    pub artist: String,
    pub edition: String,
    pub genre: String,
    pub language: String,
    pub mp3: String,
    pub cover: String,
    pub background: String,
    pub bpm: u32,
    /// Milliseconds of audio before the first beat
    pub gap: u32,
}

impl Default for SongHeader {
    fn default() -> Self {
        Self {
            encoding: "UTF8".to_string(),
            title: String::new(),
            artist: String::new(),
            edition: String::new(),
            genre: "Anime".to_string(),
            language: "Japanese".to_string(),
            mp3: ".mp3".to_string(),
            cover: "cover.jpg".to_string(),
            background: "background.jpg".to_string(),
            bpm: 150,
            gap: 1000,
        }
    }
}

impl SongHeader {
    /// Header fields in output order
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ENCODING", self.encoding.clone()),
            ("TITLE", self.title.clone()),
            ("ARTIST", self.artist.clone()),
            ("EDITION", self.edition.clone()),
            ("GENRE", self.genre.clone()),
            ("LANGUAGE", self.language.clone()),
            ("MP3", self.mp3.clone()),
            ("COVER", self.cover.clone()),
            ("BACKGROUND", self.background.clone()),
            ("BPM", self.bpm.to_string()),
            ("GAP", self.gap.to_string()),
        ]
    }

    /// Render the header, one line per field
    pub fn to_text(&self) -> String {
        self.fields()
            .into_iter()
            .map(|(key, value)| format!("#{}:{}\n", key, value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_header() {
        let text = SongHeader::default().to_text();
        assert_eq!(
            text,
            "#ENCODING:UTF8\n#TITLE:\n#ARTIST:\n#EDITION:\n#GENRE:Anime\n\
             #LANGUAGE:Japanese\n#MP3:.mp3\n#COVER:cover.jpg\n\
             #BACKGROUND:background.jpg\n#BPM:150\n#GAP:1000\n"
        );
    }

    #[test]
    fn test_overridden_fields() {
        let header = SongHeader {
            title: "Sakura".to_string(),
            bpm: 240,
            ..Default::default()
        };
        let text = header.to_text();
        assert!(text.contains("#TITLE:Sakura\n"));
        assert!(text.contains("#BPM:240\n"));
    }
}
