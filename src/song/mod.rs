//! Karaoke song notation output

pub mod header;
pub mod json;
pub mod writer;

pub use header::SongHeader;
pub use json::SongJson;
pub use writer::SongWriter;
