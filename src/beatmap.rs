//! `.osu` descriptor parsing.
//!
//! Descriptors are line oriented `Key:value` text. Only the three fields
//! needed to name an exported file are read.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::SongError;

const AUDIO_FILENAME: &str = "AudioFilename:";
const TITLE: &str = "Title:";
const ARTIST: &str = "Artist:";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongMetadata {
    pub audio_filename: String,
    pub title: String,
    pub artist: String,
}

impl SongMetadata {
    pub fn is_complete(&self) -> bool {
        !self.audio_filename.is_empty() && !self.title.is_empty() && !self.artist.is_empty()
    }

    /// Names of the fields still empty, in descriptor key spelling.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.audio_filename.is_empty() {
            missing.push("AudioFilename");
        }
        if self.title.is_empty() {
            missing.push("Title");
        }
        if self.artist.is_empty() {
            missing.push("Artist");
        }
        missing
    }

    fn absorb(&mut self, line: &str) {
        let slot = if line.starts_with(AUDIO_FILENAME) {
            &mut self.audio_filename
        } else if line.starts_with(TITLE) {
            &mut self.title
        } else if line.starts_with(ARTIST) {
            &mut self.artist
        } else {
            return;
        };

        if slot.is_empty()
            && let Some(value) = field_value(line)
        {
            *slot = value.to_string();
        }
    }
}

/// Value of a `Key:value` line: everything after the first colon, trimmed.
///
/// The key must be one or more ASCII letters.
fn field_value(line: &str) -> Option<&str> {
    let (key, value) = line.split_once(':')?;
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    Some(value.trim())
}

/// Scan descriptor lines until all three fields are set or input ends.
///
/// Lines are decoded lossily so stray non-UTF-8 bytes never abort a scan.
pub fn parse_metadata<R: BufRead>(mut reader: R) -> io::Result<SongMetadata> {
    let mut meta = SongMetadata::default();
    let mut buf = Vec::new();

    while !meta.is_complete() {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        meta.absorb(line);
    }

    Ok(meta)
}

/// Open and parse the descriptor at `path`, requiring all three fields.
pub fn read_metadata(path: &Path) -> Result<SongMetadata, SongError> {
    let file = File::open(path).map_err(|source| SongError::DescriptorOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let meta = parse_metadata(BufReader::new(file)).map_err(|source| SongError::DescriptorRead {
        path: path.to_path_buf(),
        source,
    })?;

    if !meta.is_complete() {
        return Err(SongError::IncompleteMetadata {
            path: path.to_path_buf(),
            missing: meta.missing(),
        });
    }

    Ok(meta)
}
