use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::SongError;

/// Beatmap descriptor extension, matched case-sensitively.
pub const DESCRIPTOR_EXTENSION: &str = "osu";

fn is_descriptor(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(DESCRIPTOR_EXTENSION))
}

/// Return the first `.osu` file under `dir` in depth-first pre-order.
///
/// Siblings are visited in file name order. Which difficulty wins when a
/// folder holds several descriptors carries no meaning; they share metadata.
pub fn find_descriptor(dir: &Path, follow_links: bool) -> Result<PathBuf, SongError> {
    let walker = WalkDir::new(dir)
        .follow_links(follow_links)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|source| SongError::DescriptorWalk {
            dir: dir.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_dir() && is_descriptor(entry.path()) {
            return Ok(entry.into_path());
        }
    }

    Err(SongError::DescriptorNotFound {
        dir: dir.to_path_buf(),
    })
}
