use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::FatalError;

/// An immediate subdirectory of the songs root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongDir {
    pub name: String,
    pub path: PathBuf,
}

/// Result of listing the songs root.
#[derive(Debug, Default)]
pub struct Listing {
    /// Directories, sorted by name.
    pub songs: Vec<SongDir>,
    /// Plain files and other non-directory entries that were skipped.
    pub ignored: usize,
}

/// List the immediate children of `root`, keeping directories only.
///
/// Any listing failure is fatal for the run.
pub fn list_song_dirs(root: &Path, follow_links: bool) -> Result<Listing, FatalError> {
    let mut listing = Listing::default();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(follow_links)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| FatalError::RootUnreadable {
            path: root.to_path_buf(),
            source: e.into(),
        })?;

        if entry.file_type().is_dir() {
            listing.songs.push(SongDir {
                name: entry.file_name().to_string_lossy().into_owned(),
                path: entry.into_path(),
            });
        } else {
            listing.ignored += 1;
        }
    }

    Ok(listing)
}
