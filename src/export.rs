use std::fs;
use std::path::{Path, PathBuf};

use crate::beatmap::SongMetadata;
use crate::error::SongError;

const UNSAFE_CHARS: [char; 10] = ['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>'];

/// Replace every filesystem-unsafe character in `name` with `_`.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| if UNSAFE_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// Build the exported file name `Artist - Title<ext>`, sanitized.
///
/// `ext` includes its leading dot, or is empty when the audio has no extension.
pub fn output_file_name(artist: &str, title: &str, ext: &str) -> String {
    sanitize_file_name(&format!("{artist} - {title}{ext}"))
}

/// Extension of `path` with a leading dot, or an empty string.
///
/// A dot-file such as `.mp3` has no extension here, so it exports as `Artist - Title`.
fn dotted_extension(path: &Path) -> String {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default()
}

/// Copy the audio referenced by `meta` into `out_dir`.
///
/// The audio path is resolved against the descriptor's directory. An existing
/// file with the same output name is overwritten. Returns the written path.
pub fn export_song(
    descriptor: &Path,
    meta: &SongMetadata,
    out_dir: &Path,
) -> Result<PathBuf, SongError> {
    let audio_path = descriptor
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(&meta.audio_filename);

    let bytes = fs::read(&audio_path).map_err(|source| SongError::AudioFileUnreadable {
        path: audio_path.clone(),
        source,
    })?;

    let name = output_file_name(&meta.artist, &meta.title, &dotted_extension(&audio_path));
    let target = out_dir.join(name);

    fs::write(&target, bytes).map_err(|source| SongError::AudioFileWrite {
        path: target.clone(),
        source,
    })?;

    Ok(target)
}
