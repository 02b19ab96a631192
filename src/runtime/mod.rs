use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::beatmap::read_metadata;
use crate::cli::Args;
use crate::config::ProgressMode;
use crate::error::{FatalError, SongError};
use crate::export::export_song;
use crate::library::{SongDir, find_descriptor, list_song_dirs};
use crate::progress::{self, Progress};

mod settings;

#[cfg(test)]
mod tests;

/// Everything one run needs, fixed before the first song is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub songs_dir: PathBuf,
    pub out_dir: PathBuf,
    pub progress: ProgressMode,
    pub title_width: usize,
    pub follow_links: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub exported: usize,
    pub skipped: usize,
}

struct Exported {
    title: String,
    target: PathBuf,
}

pub fn run(args: Args) -> Result<Summary, FatalError> {
    let settings = settings::load_settings(args.config.as_deref());
    let cfg = settings::run_config(args, &settings);
    let show_progress = progress::enabled_for_stdout(cfg.progress);

    extract_all(&cfg, io::stdout().lock(), show_progress)
}

/// Export every song folder under `cfg.songs_dir`, reporting to `out`.
pub fn extract_all<W: Write>(
    cfg: &RunConfig,
    out: W,
    show_progress: bool,
) -> Result<Summary, FatalError> {
    let listing = list_song_dirs(&cfg.songs_dir, cfg.follow_links)?;
    ensure_out_dir(&cfg.out_dir)?;

    info!(
        songs = listing.songs.len(),
        ignored = listing.ignored,
        out_dir = %cfg.out_dir.display(),
        "extracting"
    );

    let total = listing.songs.len();
    let mut progress = Progress::new(out, show_progress, total, cfg.title_width);
    let mut summary = Summary::default();

    for (i, song) in listing.songs.iter().enumerate() {
        let title = match process_song(song, cfg) {
            Ok(done) => {
                debug!(song = %song.name, target = %done.target.display(), "exported");
                summary.exported += 1;
                done.title
            }
            Err(e) => {
                debug!(song = %song.name, error = %e, "skipped");
                summary.skipped += 1;
                song.name.clone()
            }
        };

        if let Err(e) = progress.tick(i + 1, &title) {
            warn!(error = %e, "failed to draw progress");
        }
    }

    if let Err(e) = progress.finish(summary.exported, summary.skipped) {
        warn!(error = %e, "failed to print summary");
    }

    info!(exported = summary.exported, skipped = summary.skipped, "done");
    Ok(summary)
}

fn ensure_out_dir(dir: &Path) -> Result<(), FatalError> {
    fs::create_dir_all(dir).map_err(|source| FatalError::DestinationUncreatable {
        path: dir.to_path_buf(),
        source,
    })
}

fn process_song(song: &SongDir, cfg: &RunConfig) -> Result<Exported, SongError> {
    let descriptor = find_descriptor(&song.path, cfg.follow_links)?;
    let meta = read_metadata(&descriptor)?;
    let target = export_song(&descriptor, &meta, &cfg.out_dir)?;

    Ok(Exported {
        title: meta.title,
        target,
    })
}
