use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop the whole run before any song is processed.
#[derive(Debug, Error)]
pub enum FatalError {
    #[error("cannot read songs directory {}: {source}", path.display())]
    RootUnreadable { path: PathBuf, source: io::Error },

    #[error("cannot create output directory {}: {source}", path.display())]
    DestinationUncreatable { path: PathBuf, source: io::Error },
}

/// Failures confined to a single song directory. The driver counts these as skips.
#[derive(Debug, Error)]
pub enum SongError {
    #[error("no .osu file under {}", dir.display())]
    DescriptorNotFound { dir: PathBuf },

    #[error("failed walking {}: {source}", dir.display())]
    DescriptorWalk {
        dir: PathBuf,
        source: walkdir::Error,
    },

    #[error("cannot open {}: {source}", path.display())]
    DescriptorOpen { path: PathBuf, source: io::Error },

    #[error("cannot read {}: {source}", path.display())]
    DescriptorRead { path: PathBuf, source: io::Error },

    #[error("{} is missing {}", path.display(), missing.join(", "))]
    IncompleteMetadata {
        path: PathBuf,
        missing: Vec<&'static str>,
    },

    #[error("cannot read audio {}: {source}", path.display())]
    AudioFileUnreadable { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {source}", path.display())]
    AudioFileWrite { path: PathBuf, source: io::Error },
}
