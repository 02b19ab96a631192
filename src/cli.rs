use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::ProgressMode;

/// Copy the audio of every osu! song folder into one directory,
/// named `Artist - Title.<ext>`.
#[derive(Debug, Parser)]
#[command(name = "osu-audio-extract", version, about)]
pub struct Args {
    /// Path to the osu! Songs directory
    #[arg(short = 'p', value_name = "PATH")]
    pub songs_dir: PathBuf,

    /// Output directory for the extracted audio [default: Songs]
    #[arg(short = 'd', value_name = "PATH")]
    pub out_dir: Option<PathBuf>,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "FILE", env = "OSU_AUDIO_EXTRACT_CONFIG_PATH")]
    pub config: Option<PathBuf>,

    /// When to draw the live progress line
    #[arg(long, value_enum)]
    pub progress: Option<ProgressMode>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Default tracing filter directive for the requested verbosity.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
