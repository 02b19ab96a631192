use std::path::Path;

use crate::cli::Args;
use crate::config;

use super::RunConfig;

/// Settings for this run; any load or validation problem falls back to defaults.
pub fn load_settings(path: Option<&Path>) -> config::Settings {
    let loaded = config::Settings::load(path)
        .map_err(|e| e.to_string())
        .and_then(|s| s.validate().map(|()| s));

    loaded.unwrap_or_else(|reason| {
        eprintln!("osu-audio-extract: ignoring settings ({reason}), exporting with built-in defaults");
        config::Settings::default()
    })
}

/// Merge command-line flags over loaded settings.
pub fn run_config(args: Args, settings: &config::Settings) -> RunConfig {
    RunConfig {
        songs_dir: args.songs_dir,
        out_dir: args
            .out_dir
            .unwrap_or_else(|| settings.export.out_dir.clone()),
        progress: args.progress.unwrap_or(settings.progress.mode),
        title_width: settings.progress.title_width,
        follow_links: settings.export.follow_links,
    }
}
