use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/osu-audio-extract/config.toml`
/// or `~/.config/osu-audio-extract/config.toml`
///
/// Precedence (highest wins):
/// 1) Command-line flags
/// 2) Environment variables (prefix `OSU_AUDIO_EXTRACT__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub export: ExportSettings,
    pub progress: ProgressSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Directory that receives the extracted audio files.
    pub out_dir: PathBuf,
    /// Whether to follow symlinks while looking for `.osu` files.
    pub follow_links: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("Songs"),
            follow_links: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProgressSettings {
    /// When to draw the live progress line.
    pub mode: ProgressMode,
    /// Titles longer than this many characters are cut and suffixed with `...`.
    pub title_width: usize,
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self {
            mode: ProgressMode::Auto,
            title_width: 30,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressMode {
    /// Only when stdout is a terminal.
    #[serde(alias = "tty")]
    Auto,
    #[serde(alias = "on", alias = "yes")]
    Always,
    #[serde(alias = "off", alias = "no")]
    Never,
}
