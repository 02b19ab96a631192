use std::{
    env,
    path::{Path, PathBuf},
};

use super::schema::Settings;

impl Settings {
    /// Load settings from the environment and an optional config file.
    ///
    /// `path` replaces the XDG default location (the CLI fills it from
    /// `--config` or `OSU_AUDIO_EXTRACT_CONFIG_PATH`). A missing file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ::config::ConfigError> {
        let config_path = path.map(Path::to_path_buf).or_else(default_config_path);

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("OSU_AUDIO_EXTRACT")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.progress.title_width == 0 {
            return Err("progress.title_width must be >= 1".to_string());
        }
        if self.export.out_dir.as_os_str().is_empty() {
            return Err("export.out_dir must not be empty".to_string());
        }
        Ok(())
    }
}

/// `$XDG_CONFIG_HOME/osu-audio-extract/config.toml`, or
/// `~/.config/osu-audio-extract/config.toml` when `XDG_CONFIG_HOME` is unset.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("osu-audio-extract").join("config.toml"))
}
