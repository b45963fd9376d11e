use crate::consts;
use crate::skin::SkinName;
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Gameplay & presentation settings
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Settings about data files
    #[serde(default)]
    pub(crate) files: FileConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("neosnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read, if the file's contents
    /// could not be deserialized, or if the resulting settings are out of
    /// range.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        Config::parse(&content)
    }

    fn parse(content: &str) -> Result<Config, ConfigError> {
        let config = toml::from_str::<Config>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check settings that deserialize fine but cannot be played with.
    /// Command-line overrides are checked through here as well.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self
            .game
            .tile_count
            .is_some_and(|n| n < consts::MIN_TILE_COUNT)
        {
            return Err(ConfigError::Invalid("tile-count must be at least 4"));
        }
        if self.game.base_interval_ms == 0 {
            return Err(ConfigError::Invalid("base-interval-ms must be at least 1"));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct GameConfig {
    /// Milliseconds between moves at a score of zero
    pub(crate) base_interval_ms: u64,

    /// Fixed board size; when unset, the board is fitted to the terminal each
    /// time a game starts
    pub(crate) tile_count: Option<u16>,

    pub(crate) skin: SkinName,

    /// Whether to ring the terminal bell on eating and dying
    pub(crate) sound: bool,
}

impl GameConfig {
    pub(crate) fn base_interval(&self) -> Duration {
        Duration::from_millis(self.base_interval_ms)
    }
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            base_interval_ms: u64::try_from(consts::BASE_TICK_INTERVAL.as_millis())
                .unwrap_or(u64::MAX),
            tile_count: None,
            skin: SkinName::default(),
            sound: true,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawFileConfig")]
pub(crate) struct FileConfig {
    /// Path at which high scores are stored; `None` if not configured and no
    /// default could be computed
    pub(crate) high_scores_file: Option<PathBuf>,

    /// Path to write the log to; `None` if not configured and no default
    /// could be computed
    pub(crate) log_file: Option<PathBuf>,

    pub(crate) log_level: LevelFilter,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            high_scores_file: default_data_path("highscores.json"),
            log_file: default_data_path("neosnake.log"),
            log_level: LevelFilter::Info,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawFileConfig {
    high_scores_file: Option<PathBuf>,
    log_file: Option<PathBuf>,
    log_level: Option<String>,
}

impl TryFrom<RawFileConfig> for FileConfig {
    type Error = log::ParseLevelError;

    fn try_from(value: RawFileConfig) -> Result<FileConfig, log::ParseLevelError> {
        let log_level = match value.log_level {
            Some(s) => LevelFilter::from_str(&s)?,
            None => LevelFilter::Info,
        };
        Ok(FileConfig {
            high_scores_file: value
                .high_scores_file
                .or_else(|| default_data_path("highscores.json")),
            log_file: value.log_file.or_else(|| default_data_path("neosnake.log")),
            log_level,
        })
    }
}

fn default_data_path(filename: &str) -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("neosnake").join(filename))
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}
