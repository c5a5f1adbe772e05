//! Configuration file (`wordle_daily.toml`)
//!
//! Every field is optional; command-line flags take precedence over values
//! read here.

use crate::game::RevealTimings;
use crate::storage::FileStore;
use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_FILE: &str = "config.toml";
const LOCAL_CONFIG_FILE: &str = "wordle_daily.toml";
const LOG_FILE: &str = "wordle_daily.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding saved games and the streak record
    pub data_dir: Option<PathBuf>,
    /// Log file; defaults to `wordle_daily.log` in the data directory
    pub log_file: Option<PathBuf>,
    /// Custom list of accepted guesses
    pub wordlist: Option<PathBuf>,
    pub reveal: RevealTimings,
}

impl Config {
    /// First existing config file: `explicit`, then the user config
    /// directory, then the working directory
    #[must_use]
    pub fn find_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
        let candidates = [
            explicit.map(Path::to_path_buf),
            dirs::config_dir().map(|d| d.join("wordle_daily").join(CONFIG_FILE)),
            Some(PathBuf::from(LOCAL_CONFIG_FILE)),
        ];
        candidates.into_iter().flatten().find(|p| p.is_file())
    }

    /// Load the first config file found, or defaults if there is none
    ///
    /// # Errors
    /// Returns `ConfigError` if a config file exists but cannot be read or
    /// parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match Self::find_config_path(explicit) {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or is not valid TOML
    /// for this schema.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Data directory, falling back to the platform default
    #[must_use]
    pub fn data_dir(&self) -> Option<PathBuf> {
        self.data_dir.clone().or_else(FileStore::default_dir)
    }

    #[must_use]
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| self.data_dir().map(|d| d.join(LOG_FILE)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn full_file_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
data_dir = "/tmp/wordle"
wordlist = "words.txt"

[reveal]
letter_delay_ms = 150
settle_ms = 20
"#,
        )
        .unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.data_dir.as_deref(), Some(Path::new("/tmp/wordle")));
        assert_eq!(config.wordlist.as_deref(), Some(Path::new("words.txt")));
        assert_eq!(config.reveal.letter_delay, Duration::from_millis(150));
        assert_eq!(config.reveal.settle, Duration::from_millis(20));
        assert_eq!(config.reveal.shake, Duration::from_millis(400));
        assert_eq!(
            config.log_path().as_deref(),
            Some(Path::new("/tmp/wordle/wordle_daily.log"))
        );
    }

    #[test]
    fn empty_file_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "reveal = 3").unwrap();

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn explicit_log_file_wins() {
        let config = Config {
            log_file: Some(PathBuf::from("game.log")),
            data_dir: Some(PathBuf::from("/data")),
            ..Config::default()
        };
        assert_eq!(config.log_path().as_deref(), Some(Path::new("game.log")));
    }
}
