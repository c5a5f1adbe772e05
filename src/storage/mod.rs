//! Persistence of daily game state and the streak record
//!
//! Records are JSON strings in a key-value store. One key per day holds that
//! day's grid; one fixed key holds the streak.

mod file;
mod memory;
mod persistence;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use persistence::{DayLoad, DayToken, Persistence};

use crate::core::DayKey;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Key under which the streak record lives
pub const STREAK_KEY: &str = "wordle-streaks";

/// Prefix of per-day game keys
pub const GAME_KEY_PREFIX: &str = "wordle-";

/// Storage key for a day's game record, e.g. `wordle-2025-03-10`
#[must_use]
pub fn game_key(day: DayKey) -> String {
    format!("{GAME_KEY_PREFIX}{day}")
}

/// Errors from a key-value store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Minimal string key-value store
pub trait KeyValueStore {
    /// Read a value; `Ok(None)` if the key was never written
    ///
    /// # Errors
    /// Returns `StorageError` if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one
    ///
    /// # Errors
    /// Returns `StorageError` if the backing store cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
