//! Typed access to the daily records
//!
//! Reads never fail: a missing, unreadable or corrupt record degrades to
//! "no record" and is logged. Writes need a [`DayToken`], which only
//! [`Persistence::load_day`] hands out, so nothing can overwrite a day's
//! record before that record has been read.

use super::{KeyValueStore, STREAK_KEY, StorageError, game_key};
use crate::core::DayKey;
use crate::game::{GameState, StreakData};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Proof that a day's records were loaded; required to save them
#[derive(Debug)]
pub struct DayToken {
    day: DayKey,
}

impl DayToken {
    #[must_use]
    pub const fn day(&self) -> DayKey {
        self.day
    }
}

/// Everything stored for one day
#[derive(Debug)]
pub struct DayLoad {
    pub token: DayToken,
    pub game: Option<GameState>,
    pub streak: StreakData,
}

#[derive(Debug)]
pub struct Persistence<S> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> S {
        self.store
    }

    /// Read the day's game and the streak record
    pub fn load_day(&self, day: DayKey) -> DayLoad {
        let game = self.load_game(day);
        let streak = self.load_streak();
        debug!(%day, has_game = game.is_some(), streak = streak.streak, "loaded day");
        DayLoad {
            token: DayToken { day },
            game,
            streak,
        }
    }

    /// Read-only view of a day's game; inconsistent records are discarded
    pub fn load_game(&self, day: DayKey) -> Option<GameState> {
        let key = game_key(day);
        let game: GameState = self.read(&key)?;
        if game.is_consistent() {
            Some(game)
        } else {
            warn!(key, "discarding inconsistent game record");
            None
        }
    }

    /// Read-only view of the streak record
    pub fn load_streak(&self) -> StreakData {
        self.read(STREAK_KEY).unwrap_or_default()
    }

    /// Persist the game for the token's day
    ///
    /// # Errors
    /// Returns `StorageError` if the record cannot be encoded or written.
    pub fn save_game(&mut self, token: &DayToken, game: &GameState) -> Result<(), StorageError> {
        self.write(&game_key(token.day), game)
    }

    /// Persist the streak record
    ///
    /// # Errors
    /// Returns `StorageError` if the record cannot be encoded or written.
    pub fn save_streak(
        &mut self,
        _token: &DayToken,
        streak: &StreakData,
    ) -> Result<(), StorageError> {
        self.write(STREAK_KEY, streak)
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "failed to read record");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "discarding corrupt record");
                None
            }
        }
    }

    fn write<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)?;
        self.store.set(key, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, MemoryStore};

    fn day(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    fn sample_game() -> GameState {
        let mut game = GameState::default();
        for ch in "CRA".chars() {
            game.guesses[0].push(ch);
        }
        game
    }

    #[test]
    fn empty_store_loads_fresh_day() {
        let persistence = Persistence::new(MemoryStore::new());
        let load = persistence.load_day(day("2025-03-10"));
        assert!(load.game.is_none());
        assert_eq!(load.streak, StreakData::default());
        assert_eq!(load.token.day(), day("2025-03-10"));
    }

    #[test]
    fn saved_records_reload() {
        let mut persistence = Persistence::new(MemoryStore::new());
        let today = day("2025-03-10");
        let load = persistence.load_day(today);

        let game = sample_game();
        let mut streak = StreakData::default();
        streak.record(crate::game::Outcome::Win, today);

        persistence.save_game(&load.token, &game).unwrap();
        persistence.save_streak(&load.token, &streak).unwrap();

        let reloaded = persistence.load_day(today);
        assert_eq!(reloaded.game, Some(game));
        assert_eq!(reloaded.streak, streak);

        // Other days are separate records
        assert!(persistence.load_game(day("2025-03-11")).is_none());
    }

    #[test]
    fn corrupt_records_degrade_to_defaults() {
        let mut store = MemoryStore::new();
        store.set("wordle-2025-03-10", "{not json").unwrap();
        store.set(STREAK_KEY, "[1,2,3]").unwrap();

        let load = Persistence::new(store).load_day(day("2025-03-10"));
        assert!(load.game.is_none());
        assert_eq!(load.streak, StreakData::default());
    }

    #[test]
    fn empty_streak_object_is_fresh_record() {
        let mut store = MemoryStore::new();
        store.set(STREAK_KEY, "{}").unwrap();
        let persistence = Persistence::new(store);
        assert_eq!(persistence.load_streak(), StreakData::default());
    }

    #[test]
    fn inconsistent_game_is_discarded() {
        let mut game = sample_game();
        game.current_row = 2; // row 0 is neither submitted nor blank-after
        let mut store = MemoryStore::new();
        store
            .set("wordle-2025-03-10", &serde_json::to_string(&game).unwrap())
            .unwrap();

        let persistence = Persistence::new(store);
        assert!(persistence.load_game(day("2025-03-10")).is_none());
    }

    #[test]
    fn finished_game_without_guesses_is_discarded() {
        let game = GameState {
            game_over: true,
            ..GameState::default()
        };
        let mut store = MemoryStore::new();
        store
            .set("wordle-2025-03-10", &serde_json::to_string(&game).unwrap())
            .unwrap();

        let persistence = Persistence::new(store);
        assert!(persistence.load_game(day("2025-03-10")).is_none());
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let today = day("2025-03-10");
        let game = sample_game();

        {
            let mut persistence = Persistence::new(FileStore::new(dir.path()));
            let load = persistence.load_day(today);
            persistence.save_game(&load.token, &game).unwrap();
        }

        let persistence = Persistence::new(FileStore::new(dir.path()));
        assert_eq!(persistence.load_game(today), Some(game));
        assert!(dir.path().join("wordle-2025-03-10.json").exists());
    }
}
