//! Best-known state per letter across the whole grid

use super::state::Guess;
use crate::core::LetterState;
use rustc_hash::FxHashMap;

/// On-screen keyboard layout; `Enter` and `Backspace` flank the bottom row
pub const KEYBOARD_ROWS: [&[&str]; 3] = [
    &["Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L"],
    &["Enter", "Z", "X", "C", "V", "B", "N", "M", "Backspace"],
];

/// Aggregated letter states for the on-screen keyboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardStates(FxHashMap<char, LetterState>);

impl KeyboardStates {
    /// Fold every classified letter in `guesses`, keeping the highest-priority state
    #[must_use]
    pub fn from_guesses<'a>(guesses: impl IntoIterator<Item = &'a Guess>) -> Self {
        let mut states: FxHashMap<char, LetterState> = FxHashMap::default();
        for letter in guesses.into_iter().flat_map(|g| &g.letters) {
            let Some(ch) = letter.ch else { continue };
            let entry = states.entry(ch).or_default();
            if letter.state > *entry {
                *entry = letter.state;
            }
        }
        Self(states)
    }

    /// State for a letter (case-insensitive); `Default` if never classified
    #[must_use]
    pub fn get(&self, ch: char) -> LetterState {
        self.0
            .get(&ch.to_ascii_uppercase())
            .copied()
            .unwrap_or_default()
    }
}
