//! Grid state for one daily puzzle
//!
//! These types are also the persisted record shape, so field names serialize
//! in camelCase (`currentRow`, `gameOver`, `isWin`, `isValid`, `isSolution`).

use crate::core::{GUESS_LIMIT, LetterState, WORD_LENGTH};
use serde::{Deserialize, Serialize};

/// One cell of the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Letter {
    /// Uppercase A-Z, or `None` for an empty cell
    #[serde(rename = "char", with = "cell_char")]
    pub ch: Option<char>,
    #[serde(default)]
    pub state: LetterState,
}

impl Letter {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ch.is_none()
    }
}

/// One row of the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guess {
    pub letters: [Letter; WORD_LENGTH],
    #[serde(default)]
    pub is_valid: bool,
    #[serde(default)]
    pub is_solution: bool,
}

impl Guess {
    /// Every cell holds a letter
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.letters.iter().all(|l| !l.is_empty())
    }

    /// Untouched row: no letters, no states, no flags
    #[must_use]
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    /// Every cell has been classified
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.letters.iter().all(|l| l.state.is_revealed())
    }

    /// Some, but not necessarily all, cells have been classified
    #[must_use]
    pub fn has_revealed_letters(&self) -> bool {
        self.letters.iter().any(|l| l.state.is_revealed())
    }

    /// Letters typed so far, uppercase
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().filter_map(|l| l.ch).collect()
    }

    /// Insert a letter in the first empty cell; returns whether anything changed
    pub(crate) fn push(&mut self, ch: char) -> bool {
        match self.letters.iter_mut().find(|l| l.is_empty()) {
            Some(cell) => {
                cell.ch = Some(ch.to_ascii_uppercase());
                true
            }
            None => false,
        }
    }

    /// Clear the last filled cell; returns whether anything changed
    pub(crate) fn pop(&mut self) -> bool {
        match self.letters.iter_mut().rev().find(|l| !l.is_empty()) {
            Some(cell) => {
                cell.ch = None;
                true
            }
            None => false,
        }
    }

    /// Drop classification while keeping the typed letters
    pub(crate) fn clear_classification(&mut self) {
        for letter in &mut self.letters {
            letter.state = LetterState::Default;
        }
        self.is_valid = false;
        self.is_solution = false;
    }
}

/// Complete puzzle state for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub guesses: [Guess; GUESS_LIMIT],
    pub current_row: usize,
    pub game_over: bool,
    pub is_win: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            guesses: [Guess::default(); GUESS_LIMIT],
            current_row: 0,
            game_over: false,
            is_win: false,
        }
    }
}

impl GameState {
    /// A row accepts edits and submission
    #[must_use]
    pub const fn is_editable(&self, row: usize) -> bool {
        row == self.current_row && !self.game_over
    }

    #[must_use]
    pub fn current_guess(&self) -> &Guess {
        &self.guesses[self.current_row]
    }

    /// Rows that have been submitted and fully revealed
    pub fn submitted(&self) -> impl Iterator<Item = &Guess> {
        self.guesses.iter().filter(|g| g.is_valid && g.is_revealed())
    }

    /// Check the structural invariants of a state
    ///
    /// - `current_row` is within the grid
    /// - rows before `current_row` are valid and fully revealed
    /// - rows after `current_row` are blank
    /// - a win is only recorded on a finished game whose current row is the solution
    /// - a finished game has a submitted, fully revealed current row; a loss
    ///   sits on the last row
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if self.current_row >= GUESS_LIMIT {
            return false;
        }
        let (before, rest) = self.guesses.split_at(self.current_row);
        let after = &rest[1..];

        let before_ok = before
            .iter()
            .all(|g| g.is_valid && g.is_complete() && g.is_revealed() && !g.is_solution);
        let after_ok = after.iter().all(Guess::is_blank);
        let current = self.current_guess();
        let win_ok = !self.is_win || (self.game_over && current.is_solution);
        let finish_ok = !self.game_over
            || (current.is_valid
                && current.is_complete()
                && current.is_revealed()
                && current.is_solution == self.is_win
                && (self.is_win || self.current_row == GUESS_LIMIT - 1));

        before_ok && after_ok && win_ok && finish_ok
    }

    /// Undo a reveal that was interrupted before the row advanced
    ///
    /// Returns true if the current row was rolled back to its editable form.
    pub(crate) fn rollback_interrupted_reveal(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let row = &mut self.guesses[self.current_row];
        if row.is_valid || row.has_revealed_letters() {
            row.clear_classification();
            return true;
        }
        false
    }
}

/// Serialize an empty cell as `""` and a filled one as a one-letter string
mod cell_char {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)] // Signature required by serde's `with`
    pub fn serialize<S: Serializer>(value: &Option<char>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(c) => serializer.serialize_str(c.encode_utf8(&mut [0u8; 4])),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<char>, D::Error> {
        let s = String::deserialize(deserializer)?;
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(None),
            (Some(c), None) if c.is_ascii_alphabetic() => Ok(Some(c.to_ascii_uppercase())),
            _ => Err(D::Error::custom(format!("invalid cell character '{s}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState::{Absent, Correct, Present};

    fn typed(word: &str) -> Guess {
        let mut guess = Guess::default();
        for ch in word.chars() {
            guess.push(ch);
        }
        guess
    }

    fn revealed(word: &str, states: [LetterState; WORD_LENGTH], solution: bool) -> Guess {
        let mut guess = typed(word);
        for (letter, state) in guess.letters.iter_mut().zip(states) {
            letter.state = state;
        }
        guess.is_valid = true;
        guess.is_solution = solution;
        guess
    }

    #[test]
    fn fresh_state_is_blank_and_consistent() {
        let state = GameState::default();
        assert_eq!(state.current_row, 0);
        assert!(!state.game_over);
        assert!(state.guesses.iter().all(Guess::is_blank));
        assert!(state.is_consistent());
        assert!(state.is_editable(0));
        assert!(!state.is_editable(1));
    }

    #[test]
    fn push_fills_left_to_right_and_uppercases() {
        let mut guess = Guess::default();
        assert!(guess.push('c'));
        assert!(guess.push('R'));
        assert_eq!(guess.text(), "CR");

        let mut full = typed("crane");
        assert!(!full.push('x'));
        assert_eq!(full.text(), "CRANE");
        assert!(full.is_complete());
    }

    #[test]
    fn pop_clears_last_filled_cell() {
        let mut guess = typed("cr");
        assert!(guess.pop());
        assert_eq!(guess.text(), "C");
        assert!(guess.pop());
        assert!(!guess.pop());
        assert!(guess.is_blank());
    }

    #[test]
    fn inconsistent_states_detected() {
        let mut state = GameState {
            current_row: GUESS_LIMIT,
            ..GameState::default()
        };
        assert!(!state.is_consistent());

        // Row after current has letters
        state.current_row = 0;
        state.guesses[2] = typed("crane");
        assert!(!state.is_consistent());

        // Row before current not submitted
        let mut state = GameState {
            current_row: 1,
            ..GameState::default()
        };
        state.guesses[0] = typed("crane");
        assert!(!state.is_consistent());

        state.guesses[0] = revealed("crane", [Absent, Present, Absent, Absent, Correct], false);
        assert!(state.is_consistent());

        // Win claimed without solution row
        state.game_over = true;
        state.is_win = true;
        assert!(!state.is_consistent());
    }

    #[test]
    fn finished_game_needs_revealed_final_row() {
        // Loss on an empty board
        let state = GameState {
            game_over: true,
            ..GameState::default()
        };
        assert!(!state.is_consistent());

        let miss = revealed("crane", [Absent, Present, Absent, Absent, Correct], false);
        let mut state = GameState {
            guesses: [miss; GUESS_LIMIT],
            current_row: GUESS_LIMIT - 1,
            game_over: true,
            is_win: false,
        };
        assert!(state.is_consistent());

        // Final row typed but never revealed
        state.guesses[GUESS_LIMIT - 1] = typed("crane");
        assert!(!state.is_consistent());

        // Loss before the last row
        let mut early = GameState {
            current_row: 2,
            game_over: true,
            ..GameState::default()
        };
        early.guesses[0] = miss;
        early.guesses[1] = miss;
        early.guesses[2] = miss;
        assert!(!early.is_consistent());

        // Solution row recorded as a loss
        let mut solved = GameState {
            current_row: 1,
            game_over: true,
            ..GameState::default()
        };
        solved.guesses[0] = miss;
        solved.guesses[1] = revealed("speed", [Correct; WORD_LENGTH], true);
        assert!(!solved.is_consistent());
        solved.is_win = true;
        assert!(solved.is_consistent());
    }

    #[test]
    fn rollback_interrupted_reveal_keeps_letters() {
        let mut state = GameState::default();
        state.guesses[0] = revealed("crane", [Absent, Present, Absent, Absent, Correct], false);
        state.guesses[0].letters[3].state = LetterState::Default;
        state.guesses[0].letters[4].state = LetterState::Default;

        assert!(state.rollback_interrupted_reveal());
        assert_eq!(state.guesses[0], typed("crane"));
        assert!(!state.rollback_interrupted_reveal());
    }

    #[test]
    fn record_uses_camel_case_shape() {
        let mut state = GameState::default();
        state.guesses[0] = revealed("crane", [Absent, Present, Absent, Absent, Correct], false);
        state.current_row = 1;

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["currentRow"], 1);
        assert_eq!(json["gameOver"], false);
        assert_eq!(json["isWin"], false);
        assert_eq!(json["guesses"][0]["isValid"], true);
        assert_eq!(json["guesses"][0]["letters"][0]["char"], "C");
        assert_eq!(json["guesses"][0]["letters"][1]["state"], "present");
        assert_eq!(json["guesses"][1]["letters"][0]["char"], "");
    }

    #[test]
    fn save_and_reload_is_identical() {
        let mut state = GameState::default();
        state.guesses[0] = revealed("crane", [Absent, Present, Absent, Absent, Correct], false);
        state.guesses[1] = typed("sl");
        state.current_row = 1;

        let json = serde_json::to_string(&state).unwrap();
        let reloaded: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, state);
    }

    #[test]
    fn malformed_cells_rejected() {
        let mut json = serde_json::to_value(GameState::default()).unwrap();
        json["guesses"][0]["letters"][0]["char"] = "AB".into();
        assert!(serde_json::from_value::<GameState>(json.clone()).is_err());

        json["guesses"][0]["letters"][0]["char"] = "7".into();
        assert!(serde_json::from_value::<GameState>(json).is_err());
    }

    #[test]
    fn wrong_row_count_rejected() {
        let mut json = serde_json::to_value(GameState::default()).unwrap();
        json["guesses"].as_array_mut().unwrap().pop();
        assert!(serde_json::from_value::<GameState>(json).is_err());
    }
}
