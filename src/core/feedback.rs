//! Per-letter feedback for a guess
//!
//! Feedback holds one `LetterState` per position. Calculation follows the
//! game's exact rules for duplicate letters: exact matches are resolved first,
//! then remaining letters are matched against what is left of the solution.

use super::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};

/// Classification of a single letter
///
/// Variants are declared in priority order, so `Ord` ranks
/// `Correct > Present > Absent > Default`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterState {
    /// Not yet submitted
    #[default]
    Default,
    /// Letter not in the solution (or all occurrences already accounted for)
    Absent,
    /// Letter in the solution, wrong position
    Present,
    /// Letter in the correct position
    Correct,
}

impl LetterState {
    /// Whether this state came from a classification
    #[inline]
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        !matches!(self, Self::Default)
    }

    /// Square emoji used in shareable grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent | Self::Default => '⬜',
        }
    }
}

/// Feedback for one guess, one state per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterState; WORD_LENGTH]);

impl Feedback {
    /// All letters correct
    pub const SOLVED: Self = Self([LetterState::Correct; WORD_LENGTH]);

    /// Wrap precomputed states
    #[must_use]
    pub const fn from_states(states: [LetterState; WORD_LENGTH]) -> Self {
        Self(states)
    }

    /// Calculate the feedback when `guess` is played against `solution`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches correct and remove them from the pool
    /// 2. Second pass: mark present-but-misplaced letters from the remaining pool
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{Feedback, LetterState::*, Word};
    ///
    /// let guess = Word::new("erase").unwrap();
    /// let solution = Word::new("speed").unwrap();
    ///
    /// let feedback = Feedback::calculate(&guess, &solution);
    /// assert_eq!(feedback.states(), &[Present, Absent, Absent, Present, Present]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        let mut result = [LetterState::Absent; WORD_LENGTH];
        let mut available = solution.char_counts();

        // First pass: exact position matches
        // Allow: Index needed to access guess[i], solution[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.char_at(i);
            if letter == solution.char_at(i) {
                result[i] = LetterState::Correct;
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but an occurrence is still unclaimed
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterState::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                result[i] = LetterState::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// The per-position states
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    #[cfg(test)]
    pub(crate) fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}
