//! Dictionary-backed oracle

use super::{Classification, OracleError, WordOracle, daily_solution};
use crate::core::{DayKey, Feedback, Word};
use rustc_hash::FxHashSet;

/// Oracle backed by an in-memory dictionary and a fixed solution
#[derive(Debug, Clone)]
pub struct DictionaryOracle {
    dictionary: FxHashSet<Word>,
    solution: Word,
}

impl DictionaryOracle {
    /// Build an oracle from a dictionary and a known solution
    ///
    /// The solution is always accepted as a guess, even when missing from the
    /// dictionary.
    #[must_use]
    pub fn new(dictionary: impl IntoIterator<Item = Word>, solution: Word) -> Self {
        let mut dictionary: FxHashSet<Word> = dictionary.into_iter().collect();
        dictionary.insert(solution.clone());
        Self {
            dictionary,
            solution,
        }
    }

    /// Build the oracle for a given day
    ///
    /// The dictionary is `allowed ∪ answers`; the solution is picked from
    /// `answers` by [`daily_solution`].
    ///
    /// # Errors
    /// Returns `OracleError::EmptyAnswerList` if `answers` is empty.
    pub fn for_day(day: DayKey, allowed: &[Word], answers: &[Word]) -> Result<Self, OracleError> {
        let solution = daily_solution(day, answers)?;
        let dictionary = allowed.iter().chain(answers).cloned();
        Ok(Self::new(dictionary, solution))
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.dictionary.contains(word)
    }

    #[cfg(test)]
    pub(crate) fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }
}

impl WordOracle for DictionaryOracle {
    fn classify(&self, guess: &Word) -> Result<Classification, OracleError> {
        if !self.contains(guess) {
            return Ok(Classification::invalid());
        }
        Ok(Classification::valid(Feedback::calculate(
            guess,
            &self.solution,
        )))
    }
}
