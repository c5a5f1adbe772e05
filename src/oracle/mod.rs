//! Word oracle
//!
//! Answers whether a guess is a dictionary word, whether it is today's
//! solution, and how each letter compares against the solution.

mod daily;
mod dictionary;

pub use daily::daily_solution;
pub use dictionary::DictionaryOracle;

use crate::core::{Feedback, LetterState, WORD_LENGTH, Word};
use thiserror::Error;

/// Errors raised by an oracle
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OracleError {
    #[error("No answer words available to pick a solution from")]
    EmptyAnswerList,

    #[error("Word oracle unavailable: {0}")]
    Unavailable(String),
}

/// Result of classifying one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub is_valid: bool,
    pub is_solution: bool,
    feedback: Feedback,
}

impl Classification {
    /// A guess that is not in the dictionary
    #[must_use]
    pub const fn invalid() -> Self {
        Self {
            is_valid: false,
            is_solution: false,
            feedback: Feedback::from_states([LetterState::Default; WORD_LENGTH]),
        }
    }

    /// A dictionary word with its computed feedback
    #[must_use]
    pub fn valid(feedback: Feedback) -> Self {
        Self {
            is_valid: true,
            is_solution: feedback.is_solved(),
            feedback,
        }
    }

    /// Per-letter states; only meaningful when `is_valid`
    #[must_use]
    pub const fn letter_states(&self) -> &[LetterState; WORD_LENGTH] {
        self.feedback.states()
    }

    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }
}

/// Classifies guesses against the day's solution
pub trait WordOracle {
    /// Classify a guess
    ///
    /// # Errors
    /// Returns `OracleError` if the oracle cannot answer; the caller must
    /// leave the guess unapplied.
    fn classify(&self, guess: &Word) -> Result<Classification, OracleError>;
}

impl<O: WordOracle + ?Sized> WordOracle for &O {
    fn classify(&self, guess: &Word) -> Result<Classification, OracleError> {
        (**self).classify(guess)
    }
}
