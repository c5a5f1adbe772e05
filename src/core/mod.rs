//! Core domain types for the daily game
//!
//! Words, per-letter feedback and the calendar day that scopes a puzzle.
//! Everything here is pure and independent of storage or terminal I/O.

mod day;
mod feedback;
mod word;

pub use day::{DayError, DayKey, DaySource, FixedDay, SystemDay};
pub use feedback::{Feedback, LetterState};
pub use word::{Word, WordError};

/// Number of letters in every guess and solution
pub const WORD_LENGTH: usize = 5;

/// Number of guesses allowed per daily puzzle
pub const GUESS_LIMIT: usize = 6;
