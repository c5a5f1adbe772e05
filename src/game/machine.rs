//! Game state machine
//!
//! Owns the grid plus the transient, time-bound flags around it (row shake
//! after a rejected word, reveal in flight). All time enters through the
//! `now` arguments, so transitions are fully deterministic under test.

use super::keyboard::KeyboardStates;
use super::reveal::{RevealSequence, RevealStep, RevealTimings};
use super::state::GameState;
use super::streak::Outcome;
use crate::core::{GUESS_LIMIT, LetterState, Word};
use crate::oracle::{OracleError, WordOracle};
use std::time::Instant;
use tracing::{debug, info};

/// Result of a submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing happened: row incomplete, not editable, or game over
    Ignored,
    /// Not a dictionary word; the row shakes and stays editable
    Rejected,
    /// Valid word; its reveal sequence has started
    Accepted,
}

/// Transitions reported by [`GameMachine::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    LetterRevealed {
        row: usize,
        index: usize,
        state: LetterState,
    },
    /// The reveal settled and `row` is now the current row
    RowAdvanced { row: usize },
    /// The reveal settled and the game reached its terminal state
    Finished(Outcome),
}

#[derive(Debug, Clone, Copy)]
struct Shake {
    row: usize,
    until: Instant,
}

/// The daily game: grid, current row, terminal status and transient flags
#[derive(Debug, Clone)]
pub struct GameMachine {
    state: GameState,
    timings: RevealTimings,
    reveal: Option<RevealSequence>,
    shake: Option<Shake>,
}

impl GameMachine {
    /// A fresh game
    #[must_use]
    pub fn new(timings: RevealTimings) -> Self {
        Self::from_state(GameState::default(), timings)
    }

    /// Resume a saved game
    ///
    /// A row saved while its reveal was still running is rolled back to its
    /// typed letters, ready to be submitted again.
    #[must_use]
    pub fn from_state(mut state: GameState, timings: RevealTimings) -> Self {
        if state.rollback_interrupted_reveal() {
            debug!(row = state.current_row, "rolled back interrupted reveal");
        }
        Self {
            state,
            timings,
            reveal: None,
            shake: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn timings(&self) -> RevealTimings {
        self.timings
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.game_over
    }

    /// The row is current, the game is live and no reveal is in flight
    #[must_use]
    pub fn is_editable(&self, row: usize) -> bool {
        self.state.is_editable(row) && self.reveal.is_none()
    }

    #[must_use]
    pub const fn is_revealing(&self) -> bool {
        self.reveal.is_some()
    }

    /// Row whose reveal is in flight
    #[must_use]
    pub fn revealing_row(&self) -> Option<usize> {
        self.reveal.as_ref().map(RevealSequence::row)
    }

    /// Row currently shaking after a rejected word
    #[must_use]
    pub fn shaking_row(&self, now: Instant) -> Option<usize> {
        self.shake.filter(|s| now < s.until).map(|s| s.row)
    }

    #[must_use]
    pub fn keyboard(&self) -> KeyboardStates {
        KeyboardStates::from_guesses(&self.state.guesses)
    }

    /// Earliest instant at which [`tick`](Self::tick) has something to do
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        let reveal = self.reveal.as_ref().and_then(RevealSequence::next_deadline);
        let shake = self.shake.map(|s| s.until);
        match (reveal, shake) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Type a letter into the next empty cell of the current row
    pub fn insert(&mut self, ch: char) -> bool {
        let row = self.state.current_row;
        if !ch.is_ascii_alphabetic() || !self.is_editable(row) {
            return false;
        }
        self.state.guesses[row].push(ch)
    }

    /// Clear the last filled cell of the current row
    pub fn delete(&mut self) -> bool {
        let row = self.state.current_row;
        if !self.is_editable(row) {
            return false;
        }
        self.state.guesses[row].pop()
    }

    /// Submit the current row to the oracle
    ///
    /// # Errors
    /// Propagates `OracleError`; the row is left exactly as it was.
    pub fn submit<O: WordOracle + ?Sized>(
        &mut self,
        oracle: &O,
        now: Instant,
    ) -> Result<SubmitOutcome, OracleError> {
        let row = self.state.current_row;
        if !self.is_editable(row) || !self.state.guesses[row].is_complete() {
            return Ok(SubmitOutcome::Ignored);
        }
        let Ok(word) = Word::new(self.state.guesses[row].text()) else {
            return Ok(SubmitOutcome::Ignored);
        };

        let result = oracle.classify(&word)?;
        let guess = &mut self.state.guesses[row];

        if !result.is_valid {
            guess.is_valid = false;
            guess.is_solution = false;
            self.shake = Some(Shake {
                row,
                until: now + self.timings.shake,
            });
            debug!(row, %word, "guess rejected");
            return Ok(SubmitOutcome::Rejected);
        }

        guess.is_valid = true;
        guess.is_solution = result.is_solution;
        self.shake = None;
        self.reveal = Some(RevealSequence::start(
            row,
            *result.letter_states(),
            now,
            self.timings,
        ));
        debug!(row, %word, feedback = %result.feedback().to_emoji(), "guess accepted");
        Ok(SubmitOutcome::Accepted)
    }

    /// Apply every scheduled step due at `now`
    pub fn tick(&mut self, now: Instant) -> Vec<GameEvent> {
        if self.shake.is_some_and(|s| now >= s.until) {
            self.shake = None;
        }

        let Some(reveal) = self.reveal.as_mut() else {
            return Vec::new();
        };
        let row = reveal.row();
        let steps = reveal.poll(now);

        let mut events = Vec::with_capacity(steps.len());
        for step in steps {
            match step {
                RevealStep::Letter { index, state } => {
                    self.state.guesses[row].letters[index].state = state;
                    events.push(GameEvent::LetterRevealed { row, index, state });
                }
                RevealStep::Complete => {
                    self.reveal = None;
                    events.push(self.settle(row));
                }
            }
        }
        events
    }

    /// Drop any reveal in flight; nothing further is applied to the grid
    pub fn cancel_reveal(&mut self) {
        if let Some(mut reveal) = self.reveal.take() {
            reveal.cancel();
            debug!(row = reveal.row(), delivered = reveal.delivered(), "reveal cancelled");
        }
    }

    fn settle(&mut self, row: usize) -> GameEvent {
        if self.state.guesses[row].is_solution {
            self.state.game_over = true;
            self.state.is_win = true;
            info!(guesses = row + 1, "puzzle solved");
            GameEvent::Finished(Outcome::Win)
        } else if row == GUESS_LIMIT - 1 {
            self.state.game_over = true;
            self.state.is_win = false;
            info!("out of guesses");
            GameEvent::Finished(Outcome::Loss)
        } else {
            self.state.current_row = row + 1;
            GameEvent::RowAdvanced { row: row + 1 }
        }
    }
}
