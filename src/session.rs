//! One player's session on one day
//!
//! Loads the day before anything can be saved, routes key input into the game
//! machine, saves after every mutation and folds the result into the streak
//! when the game finishes. Reopening a finished day folds it again, which
//! changes nothing unless the earlier streak write was lost.

use crate::clock::Clock;
use crate::core::DayKey;
use crate::game::{
    GameEvent, GameMachine, KeyInput, Outcome, RevealTimings, StreakData, SubmitOutcome,
};
use crate::oracle::{OracleError, WordOracle};
use crate::storage::{DayLoad, DayToken, KeyValueStore, Persistence, StorageError};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("Failed to save progress: {0}")]
    Storage(#[from] StorageError),
}

/// What a key press or tick changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A letter was typed or erased in the current row
    Edited,
    /// The submitted word is not in the dictionary
    Rejected { row: usize },
    /// The submitted word was accepted and its reveal began
    RevealStarted { row: usize },
    Game(GameEvent),
}

/// Data for the end-of-game dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndSummary {
    pub outcome: Outcome,
    /// The solved word, only present on a win
    pub solution: Option<String>,
    pub guesses: usize,
    pub streak: u32,
    pub highest: u32,
}

pub struct DailySession<S, O, C> {
    day: DayKey,
    token: DayToken,
    persistence: Persistence<S>,
    oracle: O,
    clock: C,
    machine: GameMachine,
    streak: StreakData,
}

impl<S: KeyValueStore, O: WordOracle, C: Clock> DailySession<S, O, C> {
    /// Load `day` and resume it, or start fresh if nothing usable is saved
    pub fn open(
        day: DayKey,
        persistence: Persistence<S>,
        oracle: O,
        clock: C,
        timings: RevealTimings,
    ) -> Self {
        let DayLoad {
            token,
            game,
            streak,
        } = persistence.load_day(day);

        let machine = match game {
            Some(state) => GameMachine::from_state(state, timings),
            None => GameMachine::new(timings),
        };
        let finished = machine.state().game_over;
        info!(
            %day,
            row = machine.state().current_row,
            finished,
            "session opened"
        );

        let mut session = Self {
            day,
            token,
            persistence,
            oracle,
            clock,
            machine,
            streak,
        };

        // Fold a finished day again in case its streak write was lost
        if finished {
            let outcome = Outcome::from_win(session.machine.state().is_win);
            if let Err(e) = session.record_streak(outcome) {
                warn!(error = %e, "streak still not saved");
            }
        }
        session
    }

    #[must_use]
    pub const fn day(&self) -> DayKey {
        self.day
    }

    #[must_use]
    pub const fn machine(&self) -> &GameMachine {
        &self.machine
    }

    #[must_use]
    pub const fn streak(&self) -> &StreakData {
        &self.streak
    }

    /// Row currently shaking after a rejected word
    #[must_use]
    pub fn shaking_row(&self) -> Option<usize> {
        self.machine.shaking_row(self.clock.now())
    }

    /// Instant at which [`tick`](Self::tick) next has work to do
    #[must_use]
    pub fn next_wakeup(&self) -> Option<Instant> {
        self.machine.next_deadline()
    }

    /// Time left until [`next_wakeup`](Self::next_wakeup)
    #[must_use]
    pub fn time_to_wakeup(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.next_wakeup()
            .map(|at| at.saturating_duration_since(now))
    }

    /// Apply one key press
    ///
    /// # Errors
    /// `SessionError::Oracle` if the oracle could not classify a submitted
    /// word (the row is left as typed), `SessionError::Storage` if the new
    /// state could not be saved (the in-memory game is still updated).
    pub fn handle_key(&mut self, key: KeyInput) -> Result<Vec<SessionEvent>, SessionError> {
        let mut events = Vec::new();
        match key {
            KeyInput::Letter(ch) => {
                if self.machine.insert(ch) {
                    events.push(SessionEvent::Edited);
                    self.save_game()?;
                }
            }
            KeyInput::Backspace => {
                if self.machine.delete() {
                    events.push(SessionEvent::Edited);
                    self.save_game()?;
                }
            }
            KeyInput::Enter => {
                let row = self.machine.state().current_row;
                match self.machine.submit(&self.oracle, self.clock.now())? {
                    SubmitOutcome::Ignored => {}
                    SubmitOutcome::Rejected => {
                        events.push(SessionEvent::Rejected { row });
                        self.save_game()?;
                    }
                    SubmitOutcome::Accepted => {
                        events.push(SessionEvent::RevealStarted { row });
                        self.save_game()?;
                        // The first letter is due immediately
                        events.extend(self.tick()?);
                    }
                }
            }
        }
        Ok(events)
    }

    /// Advance reveal and shake timers to the clock's current instant
    ///
    /// # Errors
    /// `SessionError::Storage` if the updated game or streak could not be
    /// saved.
    pub fn tick(&mut self) -> Result<Vec<SessionEvent>, SessionError> {
        let events = self.machine.tick(self.clock.now());
        if events.is_empty() {
            return Ok(Vec::new());
        }

        self.save_game()?;
        let finished = events.iter().find_map(|e| match e {
            GameEvent::Finished(outcome) => Some(*outcome),
            _ => None,
        });
        if let Some(outcome) = finished {
            self.record_streak(outcome)?;
        }

        Ok(events.into_iter().map(SessionEvent::Game).collect())
    }

    /// End-of-game data, once the game has finished
    #[must_use]
    pub fn summary(&self) -> Option<EndSummary> {
        let state = self.machine.state();
        if !state.game_over {
            return None;
        }
        Some(EndSummary {
            outcome: Outcome::from_win(state.is_win),
            solution: state.is_win.then(|| state.current_guess().text()),
            guesses: state.current_row + 1,
            streak: self.streak.streak,
            highest: self.streak.highest,
        })
    }

    /// Stop any reveal in flight; the last saved state stands
    pub fn close(&mut self) {
        self.machine.cancel_reveal();
    }

    /// Close the session and hand back its storage
    pub fn into_persistence(mut self) -> Persistence<S> {
        self.close();
        self.persistence
    }

    /// Fold the day's outcome into the streak and save it if it changed
    ///
    /// Folding is idempotent for the same day, so this runs on every finish
    /// and on every reopen of a finished day. A record that already counts a
    /// later win is left alone. The in-memory streak only changes once the
    /// new record is stored.
    fn record_streak(&mut self, outcome: Outcome) -> Result<(), SessionError> {
        if self.streak.last_won.is_some_and(|won| won > self.day) {
            return Ok(());
        }
        let mut updated = self.streak;
        updated.record(outcome, self.day);
        if updated == self.streak {
            return Ok(());
        }

        self.persistence
            .save_streak(&self.token, &updated)
            .inspect_err(|e| warn!(error = %e, "failed to save streak"))?;
        self.streak = updated;
        info!(
            ?outcome,
            streak = self.streak.streak,
            highest = self.streak.highest,
            "streak updated"
        );
        Ok(())
    }

    fn save_game(&mut self) -> Result<(), SessionError> {
        self.persistence
            .save_game(&self.token, self.machine.state())
            .inspect_err(|e| warn!(day = %self.day, error = %e, "failed to save game"))?;
        Ok(())
    }
}
