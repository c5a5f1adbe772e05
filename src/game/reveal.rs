//! Staggered reveal of a submitted row
//!
//! A `RevealSequence` is a pure schedule: it never reads a clock itself.
//! Callers pass the current instant to [`RevealSequence::poll`], which hands
//! back every step that has come due, in order. Dropping or cancelling the
//! sequence means nothing further is ever delivered.

use crate::core::{LetterState, WORD_LENGTH};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Delay between successive letter reveals
pub const LETTER_REVEAL_DELAY: Duration = Duration::from_millis(300);

/// Pause after the last letter before the row is considered settled
pub const SETTLE_BUFFER: Duration = Duration::from_millis(50);

/// How long a rejected row shakes
pub const SHAKE_DURATION: Duration = Duration::from_millis(400);

/// Reveal and rejection timings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealTimings {
    #[serde(rename = "letter_delay_ms", with = "millis")]
    pub letter_delay: Duration,
    #[serde(rename = "settle_ms", with = "millis")]
    pub settle: Duration,
    #[serde(rename = "shake_ms", with = "millis")]
    pub shake: Duration,
}

impl Default for RevealTimings {
    fn default() -> Self {
        Self {
            letter_delay: LETTER_REVEAL_DELAY,
            settle: SETTLE_BUFFER,
            shake: SHAKE_DURATION,
        }
    }
}

impl RevealTimings {
    /// No delays at all; every step is due immediately
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            letter_delay: Duration::ZERO,
            settle: Duration::ZERO,
            shake: Duration::ZERO,
        }
    }

    /// Offset from sequence start at which the row settles
    #[must_use]
    pub fn total(&self) -> Duration {
        self.letter_delay * WORD_LENGTH as u32 + self.settle
    }
}

/// One delivery from a reveal sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    /// Apply `state` to cell `index`
    Letter { index: usize, state: LetterState },
    /// All letters shown and the settle buffer has elapsed
    Complete,
}

/// Schedule of letter deliveries for one submitted row
#[derive(Debug, Clone)]
pub struct RevealSequence {
    row: usize,
    states: [LetterState; WORD_LENGTH],
    started: Instant,
    timings: RevealTimings,
    delivered: usize,
    finished: bool,
}

impl RevealSequence {
    #[must_use]
    pub const fn start(
        row: usize,
        states: [LetterState; WORD_LENGTH],
        started: Instant,
        timings: RevealTimings,
    ) -> Self {
        Self {
            row,
            states,
            started,
            timings,
            delivered: 0,
            finished: false,
        }
    }

    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Number of letters delivered so far
    #[must_use]
    pub const fn delivered(&self) -> usize {
        self.delivered
    }

    #[cfg(test)]
    pub(crate) const fn is_finished(&self) -> bool {
        self.finished
    }

    fn letter_due(&self, index: usize) -> Instant {
        self.started + self.timings.letter_delay * index as u32
    }

    fn completion_due(&self) -> Instant {
        self.started + self.timings.total()
    }

    /// When the next step comes due, or `None` once finished
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.finished {
            None
        } else if self.delivered < WORD_LENGTH {
            Some(self.letter_due(self.delivered))
        } else {
            Some(self.completion_due())
        }
    }

    /// Collect every step due at `now`, in delivery order
    pub fn poll(&mut self, now: Instant) -> Vec<RevealStep> {
        let mut steps = Vec::new();
        if self.finished {
            return steps;
        }

        while self.delivered < WORD_LENGTH && now >= self.letter_due(self.delivered) {
            steps.push(RevealStep::Letter {
                index: self.delivered,
                state: self.states[self.delivered],
            });
            self.delivered += 1;
        }

        if self.delivered == WORD_LENGTH && now >= self.completion_due() {
            self.finished = true;
            steps.push(RevealStep::Complete);
        }

        steps
    }

    /// Stop the sequence; later polls deliver nothing
    pub fn cancel(&mut self) {
        self.finished = true;
    }
}

/// Durations in config files are plain millisecond integers
mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    #[allow(clippy::trivially_copy_pass_by_ref)] // Signature required by serde's `with`
    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState::{Absent, Correct, Present};

    const STATES: [LetterState; WORD_LENGTH] = [Correct, Absent, Present, Absent, Correct];

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn first_letter_due_immediately() {
        let t0 = Instant::now();
        let mut seq = RevealSequence::start(0, STATES, t0, RevealTimings::default());

        assert_eq!(
            seq.poll(t0),
            [RevealStep::Letter {
                index: 0,
                state: Correct
            }]
        );
        assert_eq!(seq.next_deadline(), Some(t0 + ms(300)));
    }

    #[test]
    fn letters_arrive_in_order_on_schedule() {
        let t0 = Instant::now();
        let mut seq = RevealSequence::start(2, STATES, t0, RevealTimings::default());

        seq.poll(t0);
        assert!(seq.poll(t0 + ms(299)).is_empty());
        assert_eq!(seq.poll(t0 + ms(300)).len(), 1);

        // A late poll delivers everything outstanding, in index order
        let steps = seq.poll(t0 + ms(1200));
        let indices: Vec<usize> = steps
            .iter()
            .filter_map(|s| match s {
                RevealStep::Letter { index, .. } => Some(*index),
                RevealStep::Complete => None,
            })
            .collect();
        assert_eq!(indices, [2, 3, 4]);
        assert!(!seq.is_finished());
    }

    #[test]
    fn completes_after_settle_buffer() {
        let t0 = Instant::now();
        let mut seq = RevealSequence::start(0, STATES, t0, RevealTimings::default());

        assert_eq!(seq.poll(t0 + ms(1200)).len(), 5);
        assert_eq!(seq.next_deadline(), Some(t0 + ms(1550)));
        assert!(seq.poll(t0 + ms(1549)).is_empty());
        assert_eq!(seq.poll(t0 + ms(1550)), [RevealStep::Complete]);
        assert!(seq.is_finished());
        assert_eq!(seq.next_deadline(), None);
        assert!(seq.poll(t0 + ms(5000)).is_empty());
    }

    #[test]
    fn cancelled_sequence_delivers_nothing() {
        let t0 = Instant::now();
        let mut seq = RevealSequence::start(0, STATES, t0, RevealTimings::default());
        seq.poll(t0);
        seq.cancel();

        assert!(seq.poll(t0 + ms(10_000)).is_empty());
        assert_eq!(seq.delivered(), 1);
        assert_eq!(seq.next_deadline(), None);
    }

    #[test]
    fn instant_timings_deliver_everything_at_once() {
        let t0 = Instant::now();
        let mut seq = RevealSequence::start(0, STATES, t0, RevealTimings::instant());
        let steps = seq.poll(t0);
        assert_eq!(steps.len(), WORD_LENGTH + 1);
        assert_eq!(steps.last(), Some(&RevealStep::Complete));
    }

    #[test]
    fn timings_parse_from_millis() {
        let timings: RevealTimings = toml::from_str("letter_delay_ms = 100\nshake_ms = 250").unwrap();
        assert_eq!(timings.letter_delay, ms(100));
        assert_eq!(timings.settle, SETTLE_BUFFER);
        assert_eq!(timings.shake, ms(250));
        assert_eq!(timings.total(), ms(550));
    }
}
