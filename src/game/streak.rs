//! Consecutive-day win streak

use crate::core::DayKey;
use serde::{Deserialize, Serialize};

/// How a day's game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    #[must_use]
    pub const fn from_win(is_win: bool) -> Self {
        if is_win { Self::Win } else { Self::Loss }
    }
}

/// Persisted streak record
///
/// Missing fields deserialize to their defaults, so an empty object is a
/// fresh record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StreakData {
    pub streak: u32,
    pub highest: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_won: Option<DayKey>,
}

impl StreakData {
    /// Fold a finished game on `today` into the record
    ///
    /// Recording the same outcome for the same day twice leaves the record
    /// unchanged.
    pub fn record(&mut self, outcome: Outcome, today: DayKey) {
        match outcome {
            Outcome::Win => {
                self.streak = match self.last_won {
                    None => 1,
                    Some(last) if last == today => self.streak.max(1),
                    Some(last) if last == today.previous() => self.streak.saturating_add(1),
                    Some(_) => 1,
                };
                self.highest = self.highest.max(self.streak);
                self.last_won = Some(today);
            }
            Outcome::Loss => {
                self.streak = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    fn record(streak: u32, highest: u32, last_won: Option<&str>) -> StreakData {
        StreakData {
            streak,
            highest,
            last_won: last_won.map(day),
        }
    }

    #[test]
    fn first_win_starts_streak() {
        let mut data = StreakData::default();
        data.record(Outcome::Win, day("2025-03-10"));
        assert_eq!(data, record(1, 1, Some("2025-03-10")));
    }

    #[test]
    fn win_after_yesterday_extends_streak() {
        let mut data = record(4, 6, Some("2025-03-09"));
        data.record(Outcome::Win, day("2025-03-10"));
        assert_eq!(data, record(5, 6, Some("2025-03-10")));
    }

    #[test]
    fn extending_past_highest_raises_it() {
        let mut data = record(6, 6, Some("2025-02-28"));
        data.record(Outcome::Win, day("2025-03-01"));
        assert_eq!(data, record(7, 7, Some("2025-03-01")));
    }

    #[test]
    fn win_after_gap_resets_to_one() {
        let mut data = record(4, 6, Some("2025-03-08"));
        data.record(Outcome::Win, day("2025-03-10"));
        assert_eq!(data, record(1, 6, Some("2025-03-10")));
    }

    #[test]
    fn loss_resets_streak_keeps_highest_and_last_won() {
        let mut data = record(4, 6, Some("2025-03-09"));
        data.record(Outcome::Loss, day("2025-03-10"));
        assert_eq!(data, record(0, 6, Some("2025-03-09")));
    }

    #[test]
    fn repeated_win_same_day_is_idempotent() {
        let mut data = record(2, 3, Some("2025-03-09"));
        data.record(Outcome::Win, day("2025-03-10"));
        let once = data;
        data.record(Outcome::Win, day("2025-03-10"));
        assert_eq!(data, once);
        assert_eq!(data.streak, 3);
        assert_eq!(data.highest, 3);
    }

    #[test]
    fn same_day_win_with_zero_streak_counts_as_one() {
        let mut data = record(0, 2, Some("2025-03-10"));
        data.record(Outcome::Win, day("2025-03-10"));
        assert_eq!(data, record(1, 2, Some("2025-03-10")));
    }

    #[test]
    fn repeated_loss_is_idempotent() {
        let mut data = record(3, 3, Some("2025-03-09"));
        data.record(Outcome::Loss, day("2025-03-10"));
        data.record(Outcome::Loss, day("2025-03-10"));
        assert_eq!(data, record(0, 3, Some("2025-03-09")));
    }

    #[test]
    fn extending_saturates_at_max() {
        let mut data = record(u32::MAX, u32::MAX, Some("2025-03-09"));
        data.record(Outcome::Win, day("2025-03-10"));
        assert_eq!(data, record(u32::MAX, u32::MAX, Some("2025-03-10")));
    }

    #[test]
    fn empty_record_deserializes_to_default() {
        let data: StreakData = serde_json::from_str("{}").unwrap();
        assert_eq!(data, StreakData::default());
    }

    #[test]
    fn record_shape() {
        let json = serde_json::to_value(record(2, 5, Some("2025-03-10"))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"streak": 2, "highest": 5, "lastWon": "2025-03-10"})
        );
    }
}
