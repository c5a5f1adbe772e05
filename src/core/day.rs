//! Calendar day that scopes one daily puzzle
//!
//! The day key is expected to come from an authority the player does not
//! control (the host serving the game). A local-clock source exists as a
//! fallback and is reported as client-derived when used.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while obtaining or parsing a day key
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DayError {
    #[error("Invalid day '{0}', expected YYYY-MM-DD")]
    Invalid(String),
}

/// A calendar date in `YYYY-MM-DD` form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(NaiveDate);

impl DayKey {
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// The calendar day before this one
    ///
    /// Saturates at the earliest representable date.
    #[must_use]
    pub fn previous(self) -> Self {
        Self(self.0.pred_opt().unwrap_or(self.0))
    }

    /// Number of days since the start of the common era, used to seed
    /// solution selection
    #[must_use]
    pub fn ordinal(self) -> i32 {
        self.0.num_days_from_ce()
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DayKey {
    type Err = DayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| DayError::Invalid(s.to_string()))
    }
}

/// Source of today's day key
pub trait DaySource {
    /// Today's day key
    ///
    /// # Errors
    /// Returns `DayError` if the source cannot provide a date.
    fn today(&self) -> Result<DayKey, DayError>;

    /// Whether the date is derived from the local machine's clock
    fn is_client_derived(&self) -> bool {
        false
    }
}

/// A day supplied by the host (command line flag or environment)
#[derive(Debug, Clone, Copy)]
pub struct FixedDay(pub DayKey);

impl DaySource for FixedDay {
    fn today(&self) -> Result<DayKey, DayError> {
        Ok(self.0)
    }
}

/// Today's UTC date from the local system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDay;

impl DaySource for SystemDay {
    fn today(&self) -> Result<DayKey, DayError> {
        Ok(DayKey(Utc::now().date_naive()))
    }

    fn is_client_derived(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    #[test]
    fn parse_and_display_round_trip() {
        let key = day("2024-03-09");
        assert_eq!(key.to_string(), "2024-03-09");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!("2024-13-01".parse::<DayKey>(), Err(DayError::Invalid(_))));
        assert!("yesterday".parse::<DayKey>().is_err());
        assert!("".parse::<DayKey>().is_err());
    }

    #[test]
    fn previous_crosses_month_and_leap_day() {
        assert_eq!(day("2024-03-01").previous(), day("2024-02-29"));
        assert_eq!(day("2023-03-01").previous(), day("2023-02-28"));
        assert_eq!(day("2024-01-01").previous(), day("2023-12-31"));
    }

    #[test]
    fn ordinal_increases_by_one_per_day() {
        let today = day("2025-06-15");
        assert_eq!(today.ordinal() - today.previous().ordinal(), 1);
    }

    #[test]
    fn serializes_as_plain_date_string() {
        let key = day("2025-01-31");
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"2025-01-31\"");
        assert_eq!(serde_json::from_str::<DayKey>("\"2025-01-31\"").unwrap(), key);
    }

    #[test]
    fn fixed_day_is_authoritative() {
        let source = FixedDay(day("2025-02-02"));
        assert_eq!(source.today().unwrap(), day("2025-02-02"));
        assert!(!source.is_client_derived());
        assert!(SystemDay.is_client_derived());
    }
}
