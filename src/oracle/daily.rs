//! Daily solution selection

use super::OracleError;
use crate::core::{DayKey, Word};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Pick the solution for a day
///
/// Selection is seeded by the day alone, so every player asking for the same
/// day gets the same word.
///
/// # Errors
/// Returns `OracleError::EmptyAnswerList` if `answers` is empty.
pub fn daily_solution(day: DayKey, answers: &[Word]) -> Result<Word, OracleError> {
    if answers.is_empty() {
        return Err(OracleError::EmptyAnswerList);
    }
    let seed = u64::from(day.ordinal().unsigned_abs());
    let mut rng = StdRng::seed_from_u64(seed);
    let index = rng.random_range(0..answers.len());
    Ok(answers[index].clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{ANSWERS, loader::words_from_slice};

    fn day(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    #[test]
    fn same_day_same_solution() {
        let answers = words_from_slice(ANSWERS);
        let first = daily_solution(day("2025-07-04"), &answers).unwrap();
        let second = daily_solution(day("2025-07-04"), &answers).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn solution_comes_from_answer_list() {
        let answers = words_from_slice(&["crane", "slate"]);
        let solution = daily_solution(day("2025-07-04"), &answers).unwrap();
        assert!(answers.contains(&solution));
    }

    #[test]
    fn solutions_vary_across_days() {
        let answers = words_from_slice(ANSWERS);
        let mut seen = rustc_hash::FxHashSet::default();
        let mut current = day("2025-01-31");
        for _ in 0..30 {
            seen.insert(daily_solution(current, &answers).unwrap());
            current = current.previous();
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn empty_answers_rejected() {
        assert_eq!(
            daily_solution(day("2025-07-04"), &[]),
            Err(OracleError::EmptyAnswerList)
        );
    }
}
