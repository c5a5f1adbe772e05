//! Formatting utilities for terminal output

use crate::core::{DayKey, GUESS_LIMIT};
use crate::game::{GameState, Guess};

/// Format a revealed row as emoji squares
#[must_use]
pub fn guess_to_emoji(guess: &Guess) -> String {
    guess.letters.iter().map(|l| l.state.emoji()).collect()
}

/// Spoiler-free summary of a finished game, one emoji row per guess
///
/// Returns `None` while the game is still in progress.
#[must_use]
pub fn share_text(day: DayKey, state: &GameState) -> Option<String> {
    if !state.game_over {
        return None;
    }
    let score = if state.is_win {
        (state.current_row + 1).to_string()
    } else {
        "X".to_string()
    };

    let mut text = format!("Wordle {day} {score}/{GUESS_LIMIT}\n");
    for guess in state.submitted() {
        text.push('\n');
        text.push_str(&guess_to_emoji(guess));
    }
    Some(text)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value as usize * width / max as usize).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
