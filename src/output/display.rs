//! Display functions for line-mode output

use super::formatters::{create_progress_bar, share_text};
use crate::core::{DayKey, LetterState};
use crate::game::{GameState, Guess, KEYBOARD_ROWS, KeyboardStates, Letter, Outcome, StreakData};
use crate::session::EndSummary;
use colored::{ColoredString, Colorize};

/// A single coloured cell, e.g. ` S ` on green
#[must_use]
pub fn colored_cell(ch: char, state: LetterState) -> ColoredString {
    let text = format!(" {ch} ");
    match state {
        LetterState::Correct => text.black().on_green().bold(),
        LetterState::Present => text.black().on_yellow().bold(),
        LetterState::Absent => text.white().on_bright_black().bold(),
        LetterState::Default => text.bold(),
    }
}

fn colored_letter(letter: &Letter) -> ColoredString {
    colored_cell(letter.ch.unwrap_or('·'), letter.state)
}

/// Print one grid row on its own line
pub fn print_guess(guess: &Guess) {
    let cells: Vec<String> = guess.letters.iter().map(|l| colored_letter(l).to_string()).collect();
    println!("  {}", cells.join(" "));
}

/// Print the full six-row grid
pub fn print_board(state: &GameState) {
    println!();
    for guess in &state.guesses {
        print_guess(guess);
    }
    println!();
}

/// Print the on-screen keyboard coloured by best-known letter state
pub fn print_keyboard(keys: &KeyboardStates) {
    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .filter_map(|name| {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Some(colored_cell(ch, keys.get(ch)).to_string()),
                    _ => None,
                }
            })
            .collect();
        println!("{}{}", "  ".repeat(i + 1), cells.join(""));
    }
    println!();
}

/// Print the streak record
pub fn print_streak(streak: &StreakData) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!(
        "\n   Current streak:  {}",
        streak.streak.to_string().bright_yellow().bold()
    );
    println!(
        "   Best streak:     {}",
        streak.highest.to_string().green().bold()
    );
    println!(
        "   {}",
        create_progress_bar(streak.streak, streak.highest, 30).green()
    );
    match streak.last_won {
        Some(day) => println!("   Last win:        {day}"),
        None => println!("   Last win:        {}", "never".bright_black()),
    }
    println!();
}

/// Print the end-of-game summary and the shareable grid
pub fn print_summary(day: DayKey, state: &GameState, summary: &EndSummary) {
    println!("{}", "─".repeat(40).cyan());
    match (summary.outcome, &summary.solution) {
        (Outcome::Win, Some(word)) => println!(
            "{} {} in {}/6",
            "Solved!".green().bold(),
            word.bright_yellow().bold(),
            summary.guesses
        ),
        _ => println!("{}", "Out of guesses. Better luck tomorrow!".red().bold()),
    }
    println!(
        "Streak: {}  Best: {}",
        summary.streak.to_string().bright_yellow(),
        summary.highest.to_string().green()
    );
    if let Some(text) = share_text(day, state) {
        println!("\n{text}");
    }
    println!("{}", "─".repeat(40).cyan());
}
