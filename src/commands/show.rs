//! Print a day's saved board without playing

use crate::core::DayKey;
use crate::game::KeyboardStates;
use crate::output::{print_board, print_keyboard, share_text};
use crate::storage::{KeyValueStore, Persistence};
use colored::Colorize;

/// Print the saved board and keyboard for `day`
pub fn run_show<S: KeyValueStore>(persistence: &Persistence<S>, day: DayKey) {
    println!("\nWordle {}", day.to_string().bright_cyan().bold());

    let Some(state) = persistence.load_game(day) else {
        println!("{}", "No game saved for this day.".bright_black());
        return;
    };

    print_board(&state);
    print_keyboard(&KeyboardStates::from_guesses(&state.guesses));

    match share_text(day, &state) {
        Some(text) => println!("{text}\n"),
        None => println!(
            "In progress: guess {}/6\n",
            (state.current_row + 1).to_string().bright_yellow()
        ),
    }
}
