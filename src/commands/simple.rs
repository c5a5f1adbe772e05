//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. Each typed word goes through the same key
//! input path as the full-screen interface and is revealed letter by letter.

use crate::clock::Clock;
use crate::core::WORD_LENGTH;
use crate::game::{GameEvent, GameState, KeyInput};
use crate::oracle::WordOracle;
use crate::output::{colored_cell, print_board, print_keyboard, print_summary};
use crate::session::{DailySession, SessionEvent};
use crate::storage::KeyValueStore;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use std::thread;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input or writing output fails. Oracle and
/// storage failures are reported and play continues.
pub fn run_simple<S, O, C>(session: &mut DailySession<S, O, C>) -> Result<()>
where
    S: KeyValueStore,
    O: WordOracle,
    C: Clock,
{
    println!("\n╔══════════════════════════════════════╗");
    println!("║      Wordle {}       ║", session.day());
    println!("╚══════════════════════════════════════╝");
    println!("Guess the five-letter word in six tries. Type 'quit' to leave.");

    loop {
        print_board(session.machine().state());

        if let Some(summary) = session.summary() {
            print_summary(session.day(), session.machine().state(), &summary);
            return Ok(());
        }
        print_keyboard(&session.machine().keyboard());

        let row = session.machine().state().current_row;
        let Some(input) = get_user_input(&format!("Guess {}/6", row + 1))? else {
            println!();
            return Ok(());
        };
        let word = input.to_lowercase();

        match word.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Progress saved. See you tomorrow!\n");
                return Ok(());
            }
            _ if word.len() != WORD_LENGTH || !word.chars().all(|c| c.is_ascii_alphabetic()) => {
                println!("{}", "Enter a five-letter word.".red());
                continue;
            }
            _ => {}
        }

        // Replace whatever the row holds with the new word
        let keys = std::iter::repeat_n(KeyInput::Backspace, WORD_LENGTH)
            .chain(KeyInput::typed(&word, true));
        let mut revealing = false;
        for key in keys {
            match session.handle_key(key) {
                Ok(events) => revealing |= show_events(session.machine().state(), &events)?,
                Err(e) => {
                    println!("{} {e}", "Error:".red().bold());
                    break;
                }
            }
        }

        while revealing {
            let Some(wait) = session.time_to_wakeup() else {
                break;
            };
            thread::sleep(wait);
            match session.tick() {
                Ok(events) => {
                    show_events(session.machine().state(), &events)?;
                    revealing = session.machine().is_revealing();
                }
                Err(e) => {
                    println!("\n{} {e}", "Error:".red().bold());
                    revealing = false;
                }
            }
        }
    }
}

/// Print reveal progress; returns true if a reveal started
fn show_events(state: &GameState, events: &[SessionEvent]) -> Result<bool> {
    let mut started = false;
    let mut stdout = io::stdout();
    for event in events {
        match event {
            SessionEvent::Rejected { .. } => {
                println!("{}", "Not in word list.".red());
            }
            SessionEvent::RevealStarted { .. } => {
                started = true;
                print!("  ");
            }
            SessionEvent::Game(GameEvent::LetterRevealed {
                row,
                index,
                state: letter_state,
            }) => {
                let ch = state.guesses[*row].letters[*index].ch.unwrap_or('?');
                print!("{} ", colored_cell(ch, *letter_state));
            }
            SessionEvent::Game(GameEvent::RowAdvanced { .. } | GameEvent::Finished(_)) => {
                println!();
            }
            SessionEvent::Edited => {}
        }
    }
    stdout.flush()?;
    Ok(started)
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
