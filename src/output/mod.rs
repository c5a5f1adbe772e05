//! Terminal output formatting
//!
//! Coloured boards, keyboards and statistics for the line-mode commands.

pub mod display;
pub mod formatters;

pub use display::{
    colored_cell, print_board, print_guess, print_keyboard, print_streak, print_summary,
};
pub use formatters::share_text;
