//! Wordle Daily
//!
//! A daily five-letter word puzzle: per-day saved progress, exact Wordle
//! feedback, staggered letter reveals and a consecutive-day win streak.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_daily::core::{Feedback, Word};
//!
//! let guess = Word::new("erase").unwrap();
//! let solution = Word::new("speed").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &solution);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Guess classification and daily solution
pub mod oracle;

// Game rules: grid, reveal, streak
pub mod game;

// Saved games and streaks
pub mod storage;

// Session wiring and time
pub mod clock;
pub mod session;

// Ambient setup
pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
