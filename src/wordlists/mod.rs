//! Word lists for the daily game
//!
//! The answer list supplies daily solutions; the allowed list is the
//! dictionary a guess must belong to. Both are compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
