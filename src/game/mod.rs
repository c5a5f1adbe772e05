//! Daily game rules
//!
//! Grid state and its transitions, the reveal schedule, keyboard aggregation,
//! key input and the win streak.

pub mod input;
pub mod keyboard;
mod machine;
pub mod reveal;
mod state;
pub mod streak;

pub use input::KeyInput;
pub use keyboard::{KEYBOARD_ROWS, KeyboardStates};
pub use machine::{GameEvent, GameMachine, SubmitOutcome};
pub use reveal::{RevealSequence, RevealStep, RevealTimings};
pub use state::{GameState, Guess, Letter};
pub use streak::{Outcome, StreakData};
