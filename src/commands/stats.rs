//! Print the streak record

use crate::output::print_streak;
use crate::storage::{KeyValueStore, Persistence};

pub fn run_stats<S: KeyValueStore>(persistence: &Persistence<S>) {
    print_streak(&persistence.load_streak());
}
