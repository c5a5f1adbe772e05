//! Command implementations

pub mod show;
pub mod simple;
pub mod stats;

pub use show::run_show;
pub use simple::run_simple;
pub use stats::run_stats;
