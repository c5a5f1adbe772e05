//! Log setup
//!
//! The terminal belongs to the game, so logs go to a file. Level comes from
//! `RUST_LOG`, defaulting to `info`.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber writing to `path`
///
/// Returns false, leaving logging disabled, if there is no path or the file
/// cannot be opened.
pub fn init(path: Option<&Path>) -> bool {
    let Some(path) = path else {
        return false;
    };
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if parent.is_some_and(|p| fs::create_dir_all(p).is_err()) {
        return false;
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return false;
    };

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_disables_logging() {
        assert!(!init(None));
    }

    #[test]
    fn unopenable_path_disables_logging() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending
        assert!(!init(Some(dir.path())));
    }
}
