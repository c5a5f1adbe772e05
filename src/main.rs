//! Wordle Daily - CLI
//!
//! One puzzle per day, with saved progress and a win streak.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use wordle_daily::{
    clock::SystemClock,
    commands::{run_show, run_simple, run_stats},
    config::Config,
    core::{DayKey, DaySource, FixedDay, SystemDay, Word},
    game::RevealTimings,
    interactive::{App, run_tui},
    logging,
    oracle::DictionaryOracle,
    session::DailySession,
    storage::{FileStore, KeyValueStore, MemoryStore, Persistence},
    wordlists::{
        ALLOWED, ANSWERS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Daily five-letter word puzzle with saved progress and streaks",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle day (YYYY-MM-DD); defaults to today's UTC date
    #[arg(short, long, global = true, env = "WORDLE_DAY")]
    date: Option<DayKey>,

    /// Directory for saved games and streaks
    #[arg(long, global = true, env = "WORDLE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Custom list of accepted guesses, one word per line
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Keep progress in memory only
    #[arg(long, global = true)]
    ephemeral: bool,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based mode without the TUI
    Simple,

    /// Show the saved board for the day
    Show,

    /// Show the win streak
    Stats,
}

/// Everything a command needs once startup has resolved the day
struct Daily {
    day: DayKey,
    allowed: Vec<Word>,
    answers: Vec<Word>,
    timings: RevealTimings,
}

/// Accepted guesses: the configured list if any, else the embedded one
fn load_allowed(path: Option<&Path>) -> Result<Vec<Word>> {
    match path {
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to load wordlist {}", path.display()))?;
            info!(path = %path.display(), count = words.len(), "loaded custom wordlist");
            Ok(words)
        }
        None => Ok(words_from_slice(ALLOWED)),
    }
}

fn resolve_day(date: Option<DayKey>) -> Result<DayKey> {
    let source: Box<dyn DaySource> = match date {
        Some(day) => Box::new(FixedDay(day)),
        None => Box::new(SystemDay),
    };
    let day = source.today()?;
    if source.is_client_derived() {
        warn!(%day, "day key derived from the local clock; pass --date to pin it");
    }
    Ok(day)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_result = Config::load(cli.config.as_deref());
    let mut config = match &config_result {
        Ok(config) => config.clone(),
        Err(_) => Config::default(),
    };
    if cli.data_dir.is_some() {
        config.data_dir.clone_from(&cli.data_dir);
    }
    if cli.wordlist.is_some() {
        config.wordlist.clone_from(&cli.wordlist);
    }

    logging::init(config.log_path().as_deref());
    if let Err(e) = &config_result {
        warn!(error = %e, "ignoring config file");
        eprintln!("Warning: {e}");
    }

    let daily = Daily {
        day: resolve_day(cli.date)?,
        allowed: load_allowed(config.wordlist.as_deref())?,
        answers: words_from_slice(ANSWERS),
        timings: config.reveal,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    if cli.ephemeral {
        run(command, Persistence::new(MemoryStore::new()), &daily)
    } else {
        let dir = config
            .data_dir()
            .context("No data directory available; pass --data-dir or --ephemeral")?;
        run(command, Persistence::new(FileStore::new(dir)), &daily)
    }
}

fn run<S: KeyValueStore>(
    command: Commands,
    persistence: Persistence<S>,
    daily: &Daily,
) -> Result<()> {
    match command {
        Commands::Play => {
            let session = open_session(persistence, daily)?;
            run_tui(App::new(session))
        }
        Commands::Simple => {
            let mut session = open_session(persistence, daily)?;
            let result = run_simple(&mut session);
            session.close();
            result
        }
        Commands::Show => {
            run_show(&persistence, daily.day);
            Ok(())
        }
        Commands::Stats => {
            run_stats(&persistence);
            Ok(())
        }
    }
}

fn open_session<S: KeyValueStore>(
    persistence: Persistence<S>,
    daily: &Daily,
) -> Result<DailySession<S, DictionaryOracle, SystemClock>> {
    let oracle = DictionaryOracle::for_day(daily.day, &daily.allowed, &daily.answers)?;
    Ok(DailySession::open(
        daily.day,
        persistence,
        oracle,
        SystemClock,
        daily.timings,
    ))
}
