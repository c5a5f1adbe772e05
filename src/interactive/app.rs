//! TUI application state and logic

use crate::clock::Clock;
use crate::game::{GameEvent, KeyInput, Outcome};
use crate::oracle::WordOracle;
use crate::session::{DailySession, SessionError, SessionEvent};
use crate::storage::KeyValueStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::Duration;
use tracing::error;

use super::rendering::key_at;

/// Poll interval while nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Application state
pub struct App<S, O, C> {
    pub session: DailySession<S, O, C>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: KeyValueStore, O: WordOracle, C: Clock> App<S, O, C> {
    #[must_use]
    pub fn new(session: DailySession<S, O, C>) -> Self {
        let mut app = Self {
            session,
            messages: Vec::new(),
            should_quit: false,
        };
        if app.session.summary().is_some() {
            app.add_message(
                "You've already played today. Come back tomorrow!",
                MessageStyle::Info,
            );
        } else {
            app.add_message("Guess the five-letter word in six tries.", MessageStyle::Info);
        }
        app
    }

    pub fn handle_key(&mut self, key: KeyInput) {
        let result = self.session.handle_key(key);
        self.apply(result);
    }

    /// Press the on-screen key drawn at `column`, `row` in a frame of size `area`
    pub fn handle_click(&mut self, area: Rect, column: u16, row: u16) {
        if let Some(input) = key_at(area, column, row).and_then(KeyInput::from_key_name) {
            self.handle_key(input);
        }
    }

    /// Advance timers; called on every loop iteration
    pub fn tick(&mut self) {
        let result = self.session.tick();
        self.apply(result);
    }

    fn apply(&mut self, result: Result<Vec<SessionEvent>, SessionError>) {
        match result {
            Ok(events) => {
                for event in events {
                    self.on_event(event);
                }
            }
            Err(e) => {
                error!(error = %e, "session error");
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    fn on_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Rejected { .. } => {
                self.add_message("Not in word list", MessageStyle::Error);
            }
            SessionEvent::Game(GameEvent::Finished(Outcome::Win)) => {
                let guesses = self.session.machine().state().current_row + 1;
                let celebration = match guesses {
                    1 => "Genius!",
                    2 => "Magnificent!",
                    3 => "Impressive!",
                    4 => "Splendid!",
                    5 => "Great!",
                    _ => "Phew!",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            SessionEvent::Game(GameEvent::Finished(Outcome::Loss)) => {
                self.add_message("Out of guesses. Better luck tomorrow!", MessageStyle::Error);
            }
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Map a terminal key press onto game input
#[must_use]
pub fn key_input(key: &KeyEvent) -> Option<KeyInput> {
    match key.code {
        KeyCode::Char(c) => KeyInput::from_char(c),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Enter => Some(KeyInput::Enter),
        _ => None,
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore, O: WordOracle, C: Clock>(app: App<S, O, C>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, S, O, C>(terminal: &mut Terminal<B>, mut app: App<S, O, C>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: KeyValueStore,
    O: WordOracle,
    C: Clock,
{
    loop {
        let area = terminal.draw(|f| super::rendering::ui(f, &app))?.area;

        let timeout = app.session.time_to_wakeup().unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if is_quit(&key) {
                        app.should_quit = true;
                    } else if app.session.summary().is_some() && key.code == KeyCode::Char('q') {
                        app.should_quit = true;
                    } else if let Some(input) = key_input(&key) {
                        app.handle_key(input);
                    }
                }
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => app.handle_click(area, column, row),
                _ => {}
            }
        }

        app.tick();

        if app.should_quit {
            break;
        }
    }

    // Leave the last saved state as it is
    app.session.close();
    Ok(())
}
