//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard, messages and the end-of-game dialog.

use super::app::{App, MessageStyle};
use crate::clock::Clock;
use crate::core::LetterState;
use crate::game::{Guess, KEYBOARD_ROWS, KeyboardStates, Outcome};
use crate::oracle::WordOracle;
use crate::session::EndSummary;
use crate::storage::KeyValueStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};
use std::rc::Rc;

/// Header, board + messages, keyboard and status bar
fn screen_chunks(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Board + messages
            Constraint::Length(5),  // Keyboard
            Constraint::Length(1),  // Status bar
        ])
        .split(area)
}

fn keyboard_block() -> Block<'static> {
    Block::default().borders(Borders::ALL)
}

/// Text drawn for an on-screen key
fn key_label(name: &str) -> String {
    match name {
        "Enter" => " ENTER ".to_string(),
        "Backspace" => " ⌫ ".to_string(),
        _ => format!(" {name} "),
    }
}

/// On-screen key under a terminal cell, for a frame of size `area`
///
/// Mirrors the layout of `render_keyboard`: each row is centred and every
/// key is followed by a one-column gap.
#[must_use]
pub fn key_at(area: Rect, column: u16, row: u16) -> Option<&'static str> {
    let inner = keyboard_block().inner(screen_chunks(area)[2]);
    if row >= inner.bottom() || column < inner.x || column >= inner.right() {
        return None;
    }
    let keys = KEYBOARD_ROWS.get(usize::from(row.checked_sub(inner.y)?))?;

    let widths: Vec<u16> = keys
        .iter()
        .map(|name| u16::try_from(Span::raw(key_label(name)).width()).unwrap_or(u16::MAX))
        .collect();
    let line_width: u16 = widths.iter().map(|w| w.saturating_add(1)).sum();

    let mut x = inner.x + (inner.width / 2).saturating_sub(line_width / 2);
    for (&name, &width) in keys.iter().zip(&widths) {
        if (x..x.saturating_add(width)).contains(&column) {
            return Some(name);
        }
        x = x.saturating_add(width + 1);
    }
    None
}

/// Main UI rendering function
pub fn ui<S: KeyValueStore, O: WordOracle, C: Clock>(f: &mut Frame, app: &App<S, O, C>) {
    let chunks = screen_chunks(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_keyboard(f, &app.session.machine().keyboard(), chunks[2]);
    render_status(f, app, chunks[3]);

    if let Some(summary) = app.session.summary() {
        let area = f.area();
        render_end_dialog(f, &summary, area);
    }
}

/// Cell colours for a letter state
fn state_style(state: LetterState) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match state {
        LetterState::Correct => base.fg(Color::Black).bg(Color::Green),
        LetterState::Present => base.fg(Color::Black).bg(Color::Yellow),
        LetterState::Absent => base.fg(Color::White).bg(Color::DarkGray),
        LetterState::Default => base.fg(Color::White),
    }
}

fn render_header<S: KeyValueStore, O: WordOracle, C: Clock>(
    f: &mut Frame,
    app: &App<S, O, C>,
    area: Rect,
) {
    let header = Paragraph::new(format!("WORDLE  {}", app.session.day()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn board_row(guess: &Guess, shaking: bool) -> Line<'static> {
    let mut spans = Vec::with_capacity(guess.letters.len() * 2);
    for letter in &guess.letters {
        let text = format!(" {} ", letter.ch.unwrap_or('·'));
        let style = if shaking {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            state_style(letter.state)
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board<S: KeyValueStore, O: WordOracle, C: Clock>(
    f: &mut Frame,
    app: &App<S, O, C>,
    area: Rect,
) {
    let state = app.session.machine().state();
    let shaking = app.session.shaking_row();

    let mut lines = Vec::with_capacity(state.guesses.len() * 2);
    for (row, guess) in state.guesses.iter().enumerate() {
        lines.push(board_row(guess, shaking == Some(row)));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, keys: &KeyboardStates, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|&name| {
                    let state = match name {
                        "Enter" | "Backspace" => LetterState::Default,
                        _ => name
                            .chars()
                            .next()
                            .map_or(LetterState::Default, |ch| keys.get(ch)),
                    };
                    [
                        Span::styled(key_label(name), state_style(state)),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(keyboard_block());
    f.render_widget(keyboard, area);
}

fn render_messages<S: KeyValueStore, O: WordOracle, C: Clock>(
    f: &mut Frame,
    app: &App<S, O, C>,
    area: Rect,
) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<S: KeyValueStore, O: WordOracle, C: Clock>(
    f: &mut Frame,
    app: &App<S, O, C>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let streak = app.session.streak();
    let stats = Paragraph::new(format!(
        "Streak: {} | Best: {}",
        streak.streak, streak.highest
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = if app.session.summary().is_some() {
        "q/Esc: Quit"
    } else {
        "Type a word | Enter: Submit | Backspace: Delete | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

/// A rectangle of the given size centred in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_end_dialog(f: &mut Frame, summary: &EndSummary, area: Rect) {
    let (title, color) = match summary.outcome {
        Outcome::Win => (" You won! ", Color::Green),
        Outcome::Loss => (" Game over ", Color::Red),
    };

    let mut content = Vec::new();
    if let Some(word) = &summary.solution {
        content.push(Line::from(vec![
            Span::raw("The word was "),
            Span::styled(
                word.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]));
        content.push(Line::from(format!("Solved in {}/6", summary.guesses)));
    } else {
        content.push(Line::from("Better luck tomorrow."));
    }
    content.push(Line::from(""));
    content.push(Line::from(format!("Current streak: {}", summary.streak)));
    content.push(Line::from(format!("Best streak:    {}", summary.highest)));
    content.push(Line::from(""));
    content.push(Line::styled(
        "Press q to quit",
        Style::default().fg(Color::DarkGray),
    ));

    let popup = centered(area, 34, content.len() as u16 + 2);
    let dialog = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(Clear, popup);
    f.render_widget(dialog, popup);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_area() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = centered(area, 34, 10);
        assert_eq!(popup, Rect::new(23, 7, 34, 10));

        let small = centered(Rect::new(0, 0, 20, 5), 34, 10);
        assert_eq!(small, Rect::new(0, 0, 20, 5));
    }

    #[test]
    fn clicks_map_to_keyboard_keys() {
        let area = Rect::new(0, 0, 80, 24);
        let inner = keyboard_block().inner(screen_chunks(area)[2]);
        let mid = inner.x + inner.width / 2;

        // Top row is ten 3-wide keys with 1-wide gaps, centred
        let q = mid - 20;
        assert_eq!(key_at(area, q, inner.y), Some("Q"));
        assert_eq!(key_at(area, q + 2, inner.y), Some("Q"));
        assert_eq!(key_at(area, q + 3, inner.y), None);
        assert_eq!(key_at(area, q + 4, inner.y), Some("W"));
        assert_eq!(key_at(area, q - 1, inner.y), None);

        // Bottom row: ENTER is 7 wide, Backspace closes the row
        let bottom = inner.y + 2;
        assert_eq!(key_at(area, q, bottom), Some("Enter"));
        assert_eq!(key_at(area, q + 6, bottom), Some("Enter"));
        assert_eq!(key_at(area, q + 8, bottom), Some("Z"));
        assert_eq!(key_at(area, q + 36, bottom), Some("Backspace"));

        // Borders and other panels
        assert_eq!(key_at(area, q, inner.y - 1), None);
        assert_eq!(key_at(area, q, inner.bottom()), None);
        assert_eq!(key_at(area, q, 0), None);
    }

    #[test]
    fn click_targets_match_drawn_keyboard() {
        use ratatui::{Terminal, backend::TestBackend};

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let frame = terminal
            .draw(|f| {
                let area = screen_chunks(f.area())[2];
                render_keyboard(f, &KeyboardStates::default(), area);
            })
            .unwrap();
        let (area, buffer) = (frame.area, frame.buffer);

        let inner = keyboard_block().inner(screen_chunks(area)[2]);
        let mut found = Vec::new();
        for row in inner.y..inner.bottom() {
            for column in inner.x..inner.right() {
                let symbol = buffer.cell((column, row)).map_or("", |c| c.symbol());
                match key_at(area, column, row) {
                    Some("Enter" | "Backspace") => {}
                    Some(name) if !symbol.trim().is_empty() => {
                        assert_eq!(symbol, name);
                        found.push(name);
                    }
                    Some(_) => {}
                    None => assert!(symbol.trim().is_empty(), "unmapped '{symbol}'"),
                }
            }
        }

        // Every letter key is drawn exactly once under its own target
        let letters: Vec<&str> = KEYBOARD_ROWS
            .iter()
            .flat_map(|row| row.iter().copied())
            .filter(|k| k.len() == 1)
            .collect();
        assert_eq!(found.len(), letters.len());
    }

    #[test]
    fn revealed_cells_are_coloured() {
        assert_eq!(state_style(LetterState::Correct).bg, Some(Color::Green));
        assert_eq!(state_style(LetterState::Present).bg, Some(Color::Yellow));
        assert_eq!(state_style(LetterState::Default).bg, None);
    }
}
