//! TUI rendering with ratatui
//!
//! Game board, on-screen keyboard and candidate tracking.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Mark;
use crate::game::{GameStatus, LetterStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

fn mark_style(mark: Mark) -> Style {
    let bg = match mark {
        Mark::Correct => Color::Green,
        Mark::Present => Color::Yellow,
        Mark::Absent => Color::DarkGray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

fn tile(letter: char, style: Style) -> [Span<'static>; 2] {
    [Span::styled(format!(" {letter} "), style), Span::raw(" ")]
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let history = session.history();
    let length = app.config.word_length;
    let empty = Style::new().fg(Color::DarkGray).bg(Color::Reset);

    let mut lines = vec![Line::from("")];
    for row in 0..app.config.max_attempts {
        let spans: Vec<Span> = if let Some(turn) = history.get(row) {
            turn.guess
                .letters()
                .iter()
                .zip(turn.feedback.marks())
                .flat_map(|(&letter, &mark)| tile(char::from(letter), mark_style(mark)))
                .collect()
        } else if row == history.len() && session.status() == GameStatus::Playing {
            let typed: Vec<char> = app.input_buffer.chars().collect();
            (0..length)
                .flat_map(|pos| {
                    let letter = typed.get(pos).copied().unwrap_or('·');
                    tile(letter, Style::new().fg(Color::White).add_modifier(Modifier::BOLD))
                })
                .collect()
        } else {
            (0..length).flat_map(|_| tile('·', empty)).collect()
        };
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(
                " Board {}/{} ",
                session.attempts_used(),
                app.config.max_attempts
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Candidate gauge
            Constraint::Min(4),    // Candidates
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_search_progress(f, app, chunks[1]);
    render_candidates(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.session.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|letter| {
                    let style = match keyboard.status(letter) {
                        LetterStatus::Correct => mark_style(Mark::Correct),
                        LetterStatus::Present => mark_style(Mark::Present),
                        LetterStatus::Absent => Style::new().fg(Color::DarkGray),
                        LetterStatus::Unknown => Style::new().fg(Color::White),
                    };
                    [Span::styled(char::from(letter).to_string(), style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, area);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.words.len();
    let remaining = app.candidates_count();
    let eliminated_pct = if total == 0 {
        0
    } else {
        // Cast is safe: value is in [0, 100]
        ((total - remaining) * 100 / total) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Search Space ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(eliminated_pct)
        .label(format!("{remaining}/{total} candidates remain"));

    f.render_widget(gauge, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let count = app.candidates_count();

    let content = if app.session.history().is_empty() {
        vec![Line::from("Make a guess to narrow the list")]
    } else if count <= 12 {
        app.session
            .candidates()
            .collect::<Vec<_>>()
            .chunks(4)
            .map(|chunk| {
                let words: Vec<&str> = chunk.iter().map(|w| w.text()).collect();
                Line::from(Span::styled(
                    words.join("  "),
                    Style::default().fg(Color::Green),
                ))
            })
            .collect()
    } else {
        vec![
            Line::from(format!("{count} candidates remaining")),
            Line::from(format!(
                "Not in word: {}",
                app.session.discarded_letters()
            )),
        ]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Type your guess | Enter to submit, Backspace to delete ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Game: {}", app.session.status()))
        .alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let attempts = Paragraph::new(format!(
        "Attempts left: {}",
        app.session.attempts_remaining()
    ))
    .alignment(Alignment::Center);
    f.render_widget(attempts, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Esc: Quit | Enter: Submit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
