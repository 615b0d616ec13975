//! TUI application state and logic

use crate::game::{GameSession, GameStatus, SessionConfig, SessionError};
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub words: &'a WordList,
    pub config: SessionConfig,
    pub session: GameSession<'a>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts games won in `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    /// Start the app with a random secret from `words`
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the word list is empty or does not match `config`.
    pub fn new(
        words: &'a WordList,
        config: SessionConfig,
        mut rng: StdRng,
    ) -> Result<Self, SessionError> {
        let session = GameSession::with_random_secret(words, config, &mut rng)?;
        Ok(Self::with_session(session, rng))
    }

    /// Start the app on an existing session; later games draw from `rng`
    #[must_use]
    pub fn with_session(session: GameSession<'a>, rng: StdRng) -> Self {
        let config = session.config();
        let mut app = Self {
            words: session.word_list(),
            config,
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics {
                guess_distribution: vec![0; config.max_attempts.saturating_add(1)],
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Guessing,
            rng,
        };
        app.add_message(
            &format!(
                "Guess the {}-letter word in {} attempts.",
                config.word_length, config.max_attempts
            ),
            MessageStyle::Info,
        );
        app
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n' | 'N') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.input_buffer.len() < self.config.word_length {
                        self.input_buffer.push(c.to_ascii_uppercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            },
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit(&mut self) {
        if self.input_buffer.len() < self.config.word_length {
            self.add_message("Not enough letters", MessageStyle::Error);
            return;
        }

        match self.session.submit_guess(&self.input_buffer) {
            Ok(outcome) => {
                self.input_buffer.clear();
                match outcome.status {
                    GameStatus::Won => self.finish_game(true),
                    GameStatus::Lost => self.finish_game(false),
                    GameStatus::Playing => {
                        let remaining = self.candidates_count();
                        self.add_message(
                            &format!(
                                "{remaining} candidates remaining, {} attempts left",
                                outcome.attempts_remaining
                            ),
                            MessageStyle::Info,
                        );
                    }
                }
            }
            Err(e) if e.is_recoverable() => {
                self.add_message(&format!("{e}"), MessageStyle::Error);
            }
            Err(e) => {
                log::error!("session failed: {e}");
                self.add_message(&format!("{e}"), MessageStyle::Error);
                self.input_mode = InputMode::GameOver;
            }
        }
    }

    fn finish_game(&mut self, won: bool) {
        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;

        if won {
            self.stats.games_won += 1;
            let guess_count = self.session.attempts_used();
            if let Some(slot) = self.stats.guess_distribution.get_mut(guess_count) {
                *slot += 1;
            }

            let celebration = match guess_count {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                _ => "😅 PHEW! Got it! 😅",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else if let Some(secret) = self.session.secret() {
            let text = format!("Out of attempts! The word was {secret}");
            self.add_message(&text, MessageStyle::Error);
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        match GameSession::with_random_secret(self.words, self.config, &mut self.rng) {
            Ok(session) => {
                self.session = session;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&format!("{e}"), MessageStyle::Error),
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

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.session.candidates().count()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

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

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}
