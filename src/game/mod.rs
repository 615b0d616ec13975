//! Game orchestration
//!
//! The `GameSession` state machine plus its configuration and per-letter
//! keyboard tracking.

mod config;
mod keyboard;
mod session;

pub use config::{ConfigError, DEFAULT_MAX_ATTEMPTS, MAX_ATTEMPTS, SessionConfig};
pub use keyboard::{Keyboard, LetterStatus};
pub use session::{GameSession, GameStatus, GuessOutcome, SessionError, Turn};
