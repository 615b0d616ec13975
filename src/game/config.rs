//! Session configuration

use crate::core::{DEFAULT_WORD_LENGTH, MAX_WORD_LENGTH};
use thiserror::Error;

/// Default number of attempts per game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Largest attempt budget a session accepts
pub const MAX_ATTEMPTS: usize = 100;

/// Invalid session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a game needs at least one attempt")]
    NoAttempts,
    #[error("a game allows at most 100 attempts, got {0}")]
    TooManyAttempts(usize),
    #[error("word length must be between 1 and 32, got {0}")]
    InvalidWordLength(usize),
}

/// Configuration for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub max_attempts: usize,
    pub word_length: usize,
}

impl SessionConfig {
    #[must_use]
    pub const fn new(max_attempts: usize, word_length: usize) -> Self {
        Self {
            max_attempts,
            word_length,
        }
    }

    /// Check the configuration can describe a playable game
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an attempt budget outside `1..=MAX_ATTEMPTS`
    /// or a word length outside `1..=MAX_WORD_LENGTH`.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        if self.max_attempts > MAX_ATTEMPTS {
            return Err(ConfigError::TooManyAttempts(self.max_attempts));
        }
        if self.word_length == 0 || self.word_length > MAX_WORD_LENGTH {
            return Err(ConfigError::InvalidWordLength(self.word_length));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH)
    }
}
