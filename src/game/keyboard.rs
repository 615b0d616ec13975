//! Per-letter status across a game
//!
//! Tracks the best mark each letter has received so far, for keyboard-style
//! display.

use crate::core::{ALPHABET_SIZE, Feedback, Mark, Word, letter_index};

/// Best knowledge about a single letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LetterStatus {
    #[default]
    Unknown,
    Absent,
    Present,
    Correct,
}

impl From<Mark> for LetterStatus {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Absent => Self::Absent,
            Mark::Present => Self::Present,
            Mark::Correct => Self::Correct,
        }
    }
}

/// Status of every letter of the alphabet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    statuses: [LetterStatus; ALPHABET_SIZE],
}

impl Keyboard {
    /// Record one guess; a letter's status only ever improves
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &mark) in guess.letters().iter().zip(feedback.marks()) {
            let status = &mut self.statuses[letter_index(letter)];
            *status = (*status).max(LetterStatus::from(mark));
        }
    }

    /// Best status recorded for `letter`
    ///
    /// # Panics
    /// Panics if `letter` is not an uppercase ASCII letter
    #[must_use]
    pub const fn status(&self, letter: u8) -> LetterStatus {
        self.statuses[letter_index(letter)]
    }
}
