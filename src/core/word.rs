//! Word representation
//!
//! A Word is an immutable sequence of uppercase ASCII letters. All words taking part
//! in one game share the same length, but the type itself accepts any length up to
//! [`MAX_WORD_LENGTH`] so that mismatches can be reported instead of being impossible
//! to express.

use std::fmt;
use thiserror::Error;

/// Number of symbols in the alphabet (`A`-`Z`)
pub const ALPHABET_SIZE: usize = 26;

/// Word length of the classic game
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Longest word accepted; keeps per-letter counts within a `u8`
pub const MAX_WORD_LENGTH: usize = 32;

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("word must be at most 32 letters, got {0}")]
    TooLong(usize),
    #[error("word contains invalid character {0:?}, only letters A-Z are allowed")]
    InvalidCharacter(char),
}

/// A fixed-length word over the `A`-`Z` alphabet
///
/// Input is case-insensitive; the stored text is always uppercase, so equality is
/// symbol-wise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

impl Word {
    /// Create a new Word from a string of any length
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty, longer than [`MAX_WORD_LENGTH`], or
    /// contains anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        // All ASCII from here, so byte length == char count
        if text.len() > MAX_WORD_LENGTH {
            return Err(WordError::TooLong(text.len()));
        }

        Ok(Self {
            text: text.to_ascii_uppercase(),
        })
    }

    /// Create a new Word that must have exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` on a length mismatch, or any error from
    /// [`Word::new`].
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Word, WordError};
    ///
    /// assert!(Word::with_length("crane", 5).is_ok());
    /// assert_eq!(
    ///     Word::with_length("cranes", 5),
    ///     Err(WordError::InvalidLength { expected: 5, actual: 6 })
    /// );
    /// ```
    pub fn with_length(text: impl AsRef<str>, length: usize) -> Result<Self, WordError> {
        let text = text.as_ref();
        let actual = text.chars().count();
        if actual != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual,
            });
        }
        Self::new(text)
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: empty words cannot be constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters()[position]
    }

    /// Count how many times `letter` occurs in the word
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.letters().iter().filter(|&&l| l == letter).count()
    }

    /// Occurrence count of every letter, indexed by [`letter_index`]
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &letter in self.letters() {
            counts[letter_index(letter)] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Index of an uppercase letter in `0..ALPHABET_SIZE`
///
/// # Panics
/// Panics if `letter` is not in `b'A'..=b'Z'`
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    assert!(letter.is_ascii_uppercase(), "letter must be in A-Z");
    (letter - b'A') as usize
}

/// Uppercase letter for an index in `0..ALPHABET_SIZE`
#[inline]
#[must_use]
pub const fn index_letter(index: usize) -> u8 {
    b'A' + index as u8
}
