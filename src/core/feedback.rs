//! Feedback evaluation and representation
//!
//! Feedback is the ordered sequence of per-position marks produced by scoring a
//! guess against the secret:
//! - `Correct`: the letter is in the secret at this position
//! - `Present`: the letter is in the secret elsewhere and not yet accounted for
//! - `Absent`: every occurrence of the letter in the secret is already accounted for
//!
//! Scoring handles repeated letters by crediting each occurrence in the secret at
//! most once.

use super::word::{ALPHABET_SIZE, Word, letter_index};
use std::fmt;
use thiserror::Error;

/// Guess and secret differ in length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("length mismatch: expected {expected} letters, got {actual}")]
pub struct LengthMismatch {
    pub expected: usize,
    pub actual: usize,
}

/// Per-position judgment of a guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Absent,
    Present,
    Correct,
}

impl Mark {
    /// Whether the mark credits one occurrence of the letter in the secret
    #[inline]
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Correct | Self::Present)
    }

    /// Parse one feedback symbol
    ///
    /// Accepts `G`/🟩 for correct, `Y`/🟨 for present and `-`/`_`/`X`/⬜ for absent
    /// (letters in either case).
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | 'X' | 'x' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_letter(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Error parsing a feedback string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackParseError {
    #[error("feedback must not be empty")]
    Empty,
    #[error("invalid feedback symbol {0:?}, use G/Y/- or 🟩🟨⬜")]
    InvalidSymbol(char),
}

/// Ordered marks for one guess, index-aligned with that guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    marks: Vec<Mark>,
}

impl Feedback {
    /// Build feedback from explicit marks
    #[must_use]
    pub const fn new(marks: Vec<Mark>) -> Self {
        Self { marks }
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. Count every letter of the secret
    /// 2. First pass: mark exact position matches `Correct` and take them out of
    ///    the counts
    /// 3. Second pass, left to right over the remaining positions: mark `Present`
    ///    while the letter still has occurrences left, otherwise `Absent`
    ///
    /// Exact matches must all be consumed before any `Present` is handed out, or a
    /// repeated letter could be credited more often than it occurs in the secret.
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the two words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Feedback, Mark, Word};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let secret = Word::new("crane").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &secret).unwrap();
    ///
    /// assert_eq!(
    ///     feedback.marks(),
    ///     &[Mark::Absent, Mark::Correct, Mark::Correct, Mark::Present, Mark::Correct]
    /// );
    /// ```
    pub fn evaluate(guess: &Word, secret: &Word) -> Result<Self, LengthMismatch> {
        if guess.len() != secret.len() {
            return Err(LengthMismatch {
                expected: secret.len(),
                actual: guess.len(),
            });
        }

        let guess_letters = guess.letters();
        let secret_letters = secret.letters();
        let mut remaining: [u8; ALPHABET_SIZE] = secret.letter_counts();
        let mut marks: Vec<Option<Mark>> = vec![None; guess.len()];

        // First pass: exact positions
        for (i, (&g, &s)) in guess_letters.iter().zip(secret_letters).enumerate() {
            if g == s {
                marks[i] = Some(Mark::Correct);
                remaining[letter_index(g)] -= 1;
            }
        }

        // Second pass: everything else, strictly left to right
        for (mark, &g) in marks.iter_mut().zip(guess_letters) {
            if mark.is_some() {
                continue;
            }
            let count = &mut remaining[letter_index(g)];
            if *count > 0 {
                *count -= 1;
                *mark = Some(Mark::Present);
            } else {
                *mark = Some(Mark::Absent);
            }
        }

        Ok(Self {
            marks: marks.into_iter().map(|m| m.unwrap_or(Mark::Absent)).collect(),
        })
    }

    /// All marks in guess order
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Check if every position is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.marks.is_empty() && self.marks.iter().all(|&m| m == Mark::Correct)
    }

    /// Count the marks of one kind
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.marks.iter().filter(|&&m| m == mark).count()
    }

    /// Parse feedback from a string like "GY-G_" or "🟩🟨⬜🟩⬜"
    ///
    /// # Errors
    /// Returns `FeedbackParseError` for empty input or unknown symbols.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Feedback;
    ///
    /// let p1 = Feedback::parse("GY-GY").unwrap();
    /// let p2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    pub fn parse(s: &str) -> Result<Self, FeedbackParseError> {
        if s.is_empty() {
            return Err(FeedbackParseError::Empty);
        }

        let marks = s
            .chars()
            .map(|c| Mark::from_symbol(c).ok_or(FeedbackParseError::InvalidSymbol(c)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { marks })
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks.iter().map(|m| m.to_emoji()).collect()
    }

    /// Convert to a letter string like "GY-GY"
    #[must_use]
    pub fn to_letters(&self) -> String {
        self.marks.iter().map(|m| m.to_letter()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_letters())
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Score `guess` against `secret`; see [`Feedback::evaluate`]
///
/// # Errors
/// Returns `LengthMismatch` if the two words differ in length.
pub fn evaluate(guess: &Word, secret: &Word) -> Result<Feedback, LengthMismatch> {
    Feedback::evaluate(guess, secret)
}
