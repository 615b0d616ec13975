//! Narrow a word list from observed feedback
//!
//! Takes `(guess, feedback)` observations typed in by hand, folds them into a
//! constraint set and lists the words that remain.

use crate::core::{
    ConstraintError, ConstraintSet, Feedback, FeedbackParseError, Word, WordError, par_filter,
};
use crate::wordlists::WordList;
use std::str::FromStr;
use thiserror::Error;

/// Error parsing an observation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObservationParseError {
    #[error("expected GUESS=FEEDBACK, e.g. CRANE=-Y-GG, got {0:?}")]
    MissingSeparator(String),
    #[error("invalid guess: {0}")]
    Guess(#[from] WordError),
    #[error("invalid feedback: {0}")]
    Feedback(#[from] FeedbackParseError),
}

/// A guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub guess: Word,
    pub feedback: Feedback,
}

impl FromStr for Observation {
    type Err = ObservationParseError;

    /// Parse `GUESS=FEEDBACK` (or `GUESS:FEEDBACK`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (guess, feedback) = s
            .split_once(['=', ':'])
            .ok_or_else(|| ObservationParseError::MissingSeparator(s.to_string()))?;

        Ok(Self {
            guess: Word::new(guess.trim())?,
            feedback: Feedback::parse(feedback.trim())?,
        })
    }
}

/// Result of filtering a word list
#[derive(Debug, Clone)]
pub struct FilterResult {
    pub observations: Vec<Observation>,
    pub constraints: ConstraintSet,
    pub candidates: Vec<Word>,
    pub total_words: usize,
}

/// Merge `observations` and select the words of `words` still possible
///
/// # Errors
///
/// Returns `ConstraintError` if an observation has the wrong length or
/// contradicts an earlier one.
pub fn run_filter(
    observations: Vec<Observation>,
    words: &WordList,
) -> Result<FilterResult, ConstraintError> {
    let mut constraints = ConstraintSet::new(words.word_length());
    for observation in &observations {
        constraints.merge(&observation.guess, &observation.feedback)?;
    }

    let candidates = par_filter(words.words(), &constraints)
        .into_iter()
        .cloned()
        .collect();

    Ok(FilterResult {
        observations,
        constraints,
        candidates,
        total_words: words.len(),
    })
}
