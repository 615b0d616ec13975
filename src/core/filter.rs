//! Candidate filtering
//!
//! Selects the words of a list that are still consistent with a `ConstraintSet`.
//! Filtering only borrows: no words are allocated or copied.

use super::constraints::ConstraintSet;
use super::word::Word;
use rayon::prelude::*;
use std::iter::FusedIterator;

/// Lazy, order-preserving iterator over the words that satisfy a constraint set
///
/// Cloning the iterator restarts the selection from the same point.
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    words: std::slice::Iter<'a, Word>,
    constraints: &'a ConstraintSet,
}

impl<'a> Iterator for Candidates<'a> {
    type Item = &'a Word;

    fn next(&mut self) -> Option<Self::Item> {
        let constraints = self.constraints;
        self.words.find(|word| constraints.allows(word))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.words.size_hint().1)
    }
}

impl DoubleEndedIterator for Candidates<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let constraints = self.constraints;
        self.words.rfind(|word| constraints.allows(word))
    }
}

impl FusedIterator for Candidates<'_> {}

/// Select the words consistent with `constraints`, keeping their relative order
///
/// # Examples
/// ```
/// use wordle_engine::core::{ConstraintSet, Feedback, Word, filter};
///
/// let words: Vec<Word> = ["CRANE", "TRACE", "BRAKE"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let guess = Word::new("trace").unwrap();
/// let feedback = Feedback::parse("-GGYG").unwrap();
/// let mut constraints = ConstraintSet::new(5);
/// constraints.merge(&guess, &feedback).unwrap();
///
/// let remaining: Vec<&str> = filter(&words, &constraints).map(Word::text).collect();
/// assert_eq!(remaining, ["CRANE"]);
/// ```
#[must_use]
pub fn filter<'a>(words: &'a [Word], constraints: &'a ConstraintSet) -> Candidates<'a> {
    Candidates {
        words: words.iter(),
        constraints,
    }
}

/// Parallel variant of [`filter`] for large lists; same selection, same order
#[must_use]
pub fn par_filter<'a>(words: &'a [Word], constraints: &ConstraintSet) -> Vec<&'a Word> {
    words
        .par_iter()
        .filter(|word| constraints.allows(word))
        .collect()
}
