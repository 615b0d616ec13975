//! Accumulated knowledge about the secret
//!
//! A `ConstraintSet` folds every observed `(guess, feedback)` pair into positional
//! requirements and per-letter occurrence bounds. All updates are monotone (`max`
//! on lower bounds, `min` on upper bounds), so merging the same observation twice
//! changes nothing and the set only ever gets tighter.

use super::feedback::{Feedback, LengthMismatch, Mark};
use super::letter_set::LetterSet;
use super::word::{ALPHABET_SIZE, Word, index_letter, letter_index};
use thiserror::Error;

/// A merge that cannot be reconciled with what is already known
///
/// Feedback evaluated against one secret never produces these; they mean the set
/// was fed observations from two different secrets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error(transparent)]
    LengthMismatch(#[from] LengthMismatch),
    #[error(
        "conflicting constraint at position {position}: {} already required, got {}",
        char::from(*.existing),
        char::from(*.incoming)
    )]
    ConflictingPosition {
        position: usize,
        existing: u8,
        incoming: u8,
    },
    #[error(
        "conflicting constraint for {}: at least {min} required but at most {max} allowed",
        char::from(*.letter)
    )]
    ConflictingCount { letter: u8, min: u8, max: u8 },
}

/// Positional and count constraints derived from feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSet {
    word_length: usize,
    required_at: Vec<Option<u8>>,
    excluded_at: Vec<LetterSet>,
    min_count: [u8; ALPHABET_SIZE],
    /// `None` means unbounded (capped only by the word length)
    max_count: [Option<u8>; ALPHABET_SIZE],
}

impl ConstraintSet {
    /// Create an empty constraint set for words of `word_length` letters
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            word_length,
            required_at: vec![None; word_length],
            excluded_at: vec![LetterSet::EMPTY; word_length],
            min_count: [0; ALPHABET_SIZE],
            max_count: [None; ALPHABET_SIZE],
        }
    }

    /// Fold one observation into the set
    ///
    /// # Algorithm
    /// 1. `Correct` at `i`: the secret has `guess[i]` at `i`
    /// 2. `Present` at `i`: the secret does not have `guess[i]` at `i`
    /// 3. For each letter of the guess, the number of `Correct`/`Present` marks it
    ///    received is a lower bound on its count in the secret
    /// 4. If the letter also received an `Absent` mark, that number is exact, so it
    ///    becomes an upper bound as well
    ///
    /// The merge is atomic: on error the set is left unchanged.
    ///
    /// # Errors
    /// - `LengthMismatch` if the guess or feedback length differs from the set's
    ///   word length
    /// - `ConflictingPosition` if a position would require two different letters
    /// - `ConflictingCount` if a letter's lower bound would exceed its upper bound
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{ConstraintSet, Feedback, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let secret = Word::new("erase").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &secret).unwrap();
    ///
    /// let mut constraints = ConstraintSet::new(5);
    /// constraints.merge(&guess, &feedback).unwrap();
    ///
    /// assert_eq!(constraints.min_count(b'E'), 2);
    /// assert_eq!(constraints.max_count(b'P'), Some(0));
    /// assert!(constraints.allows(&secret));
    /// ```
    pub fn merge(&mut self, guess: &Word, feedback: &Feedback) -> Result<(), ConstraintError> {
        for actual in [guess.len(), feedback.len()] {
            if actual != self.word_length {
                return Err(LengthMismatch {
                    expected: self.word_length,
                    actual,
                }
                .into());
            }
        }

        let mut next = self.clone();
        next.apply(guess, feedback)?;
        *self = next;
        Ok(())
    }

    fn apply(&mut self, guess: &Word, feedback: &Feedback) -> Result<(), ConstraintError> {
        let mut hits = [0u8; ALPHABET_SIZE];
        let mut seen = LetterSet::EMPTY;
        let mut missed = LetterSet::EMPTY;

        for (position, (&letter, &mark)) in guess.letters().iter().zip(feedback.marks()).enumerate()
        {
            seen.insert(letter);
            match mark {
                Mark::Correct => {
                    match self.required_at[position] {
                        Some(existing) if existing != letter => {
                            return Err(ConstraintError::ConflictingPosition {
                                position,
                                existing,
                                incoming: letter,
                            });
                        }
                        _ => self.required_at[position] = Some(letter),
                    }
                    hits[letter_index(letter)] += 1;
                }
                Mark::Present => {
                    self.excluded_at[position].insert(letter);
                    hits[letter_index(letter)] += 1;
                }
                Mark::Absent => missed.insert(letter),
            }
        }

        for letter in seen.iter() {
            let index = letter_index(letter);
            let count = hits[index];

            self.min_count[index] = self.min_count[index].max(count);
            if missed.contains(letter) {
                self.max_count[index] = Some(self.max_count[index].map_or(count, |m| m.min(count)));
            }

            if let Some(max) = self.max_count[index]
                && self.min_count[index] > max
            {
                return Err(ConstraintError::ConflictingCount {
                    letter,
                    min: self.min_count[index],
                    max,
                });
            }
        }

        Ok(())
    }

    /// Check whether `word` is consistent with every constraint
    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        if word.len() != self.word_length {
            return false;
        }

        let positions_ok = word
            .letters()
            .iter()
            .zip(self.required_at.iter().zip(&self.excluded_at))
            .all(|(&letter, (required, excluded))| {
                required.is_none_or(|r| r == letter) && !excluded.contains(letter)
            });
        if !positions_ok {
            return false;
        }

        let counts = word.letter_counts();
        counts
            .iter()
            .zip(self.min_count.iter().zip(&self.max_count))
            .all(|(&count, (&min, max))| count >= min && max.is_none_or(|m| count <= m))
    }

    /// Word length the set applies to
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Letter known to be at `position`, if any
    ///
    /// # Panics
    /// Panics if `position >= self.word_length()`
    #[inline]
    #[must_use]
    pub fn required_at(&self, position: usize) -> Option<u8> {
        self.required_at[position]
    }

    /// Letters known not to be at `position`
    ///
    /// # Panics
    /// Panics if `position >= self.word_length()`
    #[inline]
    #[must_use]
    pub fn excluded_at(&self, position: usize) -> LetterSet {
        self.excluded_at[position]
    }

    /// Minimum number of occurrences of `letter` in the secret
    ///
    /// # Panics
    /// Panics if `letter` is not an uppercase ASCII letter
    #[inline]
    #[must_use]
    pub const fn min_count(&self, letter: u8) -> u8 {
        self.min_count[letter_index(letter)]
    }

    /// Exact upper bound on occurrences of `letter`, `None` if unbounded
    ///
    /// # Panics
    /// Panics if `letter` is not an uppercase ASCII letter
    #[inline]
    #[must_use]
    pub const fn max_count(&self, letter: u8) -> Option<u8> {
        self.max_count[letter_index(letter)]
    }

    /// Letters proven not to occur in the secret at all
    #[must_use]
    pub fn absent_letters(&self) -> LetterSet {
        (0..ALPHABET_SIZE)
            .filter(|&index| self.max_count[index] == Some(0))
            .map(index_letter)
            .collect()
    }

    /// Letters proven to occur in the secret at least once
    #[must_use]
    pub fn present_letters(&self) -> LetterSet {
        (0..ALPHABET_SIZE)
            .filter(|&index| self.min_count[index] > 0)
            .map(index_letter)
            .collect()
    }

    /// True if no observation has narrowed anything yet
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::new(self.word_length)
    }
}

impl Default for ConstraintSet {
    fn default() -> Self {
        Self::new(super::DEFAULT_WORD_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "letter must be in A-Z")]
    fn count_accessors_reject_lowercase() {
        let _ = ConstraintSet::new(5).min_count(b'a');
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn observe(constraints: &mut ConstraintSet, guess: &str, secret: &str) {
        let guess = word(guess);
        let feedback = Feedback::evaluate(&guess, &word(secret)).unwrap();
        constraints.merge(&guess, &feedback).unwrap();
    }

    #[test]
    fn empty_set_allows_everything_of_its_length() {
        let constraints = ConstraintSet::new(5);
        assert!(constraints.is_unconstrained());
        assert!(constraints.allows(&word("CRANE")));
        assert!(constraints.allows(&word("ZZZZZ")));
        assert!(!constraints.allows(&word("CRANES")));
    }

    #[test]
    fn merge_trace_against_crane() {
        let mut constraints = ConstraintSet::new(5);
        observe(&mut constraints, "TRACE", "CRANE");

        assert_eq!(constraints.required_at(0), None);
        assert_eq!(constraints.required_at(1), Some(b'R'));
        assert_eq!(constraints.required_at(2), Some(b'A'));
        assert_eq!(constraints.required_at(4), Some(b'E'));
        assert!(constraints.excluded_at(3).contains(b'C'));

        assert_eq!(constraints.min_count(b'C'), 1);
        assert_eq!(constraints.max_count(b'C'), None);
        assert_eq!(constraints.max_count(b'T'), Some(0));
        assert_eq!(constraints.absent_letters().to_string(), "T");
        assert_eq!(constraints.present_letters().to_string(), "ACER");

        assert!(constraints.allows(&word("CRANE")));
        assert!(!constraints.allows(&word("TRACE"))); // T is absent
        assert!(!constraints.allows(&word("GRACE"))); // C excluded at 3
        assert!(!constraints.allows(&word("BRAKE"))); // no C
    }

    #[test]
    fn partial_absent_gives_exact_count() {
        // SPEED vs ABIDE: one E credited, the other absent -> exactly one E
        let mut constraints = ConstraintSet::new(5);
        observe(&mut constraints, "SPEED", "ABIDE");

        assert_eq!(constraints.min_count(b'E'), 1);
        assert_eq!(constraints.max_count(b'E'), Some(1));
        // D is present (not at 4), so not excluded elsewhere
        assert_eq!(constraints.min_count(b'D'), 1);

        assert!(constraints.allows(&word("ABIDE")));
        assert!(!constraints.allows(&word("EDGEE")));
    }

    #[test]
    fn lower_bound_only_without_absent() {
        // Both E's of SPEED are credited against ERASE; nothing says there are
        // no more than two
        let mut constraints = ConstraintSet::new(5);
        observe(&mut constraints, "SPEED", "ERASE");

        assert_eq!(constraints.min_count(b'E'), 2);
        assert_eq!(constraints.max_count(b'E'), None);
        assert_eq!(constraints.max_count(b'P'), Some(0));
        assert_eq!(constraints.max_count(b'D'), Some(0));
        assert!(constraints.excluded_at(0).contains(b'S'));
        assert!(constraints.allows(&word("ERASE")));
    }

    #[test]
    fn merge_is_idempotent() {
        let mut once = ConstraintSet::new(5);
        observe(&mut once, "ROBOT", "FLOOR");

        let mut twice = once.clone();
        observe(&mut twice, "ROBOT", "FLOOR");

        assert_eq!(once, twice);
    }

    #[test]
    fn bounds_only_tighten() {
        let mut constraints = ConstraintSet::new(5);
        observe(&mut constraints, "EERIE", "THEME");
        let max_after_first = constraints.max_count(b'E');
        assert_eq!(max_after_first, Some(2));

        // A guess with fewer E's cannot loosen the bound
        observe(&mut constraints, "CRANE", "THEME");
        assert_eq!(constraints.max_count(b'E'), Some(2));
        assert_eq!(constraints.min_count(b'E'), 2);
        assert!(constraints.allows(&word("THEME")));
    }

    #[test]
    fn conflicting_position_is_rejected_atomically() {
        let mut constraints = ConstraintSet::new(5);
        observe(&mut constraints, "CRANE", "CRANE");
        let before = constraints.clone();

        let guess = word("SLATE");
        let feedback = Feedback::evaluate(&guess, &word("SLATE")).unwrap();
        let err = constraints.merge(&guess, &feedback).unwrap_err();

        assert_eq!(
            err,
            ConstraintError::ConflictingPosition {
                position: 0,
                existing: b'C',
                incoming: b'S'
            }
        );
        assert_eq!(constraints, before);
    }

    #[test]
    fn conflicting_count_is_rejected() {
        let mut constraints = ConstraintSet::new(5);
        // No E at all
        observe(&mut constraints, "SPEED", "BLAST");

        let guess = word("THEME");
        let feedback = Feedback::evaluate(&guess, &word("THEME")).unwrap();
        let err = constraints.merge(&guess, &feedback).unwrap_err();

        assert!(matches!(
            err,
            ConstraintError::ConflictingCount { letter: b'E', .. }
        ));
        assert!(err.to_string().contains('E'));
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let mut constraints = ConstraintSet::new(5);
        let guess = word("CRANES");
        let feedback = Feedback::parse("------").unwrap();

        assert_eq!(
            constraints.merge(&guess, &feedback),
            Err(ConstraintError::LengthMismatch(LengthMismatch {
                expected: 5,
                actual: 6
            }))
        );

        let guess = word("CRANE");
        let feedback = Feedback::parse("---").unwrap();
        assert!(constraints.merge(&guess, &feedback).is_err());
        assert!(constraints.is_unconstrained());
    }
}
