//! Word lists
//!
//! Provides the embedded word list compiled into the binary and the `WordList`
//! container used for guess validation, secret selection and filtering.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::{DEFAULT_WORD_LENGTH, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;

/// An ordered list of same-length words with a membership index
///
/// Order is kept exactly as supplied (duplicates included) so that candidate
/// filtering is order-preserving.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<Word>,
    word_length: usize,
}

impl WordList {
    /// Build a list of `word_length`-letter words; words of other lengths are dropped
    #[must_use]
    pub fn new(words: Vec<Word>, word_length: usize) -> Self {
        let total = words.len();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|w| w.len() == word_length)
            .collect();
        if words.len() < total {
            log::warn!(
                "dropped {} words that are not {word_length} letters long",
                total - words.len()
            );
        }

        let index = words.iter().cloned().collect();
        Self {
            words,
            index,
            word_length,
        }
    }

    /// The list compiled into the binary, restricted to `word_length` letters
    #[must_use]
    pub fn embedded(word_length: usize) -> Self {
        Self::new(loader::words_from_slice(WORDS, word_length), word_length)
    }

    /// Load a newline-delimited file of `word_length`-letter words
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Self> {
        Ok(Self::new(
            loader::load_from_file(path, word_length)?,
            word_length,
        ))
    }

    /// Parse newline-delimited text
    #[must_use]
    pub fn from_text(text: &str, word_length: usize) -> Self {
        Self::new(loader::words_from_str(text, word_length), word_length)
    }

    /// Check whether `word` is in the list
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// All words in their original order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Find the stored word equal to `text` (case-insensitive)
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        let word = Word::with_length(text, self.word_length).ok()?;
        self.index.get(&word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Pick a random secret, `None` if the list is empty
    pub fn choose_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::embedded(DEFAULT_WORD_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn embedded_list_contains_reference_words() {
        let list = WordList::default();
        assert_eq!(list.len(), WORDS_COUNT);
        for text in ["CRANE", "TRACE", "SPEED", "ERASE", "SLATE"] {
            assert!(list.find(text).is_some(), "{text} missing from embedded list");
        }
    }

    #[test]
    fn new_drops_other_lengths_and_keeps_order() {
        let words = ["slate", "cranes", "crane", "slate"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let list = WordList::new(words, 5);

        let texts: Vec<&str> = list.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["SLATE", "CRANE", "SLATE"]);
        assert!(list.contains(&Word::new("crane").unwrap()));
        assert!(!list.contains(&Word::new("cranes").unwrap()));
    }

    #[test]
    fn find_is_case_insensitive() {
        let list = WordList::from_text("crane\nslate\n", 5);
        assert_eq!(list.find("Crane").map(Word::text), Some("CRANE"));
        assert!(list.find("trace").is_none());
        assert!(list.find("cr4ne").is_none());
    }

    #[test]
    fn choose_secret_from_list() {
        let list = WordList::from_text("crane\nslate\n", 5);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            let secret = list.choose_secret(&mut rng).unwrap();
            assert!(list.contains(secret));
        }

        let empty = WordList::from_text("", 5);
        assert!(empty.choose_secret(&mut rng).is_none());
    }
}
