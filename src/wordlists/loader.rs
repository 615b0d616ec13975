//! Word list loading utilities
//!
//! Provides functions to load word lists from files, strings or embedded constants.
//! Entries that are not valid words of the requested length are skipped.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words of `length` letters from a newline-delimited file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_engine::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_str(&content, length);
    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse newline-delimited text into words of `length` letters
///
/// Surrounding whitespace and blank lines are ignored.
#[must_use]
pub fn words_from_str(content: &str, length: usize) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::with_length(line, length) {
            Ok(word) => Some(word),
            Err(e) => {
                log::trace!("skipping word list entry {line:?}: {e}");
                None
            }
        })
        .collect()
}

/// Convert a string slice to words of `length` letters
///
/// # Examples
/// ```
/// use wordle_engine::wordlists::loader::words_from_slice;
/// use wordle_engine::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS, 5);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::with_length(s, length).ok())
        .collect()
}
