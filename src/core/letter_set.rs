//! Compact set of alphabet letters
//!
//! One bit per letter of `A`-`Z`, so the set is `Copy` and set operations are a
//! single instruction.

use super::word::{ALPHABET_SIZE, index_letter, letter_index};
use std::fmt;

/// A set of uppercase letters stored as a bitmask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Add a letter to the set
    ///
    /// # Panics
    /// Panics if `letter` is not an uppercase ASCII letter
    #[inline]
    pub const fn insert(&mut self, letter: u8) {
        self.0 |= 1 << letter_index(letter);
    }

    /// Check whether a letter is in the set
    ///
    /// # Panics
    /// Panics if `letter` is not an uppercase ASCII letter
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & (1 << letter_index(letter)) != 0
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_SIZE)
            .filter(move |&index| self.0 & (1 << index) != 0)
            .map(index_letter)
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "letter must be in A-Z")]
    fn insert_rejects_lowercase() {
        let mut set = LetterSet::EMPTY;
        set.insert(b'a');
    }

    #[test]
    fn insert_and_contains() {
        let mut set = LetterSet::EMPTY;
        assert!(set.is_empty());

        set.insert(b'Z');
        set.insert(b'A');
        set.insert(b'A');

        assert!(set.contains(b'A'));
        assert!(set.contains(b'Z'));
        assert!(!set.contains(b'M'));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn iterates_alphabetically() {
        let set: LetterSet = b"TRACE".iter().copied().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), b"ACERT");
        assert_eq!(set.to_string(), "ACERT");
    }
}
