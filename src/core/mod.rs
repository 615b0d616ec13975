//! Core domain types for Wordle
//!
//! Pure, synchronous building blocks with no I/O: words, feedback evaluation,
//! constraint accumulation and candidate filtering. Everything here is safe to use
//! from many threads at once; only `ConstraintSet::merge` mutates, and it takes
//! `&mut self`.

mod constraints;
mod feedback;
mod filter;
mod letter_set;
mod word;

pub use constraints::{ConstraintError, ConstraintSet};
pub use feedback::{Feedback, FeedbackParseError, LengthMismatch, Mark, evaluate};
pub use filter::{Candidates, filter, par_filter};
pub use letter_set::LetterSet;
pub use word::{
    ALPHABET_SIZE, DEFAULT_WORD_LENGTH, MAX_WORD_LENGTH, Word, WordError, index_letter,
    letter_index,
};
