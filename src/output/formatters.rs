//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use colored::Colorize;

/// Render a guess in bracket notation: ` C ` correct, `[C]` present, ` _ ` absent
///
/// # Examples
/// ```
/// use wordle_engine::core::{Feedback, Word};
/// use wordle_engine::output::formatters::bracket_notation;
///
/// let guess = Word::new("trace").unwrap();
/// let feedback = Feedback::parse("-GGYG").unwrap();
/// assert_eq!(bracket_notation(&guess, &feedback), " _  R  A [C] E ");
/// ```
#[must_use]
pub fn bracket_notation(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.marks())
        .map(|(&letter, mark)| {
            let letter = char::from(letter);
            match mark {
                Mark::Correct => format!(" {letter} "),
                Mark::Present => format!("[{letter}]"),
                Mark::Absent => " _ ".to_string(),
            }
        })
        .collect()
}

/// Render a guess as coloured tiles
#[must_use]
pub fn colored_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.marks())
        .map(|(&letter, mark)| {
            let tile = format!(" {} ", char::from(letter));
            match mark {
                Mark::Correct => tile.black().on_green().bold().to_string(),
                Mark::Present => tile.black().on_yellow().bold().to_string(),
                Mark::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
