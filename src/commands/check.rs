//! Score a single guess against a secret

use crate::core::{Feedback, Word};
use anyhow::{Context, Result};

/// Result of scoring one guess
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub guess: Word,
    pub secret: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `secret`
///
/// Neither word needs to be in a word list, but both must be valid words of the
/// same length.
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn check_guess(guess: &str, secret: &str) -> Result<CheckResult> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess {guess:?}"))?;
    let secret = Word::new(secret).with_context(|| format!("invalid secret {secret:?}"))?;
    let feedback = Feedback::evaluate(&guess, &secret)?;

    Ok(CheckResult {
        guess,
        secret,
        feedback,
    })
}
