//! Opening analysis
//!
//! Replays a fixed sequence of opening guesses against every word of the list
//! taken as the secret, and measures how far the candidate set narrows. Every
//! secret must survive its own constraints; any that does not is reported.

use crate::core::{ConstraintError, ConstraintSet, Feedback, Word, WordError, filter};
use crate::wordlists::WordList;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Outcome for one secret
#[derive(Debug, Clone)]
struct SecretReport {
    secret: Word,
    /// Candidates left after each opening guess
    remaining: Vec<usize>,
    sound: bool,
}

/// Aggregate statistics over all secrets
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub openers: Vec<Word>,
    pub total_secrets: usize,
    /// Mean candidates remaining after each opening guess
    pub average_remaining: Vec<f64>,
    /// Secret with the largest final candidate set
    pub worst: Option<(Word, usize)>,
    /// Secrets narrowed to exactly one candidate
    pub solved: usize,
    /// Final candidate count -> number of secrets
    pub distribution: BTreeMap<usize, usize>,
    /// Secrets filtered out by their own constraints (always empty unless broken)
    pub unsound: Vec<Word>,
    pub duration: Duration,
}

/// Parse opening guesses for `words`
///
/// Openers outside the list are allowed (any valid word narrows the candidates)
/// but are logged, since they are usually typos.
///
/// # Errors
///
/// Returns `WordError` for an opener that is not a valid word of the list's length.
pub fn parse_openers<S: AsRef<str>>(texts: &[S], words: &WordList) -> Result<Vec<Word>, WordError> {
    texts
        .iter()
        .map(|text| {
            let text = text.as_ref();
            if let Some(known) = words.find(text) {
                return Ok(known.clone());
            }
            let word = Word::with_length(text, words.word_length())?;
            log::warn!("opener {word} is not in the word list");
            Ok(word)
        })
        .collect()
}

/// Analyze `openers` against every secret in `words`
///
/// # Errors
///
/// Returns `ConstraintError::LengthMismatch` if an opener does not match the
/// list's word length.
pub fn analyze_openers(
    openers: &[Word],
    words: &WordList,
    show_progress: bool,
) -> Result<AnalysisResult, ConstraintError> {
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(words.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let reports = words
        .words()
        .par_iter()
        .map(|secret| {
            let report = replay(openers, secret, words);
            pb.inc(1);
            report
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_and_clear();

    Ok(summarize(openers, &reports, start.elapsed()))
}

fn replay(
    openers: &[Word],
    secret: &Word,
    words: &WordList,
) -> Result<SecretReport, ConstraintError> {
    let mut constraints = ConstraintSet::new(words.word_length());
    let mut remaining = Vec::with_capacity(openers.len());

    for guess in openers {
        let feedback = Feedback::evaluate(guess, secret)?;
        constraints.merge(guess, &feedback)?;
        remaining.push(filter(words.words(), &constraints).count());
    }

    let sound = constraints.allows(secret);
    if !sound {
        log::error!("secret {secret} rejected by its own constraints");
    }

    Ok(SecretReport {
        secret: secret.clone(),
        remaining,
        sound,
    })
}

fn summarize(openers: &[Word], reports: &[SecretReport], duration: Duration) -> AnalysisResult {
    let total = reports.len();

    let average_remaining = (0..openers.len())
        .map(|step| {
            if total == 0 {
                0.0
            } else {
                reports.iter().map(|r| r.remaining[step]).sum::<usize>() as f64 / total as f64
            }
        })
        .collect();

    let final_count = |r: &SecretReport| r.remaining.last().copied().unwrap_or(total);

    let mut distribution = BTreeMap::new();
    for report in reports {
        *distribution.entry(final_count(report)).or_insert(0) += 1;
    }

    let worst = reports
        .iter()
        .max_by_key(|&r| final_count(r))
        .map(|r| (r.secret.clone(), final_count(r)));

    AnalysisResult {
        openers: openers.to_vec(),
        total_secrets: total,
        average_remaining,
        worst,
        solved: reports.iter().filter(|&r| final_count(r) == 1).count(),
        distribution,
        unsound: reports
            .iter()
            .filter(|r| !r.sound)
            .map(|r| r.secret.clone())
            .collect(),
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> WordList {
        WordList::from_text(
            "crane\nslate\ntrace\nspeed\nerase\ngrate\nirate\ncrate\nbrake\nplate\n",
            5,
        )
    }

    fn openers(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn parse_openers_accepts_known_and_unknown_words() {
        let words = words();
        let openers = parse_openers(&["slate", "ZEBRA"], &words).unwrap();
        let texts: Vec<&str> = openers.iter().map(Word::text).collect();
        assert_eq!(texts, ["SLATE", "ZEBRA"]);

        assert_eq!(
            parse_openers(&["slates"], &words),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 6
            })
        );
    }

    #[test]
    fn every_secret_survives() {
        let words = words();
        let result = analyze_openers(&openers(&["SLATE", "CRANE"]), &words, false).unwrap();

        assert_eq!(result.total_secrets, words.len());
        assert!(result.unsound.is_empty());
        assert_eq!(result.distribution.values().sum::<usize>(), words.len());
        // The secret is always among the candidates
        assert!(result.distribution.keys().all(|&k| k >= 1));
    }

    #[test]
    fn averages_never_grow() {
        let words = words();
        let result =
            analyze_openers(&openers(&["SPEED", "TRACE", "PLATE"]), &words, false).unwrap();

        assert_eq!(result.average_remaining.len(), 3);
        for pair in result.average_remaining.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
    }

    #[test]
    fn guessing_every_word_solves_everything() {
        let words = words();
        let all: Vec<Word> = words.words().to_vec();
        let result = analyze_openers(&all, &words, false).unwrap();

        assert_eq!(result.solved, words.len());
        assert_eq!(result.worst.map(|(_, n)| n), Some(1));
    }

    #[test]
    fn wrong_length_opener_errors() {
        let words = words();
        assert!(matches!(
            analyze_openers(&openers(&["CRANES"]), &words, false),
            Err(ConstraintError::LengthMismatch(_))
        ));
    }
}
