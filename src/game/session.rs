//! Game session state machine
//!
//! A session owns the secret, the constraints learned so far and the attempt
//! counter. Every state change goes through [`GameSession::submit_guess`].

use super::config::{ConfigError, SessionConfig};
use super::keyboard::Keyboard;
use crate::core::{
    Candidates, ConstraintError, ConstraintSet, Feedback, LengthMismatch, LetterSet, Word,
    WordError, filter,
};
use crate::wordlists::WordList;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// `Won` and `Lost` accept no further guesses
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// Errors surfaced by a session
///
/// `InvalidGuessFormat`, `NotInWordList` and `AlreadyGuessed` are expected and
/// leave the session untouched; see [`SessionError::is_recoverable`]. The others
/// indicate misuse of the API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("invalid guess: {0}")]
    InvalidGuessFormat(#[source] WordError),
    #[error("{0} is not in the word list")]
    NotInWordList(Word),
    #[error("{0} was already guessed")]
    AlreadyGuessed(Word),
    #[error("the game is already over ({0})")]
    SessionTerminated(GameStatus),
    #[error(transparent)]
    LengthMismatch(#[from] LengthMismatch),
    #[error(transparent)]
    ConflictingConstraint(ConstraintError),
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
    #[error("the word list is empty")]
    EmptyWordList,
}

impl SessionError {
    /// True for validation failures a player can simply retry after
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidGuessFormat(_) | Self::NotInWordList(_) | Self::AlreadyGuessed(_)
        )
    }
}

impl From<ConstraintError> for SessionError {
    fn from(err: ConstraintError) -> Self {
        match err {
            ConstraintError::LengthMismatch(mismatch) => Self::LengthMismatch(mismatch),
            other => Self::ConflictingConstraint(other),
        }
    }
}

/// One accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub feedback: Feedback,
    pub status: GameStatus,
    pub attempts_remaining: usize,
}

/// One game, from secret selection to win or loss
///
/// Borrows the word list used to validate guesses and to compute candidates.
/// `submit_guess` takes `&mut self`, so one session is never mutated from two
/// places at once.
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    words: &'a WordList,
    secret: Word,
    config: SessionConfig,
    constraints: ConstraintSet,
    keyboard: Keyboard,
    history: Vec<Turn>,
    submitted: FxHashSet<Word>,
    status: GameStatus,
}

impl<'a> GameSession<'a> {
    /// Start a game with a known secret
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for an unplayable configuration, or
    /// `LengthMismatch` if the secret or the word list does not match the
    /// configured word length.
    pub fn new(
        secret: Word,
        words: &'a WordList,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        config.validate()?;

        for actual in [secret.len(), words.word_length()] {
            if actual != config.word_length {
                return Err(LengthMismatch {
                    expected: config.word_length,
                    actual,
                }
                .into());
            }
        }

        log::debug!(
            "new session: {} letters, {} attempts, {} known words",
            config.word_length,
            config.max_attempts,
            words.len()
        );

        Ok(Self {
            words,
            secret,
            config,
            constraints: ConstraintSet::new(config.word_length),
            keyboard: Keyboard::default(),
            history: Vec::with_capacity(config.max_attempts),
            submitted: FxHashSet::default(),
            status: GameStatus::Playing,
        })
    }

    /// Start a game with a secret drawn at random from `words`
    ///
    /// # Errors
    ///
    /// Returns `EmptyWordList` if there is nothing to draw from, or any error
    /// from [`GameSession::new`].
    pub fn with_random_secret<R: Rng + ?Sized>(
        words: &'a WordList,
        config: SessionConfig,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        let secret = words
            .choose_secret(rng)
            .cloned()
            .ok_or(SessionError::EmptyWordList)?;
        Self::new(secret, words, config)
    }

    /// Submit a raw guess
    ///
    /// Rejected guesses (wrong length or letters, unknown word, repeat) consume no
    /// attempt and change nothing. An accepted guess consumes one attempt, is
    /// scored against the secret and merged into the constraints; the session
    /// then moves to `Won` if the guess is the secret, to `Lost` if that was the
    /// last attempt, and otherwise stays `Playing`.
    ///
    /// # Errors
    ///
    /// - `SessionTerminated` once the game is won or lost
    /// - `InvalidGuessFormat`, `NotInWordList`, `AlreadyGuessed` for rejected
    ///   guesses
    /// - `LengthMismatch` or `ConflictingConstraint` on internal inconsistency
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, SessionError> {
        if self.status.is_terminal() {
            return Err(SessionError::SessionTerminated(self.status));
        }

        let guess = match self.validate(raw) {
            Ok(guess) => guess,
            Err(e) => {
                log::info!("rejected guess {raw:?}: {e}");
                return Err(e);
            }
        };

        // Score and merge before recording anything so a defect leaves no trace
        let feedback = Feedback::evaluate(&guess, &self.secret).inspect_err(|e| {
            log::error!("evaluating {guess}: {e}");
        })?;
        let mut constraints = self.constraints.clone();
        constraints.merge(&guess, &feedback).inspect_err(|e| {
            log::error!("merging {guess} {feedback}: {e}");
        })?;

        self.constraints = constraints;
        self.keyboard.record(&guess, &feedback);
        self.submitted.insert(guess.clone());
        self.history.push(Turn {
            guess,
            feedback: feedback.clone(),
        });

        self.status = if feedback.is_solved() {
            GameStatus::Won
        } else if self.attempts_remaining() == 0 {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };

        log::debug!(
            "accepted guess {} {feedback}: {} attempts left, {}",
            self.history.len(),
            self.attempts_remaining(),
            self.status
        );

        Ok(GuessOutcome {
            feedback,
            status: self.status,
            attempts_remaining: self.attempts_remaining(),
        })
    }

    fn validate(&self, raw: &str) -> Result<Word, SessionError> {
        let guess = Word::with_length(raw, self.config.word_length)
            .map_err(SessionError::InvalidGuessFormat)?;
        if !self.words.contains(&guess) {
            return Err(SessionError::NotInWordList(guess));
        }
        if self.submitted.contains(&guess) {
            return Err(SessionError::AlreadyGuessed(guess));
        }
        Ok(guess)
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// The secret, revealed only once the game is over
    #[must_use]
    pub const fn secret(&self) -> Option<&Word> {
        if self.status.is_terminal() {
            Some(&self.secret)
        } else {
            None
        }
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.config.max_attempts - self.history.len()
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> SessionConfig {
        self.config
    }

    /// Accepted guesses in order
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// Letters proven not to be in the secret
    #[must_use]
    pub fn discarded_letters(&self) -> LetterSet {
        self.constraints.absent_letters()
    }

    /// Known words still consistent with every guess so far
    #[must_use]
    pub fn candidates(&self) -> Candidates<'_> {
        filter(self.words.words(), &self.constraints)
    }

    #[must_use]
    pub const fn word_list(&self) -> &'a WordList {
        self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn word_list() -> WordList {
        WordList::from_text(
            "crane\nslate\ntrace\nspeed\nerase\ngrate\nirate\ncrate\nbrake\nplate\n",
            5,
        )
    }

    fn session<'a>(secret: &str, words: &'a WordList) -> GameSession<'a> {
        GameSession::new(Word::new(secret).unwrap(), words, SessionConfig::default()).unwrap()
    }

    #[test]
    fn new_session_is_playing() {
        let words = word_list();
        let game = session("CRANE", &words);

        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.attempts_remaining(), 6);
        assert!(game.secret().is_none());
        assert!(game.constraints().is_unconstrained());
        assert_eq!(game.candidates().count(), words.len());
    }

    #[test]
    fn winning_guess() {
        let words = word_list();
        let mut game = session("CRANE", &words);

        let outcome = game.submit_guess("trace").unwrap();
        assert_eq!(outcome.status, GameStatus::Playing);
        assert_eq!(outcome.attempts_remaining, 5);
        assert_eq!(
            outcome.feedback.marks(),
            &[
                Mark::Absent,
                Mark::Correct,
                Mark::Correct,
                Mark::Present,
                Mark::Correct
            ]
        );

        let outcome = game.submit_guess("CRANE").unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
        assert!(outcome.feedback.is_solved());
        assert_eq!(game.secret().map(Word::text), Some("CRANE"));
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn rejections_do_not_consume_attempts() {
        let words = word_list();
        let mut game = session("CRANE", &words);
        game.submit_guess("SLATE").unwrap();

        assert!(matches!(
            game.submit_guess("SLAT"),
            Err(SessionError::InvalidGuessFormat(WordError::InvalidLength { .. }))
        ));
        assert!(matches!(
            game.submit_guess("SL4TE"),
            Err(SessionError::InvalidGuessFormat(
                WordError::InvalidCharacter('4')
            ))
        ));
        assert!(matches!(
            game.submit_guess("ZEBRA"),
            Err(SessionError::NotInWordList(_))
        ));
        assert!(matches!(
            game.submit_guess("slate"),
            Err(SessionError::AlreadyGuessed(_))
        ));

        assert_eq!(game.attempts_remaining(), 5);
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn loses_after_budget() {
        let words = word_list();
        let config = SessionConfig::new(2, 5);
        let mut game = GameSession::new(Word::new("CRANE").unwrap(), &words, config).unwrap();

        assert_eq!(
            game.submit_guess("SLATE").unwrap().status,
            GameStatus::Playing
        );
        assert!(game.secret().is_none());
        assert_eq!(game.submit_guess("PLATE").unwrap().status, GameStatus::Lost);
        assert_eq!(game.secret().map(Word::text), Some("CRANE"));
        assert_eq!(game.attempts_remaining(), 0);
    }

    #[test]
    fn terminal_sessions_reject_guesses() {
        let words = word_list();
        let mut game = session("CRANE", &words);
        game.submit_guess("CRANE").unwrap();

        let err = game.submit_guess("SLATE").unwrap_err();
        assert_eq!(err, SessionError::SessionTerminated(GameStatus::Won));
        assert!(!err.is_recoverable());
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn discarded_letters_and_candidates_narrow() {
        let words = word_list();
        let mut game = session("CRATE", &words);
        game.submit_guess("SLATE").unwrap();

        assert_eq!(game.discarded_letters().to_string(), "LS");
        let remaining: Vec<&str> = game.candidates().map(Word::text).collect();
        assert_eq!(remaining, ["GRATE", "IRATE", "CRATE"]);
    }

    #[test]
    fn secret_length_must_match_config() {
        let words = word_list();
        let err = GameSession::new(
            Word::new("CRANES").unwrap(),
            &words,
            SessionConfig::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            SessionError::LengthMismatch(LengthMismatch {
                expected: 5,
                actual: 6
            })
        );
    }

    #[test]
    fn zero_attempts_is_invalid() {
        let words = word_list();
        let err = GameSession::new(Word::new("CRANE").unwrap(), &words, SessionConfig::new(0, 5))
            .unwrap_err();
        assert_eq!(err, SessionError::InvalidConfig(ConfigError::NoAttempts));
    }

    #[test]
    fn huge_attempt_budget_is_rejected_not_allocated() {
        let words = word_list();
        let err = GameSession::new(
            Word::new("CRANE").unwrap(),
            &words,
            SessionConfig::new(usize::MAX, 5),
        )
        .unwrap_err();
        assert_eq!(
            err,
            SessionError::InvalidConfig(ConfigError::TooManyAttempts(usize::MAX))
        );
    }

    #[test]
    fn random_secret_comes_from_list() {
        let words = word_list();
        let mut rng = StdRng::seed_from_u64(42);
        let mut game =
            GameSession::with_random_secret(&words, SessionConfig::default(), &mut rng).unwrap();

        // Play every word until the game ends; the secret must be among them
        for word in words.words() {
            if game.status().is_terminal() {
                break;
            }
            let _ = game.submit_guess(word.text());
        }
        let secret = game.secret().unwrap();
        assert!(words.contains(secret));

        let empty = WordList::from_text("", 5);
        assert_eq!(
            GameSession::with_random_secret(&empty, SessionConfig::default(), &mut rng)
                .unwrap_err(),
            SessionError::EmptyWordList
        );
    }

    #[test]
    fn recoverable_classification() {
        assert!(SessionError::NotInWordList(Word::new("ZEBRA").unwrap()).is_recoverable());
        assert!(SessionError::InvalidGuessFormat(WordError::Empty).is_recoverable());
        assert!(
            !SessionError::LengthMismatch(LengthMismatch {
                expected: 5,
                actual: 4
            })
            .is_recoverable()
        );
    }
}
