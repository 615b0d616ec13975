use std::io::Cursor;
use wordle_engine::commands::play_game;
use wordle_engine::core::{Mark, Word, evaluate};
use wordle_engine::game::{GameSession, GameStatus, SessionConfig, SessionError};
use wordle_engine::wordlists::WordList;

use Mark::{Absent, Correct, Present};

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

fn word_list() -> WordList {
    WordList::from_text(
        "crane\nslate\ntrace\nspeed\nerase\ngrate\nirate\ncrate\nbrake\nplate\n",
        5,
    )
}

#[test]
fn trace_against_crane() {
    let feedback = evaluate(&word("TRACE"), &word("CRANE")).unwrap();
    assert_eq!(
        feedback.marks(),
        &[Absent, Correct, Correct, Present, Correct]
    );
}

#[test]
fn speed_against_erase() {
    let feedback = evaluate(&word("SPEED"), &word("ERASE")).unwrap();
    assert_eq!(
        feedback.marks(),
        &[Present, Absent, Present, Present, Absent]
    );
}

#[test]
fn lost_after_exactly_max_attempts() {
    let words = word_list();
    let config = SessionConfig::new(3, 5);
    let mut session = GameSession::new(word("CRANE"), &words, config).unwrap();

    for (i, guess) in ["SLATE", "SPEED", "ERASE"].into_iter().enumerate() {
        assert_eq!(session.status(), GameStatus::Playing);
        let outcome = session.submit_guess(guess).unwrap();
        assert_eq!(outcome.attempts_remaining, 2 - i);
    }

    assert_eq!(session.status(), GameStatus::Lost);
    assert_eq!(session.attempts_used(), 3);
    assert_eq!(session.secret(), Some(&word("CRANE")));
    assert_eq!(
        session.submit_guess("CRANE"),
        Err(SessionError::SessionTerminated(GameStatus::Lost))
    );
}

#[test]
fn won_immediately_on_the_secret() {
    let words = word_list();
    let mut session = GameSession::new(word("PLATE"), &words, SessionConfig::default()).unwrap();

    session.submit_guess("slate").unwrap();
    let outcome = session.submit_guess("plate").unwrap();

    assert_eq!(outcome.status, GameStatus::Won);
    assert_eq!(outcome.attempts_remaining, 4);
    assert_eq!(session.history().len(), 2);
}

#[test]
fn winning_on_the_last_attempt_is_a_win() {
    let words = word_list();
    let mut session = GameSession::new(word("PLATE"), &words, SessionConfig::new(2, 5)).unwrap();

    session.submit_guess("slate").unwrap();
    assert_eq!(
        session.submit_guess("plate").unwrap().status,
        GameStatus::Won
    );
}

#[test]
fn rejections_leave_the_session_untouched() {
    let words = word_list();
    let mut session = GameSession::new(word("CRANE"), &words, SessionConfig::default()).unwrap();
    session.submit_guess("TRACE").unwrap();
    let before = session.constraints().clone();

    for raw in ["", "TRACES", "TR4CE", "ZEBRA", "trace"] {
        let err = session.submit_guess(raw).unwrap_err();
        assert!(err.is_recoverable(), "{raw:?} gave {err}");
    }

    assert_eq!(session.attempts_used(), 1);
    assert_eq!(session.constraints(), &before);
    assert_eq!(session.status(), GameStatus::Playing);
}

#[test]
fn candidates_always_contain_the_secret() {
    let words = word_list();
    let mut session = GameSession::new(word("IRATE"), &words, SessionConfig::default()).unwrap();

    for guess in ["SPEED", "SLATE", "CRATE"] {
        session.submit_guess(guess).unwrap();
        assert!(session.candidates().any(|w| w.text() == "IRATE"));
    }

    let remaining: Vec<&str> = session.candidates().map(Word::text).collect();
    assert_eq!(remaining, ["GRATE", "IRATE"]);
}

#[test]
fn line_game_recovers_from_bad_input() {
    let words = word_list();
    let mut session = GameSession::new(word("GRATE"), &words, SessionConfig::default()).unwrap();
    let mut out = Vec::new();

    let status = play_game(
        &mut session,
        &mut Cursor::new("  crane  \nhello\ncrane\ngrate\n"),
        &mut out,
    )
    .unwrap();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(status, Some(GameStatus::Won));
    assert_eq!(session.attempts_used(), 2);
    assert!(out.contains(" _  R  A  _  E      CRANE"));
    assert!(out.contains("[Not in word]: CN"));
    assert!(out.contains("HELLO is not in the word list"));
    assert!(out.contains("CRANE was already guessed"));
}

#[test]
fn repeated_rejections_never_exhaust_a_single_attempt() {
    let words = word_list();
    let mut session = GameSession::new(word("CRANE"), &words, SessionConfig::new(1, 5)).unwrap();

    for raw in ["CRAN", "CRANES", "CR4NE", "", "ZEBRA", "HELLO", "ZEBRA"] {
        assert!(session.submit_guess(raw).unwrap_err().is_recoverable());
    }

    assert_eq!(session.status(), GameStatus::Playing);
    assert_eq!(session.attempts_remaining(), 1);
    assert!(session.history().is_empty());
    assert!(session.constraints().is_unconstrained());
}

#[test]
fn repeated_rejections_keep_the_last_attempt() {
    let words = word_list();
    let mut session = GameSession::new(word("CRANE"), &words, SessionConfig::new(2, 5)).unwrap();
    session.submit_guess("SLATE").unwrap();

    for raw in ["SLA", "SL4TE", "ZEBRA", "HELLO", "SLATE", "slate"] {
        assert!(session.submit_guess(raw).unwrap_err().is_recoverable());
    }

    assert_eq!(session.status(), GameStatus::Playing);
    assert_eq!(session.attempts_remaining(), 1);
    assert_eq!(
        session.submit_guess("CRANE").unwrap().status,
        GameStatus::Won
    );
}
