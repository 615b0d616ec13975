//! Simple line-based game
//!
//! Text-based game without TUI: reads one guess per line and prints the board in
//! bracket notation after every accepted guess.

use crate::game::{GameSession, GameStatus, SessionConfig};
use crate::output::formatters::bracket_notation;
use crate::wordlists::WordList;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// Games played in one simple-mode run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimpleSummary {
    pub games: usize,
    pub wins: usize,
}

/// Run the simple game loop until the player quits or input ends
///
/// # Errors
///
/// Returns an error on I/O failure, or if the session reports a defect
/// (length mismatch or conflicting constraints) rather than a rejected guess.
pub fn run_simple<R, W, G>(
    words: &WordList,
    config: SessionConfig,
    input: &mut R,
    out: &mut W,
    rng: &mut G,
) -> Result<SimpleSummary>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut summary = SimpleSummary::default();
    writeln!(out, "{}", "~Welcome to Wordle~".bright_cyan().bold())?;
    writeln!(
        out,
        "Guess the {}-letter word in {} attempts. Type 'quit' to exit.",
        config.word_length, config.max_attempts
    )?;

    loop {
        let mut session = GameSession::with_random_secret(words, config, rng)?;

        let Some(status) = play_game(&mut session, input, out)? else {
            break;
        };
        summary.games += 1;
        if status == GameStatus::Won {
            summary.wins += 1;
        }

        write!(out, "Play again? (yes/no): ")?;
        out.flush()?;
        match read_line(input)?.as_deref().map(str::trim) {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {}
            _ => break,
        }
    }

    writeln!(
        out,
        "Thanks for playing! Won {} of {} games.",
        summary.wins, summary.games
    )?;
    Ok(summary)
}

/// Play one session to the end
///
/// Returns the final status, or `None` if the player quit or input ran out
/// before the game was decided.
///
/// # Errors
///
/// Returns an error on I/O failure or a defect-class session error.
pub fn play_game<R: BufRead, W: Write>(
    session: &mut GameSession<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<Option<GameStatus>> {
    while !session.status().is_terminal() {
        write!(
            out,
            "Guess {}/{}: ",
            session.attempts_used() + 1,
            session.config().max_attempts
        )?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        let raw = line.trim();
        if matches!(raw.to_lowercase().as_str(), "quit" | "exit") {
            return Ok(None);
        }

        match session.submit_guess(raw) {
            Ok(_) => print_board(session, out)?,
            Err(e) if e.is_recoverable() => writeln!(out, "{e}! Try again.")?,
            Err(e) => return Err(e.into()),
        }
    }

    let status = session.status();
    if let Some(secret) = session.secret() {
        match status {
            GameStatus::Won => writeln!(
                out,
                "{}",
                format!("Your guess {secret} is correct!").green().bold()
            )?,
            _ => writeln!(
                out,
                "{}",
                format!("You ran out of attempts, the word was {secret}").red()
            )?,
        }
    }
    Ok(Some(status))
}

fn print_board<W: Write>(session: &GameSession<'_>, out: &mut W) -> Result<()> {
    for turn in session.history() {
        writeln!(
            out,
            "{:<20}{}",
            bracket_notation(&turn.guess, &turn.feedback),
            turn.guess
        )?;
    }

    let discarded = session.discarded_letters();
    if !discarded.is_empty() {
        writeln!(out, "     [Not in word]: {discarded}")?;
    }
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
