//! Wordle Engine - CLI
//!
//! Play Wordle in a TUI or on plain stdin, score guesses, filter word lists
//! from observed feedback and analyze opening sequences.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use wordle_engine::{
    commands::{
        Observation, analyze_openers, check_guess, parse_openers, run_filter, run_simple,
    },
    core::DEFAULT_WORD_LENGTH,
    game::{DEFAULT_MAX_ATTEMPTS, SessionConfig},
    output::{print_analysis_result, print_check_result, print_filter_result},
    wordlists::WordList,
};

#[derive(Parser)]
#[command(
    name = "wordle_engine",
    about = "Wordle game engine with duplicate-aware feedback and constraint filtering",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, embedded list) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Word length
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Attempts per game (1-100)
    #[arg(short = 'a', long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Simple CLI game (one guess per line, without TUI)
    Simple,

    /// Score a guess against a secret
    Check {
        /// The guessed word
        guess: String,
        /// The secret word
        secret: String,
    },

    /// List the words consistent with observed feedback
    Filter {
        /// Observations as GUESS=FEEDBACK, e.g. CRANE=-Y-GG or SLATE=🟩⬜⬜🟨⬜
        #[arg(required = true)]
        observations: Vec<Observation>,

        /// Maximum number of candidates to print
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
    },

    /// Replay opening guesses against every word in the list
    Analyze {
        /// Opening guesses, in order
        #[arg(required = true)]
        openers: Vec<String>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    // RUST_LOG, when set, overrides the -v level
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Load the word list selected by the -w flag
///
/// - "all": the list compiled into the binary
/// - "<path>": newline-delimited file
fn load_wordlist(wordlist_mode: &str, length: usize) -> Result<WordList> {
    let words = match wordlist_mode {
        "all" => WordList::embedded(length),
        path => WordList::from_file(path, length)
            .with_context(|| format!("failed to load word list {path}"))?,
    };

    if words.is_empty() {
        bail!("word list '{wordlist_mode}' has no {length}-letter words");
    }
    log::info!("loaded {} {length}-letter words", words.len());
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SessionConfig::new(cli.attempts, cli.length);
    config.validate()?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Check { guess, secret } => {
            let result = check_guess(&guess, &secret)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Filter {
            observations,
            limit,
        } => {
            let words = load_wordlist(&cli.wordlist, cli.length)?;
            let result = run_filter(observations, &words)?;
            print_filter_result(&result, limit);
            Ok(())
        }
        Commands::Analyze { openers } => {
            let words = load_wordlist(&cli.wordlist, cli.length)?;
            run_analyze_command(&openers, &words)
        }
        Commands::Simple => {
            let words = load_wordlist(&cli.wordlist, cli.length)?;
            let mut rng = StdRng::from_os_rng();
            run_simple(
                &words,
                config,
                &mut io::stdin().lock(),
                &mut io::stdout(),
                &mut rng,
            )?;
            Ok(())
        }
        Commands::Play => {
            let words = load_wordlist(&cli.wordlist, cli.length)?;
            run_play_command(&words, config)
        }
    }
}

fn run_analyze_command(openers: &[String], words: &WordList) -> Result<()> {
    let openers = parse_openers(openers, words).context("invalid opener")?;

    println!(
        "Replaying {} opener(s) against {} secrets...",
        openers.len(),
        words.len()
    );
    let result = analyze_openers(&openers, words, true)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_play_command(words: &WordList, config: SessionConfig) -> Result<()> {
    use wordle_engine::interactive::{App, run_tui};

    let app = App::new(words, config, StdRng::from_os_rng())?;
    run_tui(app)
}
