//! Wordle Engine
//!
//! Feedback evaluation, constraint tracking and candidate filtering for
//! Wordle-style word games, plus a game session state machine with TUI and
//! line-based front ends.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::core::{ConstraintSet, Feedback, Word, filter};
//!
//! let guess = Word::new("trace").unwrap();
//! let secret = Word::new("crane").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &secret).unwrap();
//! assert_eq!(feedback.to_letters(), "-GGYG");
//!
//! let mut constraints = ConstraintSet::new(5);
//! constraints.merge(&guess, &feedback).unwrap();
//!
//! let words = [secret.clone(), Word::new("slate").unwrap()];
//! let remaining: Vec<&Word> = filter(&words, &constraints).collect();
//! assert_eq!(remaining, [&secret]);
//! ```

// Core domain types
pub mod core;

// Game sessions
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
