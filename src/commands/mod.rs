//! Command implementations

pub mod analyze;
pub mod check;
pub mod filter;
pub mod simple;

pub use analyze::{AnalysisResult, analyze_openers, parse_openers};
pub use check::{CheckResult, check_guess};
pub use filter::{FilterResult, Observation, ObservationParseError, run_filter};
pub use simple::{SimpleSummary, play_game, run_simple};
