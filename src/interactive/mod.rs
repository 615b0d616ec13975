//! Interactive TUI game

pub mod app;
pub mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, Statistics, run_tui};
