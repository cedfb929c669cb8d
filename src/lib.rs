//! Lays out a list of words as a connected, Scrabble-style crossword.
//!
//! Every word after the first must cross or touch the words already placed, and every run
//! of letters formed along the way must itself be a known word.

pub mod config;
pub mod crossword;
pub mod error;
pub mod loader;
pub mod report;
pub mod utils;

pub use config::GeneratorConfig;
pub use crossword::{CrosswordGenerator, Layout, SearchFailure};
pub use error::{CrosswordError, Result};
