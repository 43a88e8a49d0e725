//! Puzzle data for the daily quiz
//!
//! Provides the puzzle file format, repositories keyed by calendar date, and
//! a catalog of puzzles compiled into the binary.

mod embedded;
mod format;
pub mod loader;

pub use embedded::{PUZZLES, PUZZLES_COUNT};
pub use format::{Puzzle, parse_puzzle};
pub use loader::{DirectoryRepository, EmbeddedRepository, PuzzleRepository};
