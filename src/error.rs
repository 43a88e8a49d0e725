//! Error types for session setup
//!
//! Every variant here is raised before a session is running. Once a session
//! is active no engine command can fail.

use crate::core::RoundDefect;
use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading puzzles or starting a session
#[derive(Debug, Error)]
pub enum QuizError {
    /// No puzzle exists for the requested date
    #[error("No puzzle available for {date}")]
    DataUnavailable { date: NaiveDate },

    /// A session was started with unusable input (e.g. zero rounds)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A round violates the content invariants
    #[error("Round {round} is malformed: {defect}")]
    MalformedRound { round: usize, defect: RoundDefect },

    /// The puzzle text is not valid JSON or is missing required fields
    #[error("Puzzle data could not be parsed: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    /// Reading puzzle storage failed
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, QuizError>;
