//! Puzzle file checking
//!
//! Parses and validates a puzzle file the same way a session load would, and
//! summarizes what a player would see.

use crate::error::{QuizError, Result};
use crate::output::formatters::format_equation;
use crate::puzzles::parse_puzzle;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Summary of one validated round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub id: u32,
    /// Equation with the missing slot hidden
    pub prompt: String,
    pub answer: String,
    pub option_count: usize,
    pub has_rationale: bool,
}

/// Result of checking a puzzle file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub path: PathBuf,
    pub date: Option<NaiveDate>,
    pub rounds: Vec<RoundSummary>,
}

/// Validate the puzzle file at `path`
///
/// # Errors
///
/// Returns the same errors a repository load would: I/O, parse, or
/// malformed-round errors.
pub fn check_puzzle_file(path: &Path) -> Result<CheckReport> {
    let content = fs::read_to_string(path).map_err(|source| QuizError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let puzzle = parse_puzzle(&content)?;

    let rounds = puzzle
        .rounds
        .iter()
        .map(|round| RoundSummary {
            id: round.id(),
            prompt: format_equation(round, None),
            answer: round.correct_answer().to_string(),
            option_count: round.options().len(),
            has_rationale: !round.rationale().trim().is_empty(),
        })
        .collect();

    Ok(CheckReport {
        path: path.to_path_buf(),
        date: puzzle.date,
        rounds,
    })
}
