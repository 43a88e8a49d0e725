//! Command implementations

pub mod check;
pub mod dates;
pub mod simple;

pub use check::{CheckReport, RoundSummary, check_puzzle_file};
pub use dates::{DateListing, list_dates};
pub use simple::{SimpleOutcome, run_simple};
