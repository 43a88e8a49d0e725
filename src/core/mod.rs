//! Core domain types for the quiz
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and immutable once constructed.

mod equation;
mod outcome;
mod validator;

pub use equation::{EquationItem, Round, RoundDefect};
pub use outcome::{MAX_ATTEMPTS, RoundOutcome, TryMark};
pub use validator::{Judgement, judge};
