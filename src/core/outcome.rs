//! Round outcome records
//!
//! An outcome is written exactly once per round, when the round resolves, and
//! is never mutated afterwards. Its `tries` array always has one mark per
//! allowed attempt:
//! - Correct   = the guess on this attempt was right
//! - Incorrect = the guess on this attempt was wrong
//! - Unused    = the round resolved before this attempt

/// Number of guesses allowed per round
pub const MAX_ATTEMPTS: u8 = 3;

/// Result of a single attempt slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TryMark {
    Correct,
    Incorrect,
    Unused,
}

/// Recorded result of a resolved round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub round_index: usize,
    pub tries_used: u8,
    pub correct: bool,
    pub tries: [TryMark; MAX_ATTEMPTS as usize],
}

impl RoundOutcome {
    /// Outcome for a round solved on `attempt` (1-based)
    ///
    /// Produces `[Incorrect × (attempt-1), Correct, Unused × (3-attempt)]`.
    ///
    /// # Panics
    /// Panics in debug mode if `attempt` is not in `1..=MAX_ATTEMPTS`
    ///
    /// # Examples
    /// ```
    /// use emoji_equations::core::{RoundOutcome, TryMark};
    ///
    /// let outcome = RoundOutcome::solved_on(0, 2);
    /// assert_eq!(
    ///     outcome.tries,
    ///     [TryMark::Incorrect, TryMark::Correct, TryMark::Unused]
    /// );
    /// ```
    #[must_use]
    pub fn solved_on(round_index: usize, attempt: u8) -> Self {
        debug_assert!(
            (1..=MAX_ATTEMPTS).contains(&attempt),
            "attempt must be in 1..=MAX_ATTEMPTS"
        );

        let mut tries = [TryMark::Unused; MAX_ATTEMPTS as usize];
        let solved_at = usize::from(attempt) - 1;
        for mark in &mut tries[..solved_at] {
            *mark = TryMark::Incorrect;
        }
        tries[solved_at] = TryMark::Correct;

        Self {
            round_index,
            tries_used: attempt,
            correct: true,
            tries,
        }
    }

    /// Outcome for a round whose attempts were all wrong
    #[must_use]
    pub const fn failed(round_index: usize) -> Self {
        Self {
            round_index,
            tries_used: MAX_ATTEMPTS,
            correct: false,
            tries: [TryMark::Incorrect; MAX_ATTEMPTS as usize],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TryMark::{Correct, Incorrect, Unused};

    #[test]
    fn solved_first_try() {
        let outcome = RoundOutcome::solved_on(3, 1);

        assert_eq!(outcome.round_index, 3);
        assert_eq!(outcome.tries_used, 1);
        assert!(outcome.correct);
        assert_eq!(outcome.tries, [Correct, Unused, Unused]);
    }

    #[test]
    fn solved_on_each_attempt() {
        let expected = [
            [Correct, Unused, Unused],
            [Incorrect, Correct, Unused],
            [Incorrect, Incorrect, Correct],
        ];

        for (attempt, tries) in (1..=MAX_ATTEMPTS).zip(expected) {
            let outcome = RoundOutcome::solved_on(0, attempt);
            assert_eq!(outcome.tries, tries, "attempt {attempt}");
            assert_eq!(outcome.tries_used, attempt);
        }
    }

    #[test]
    fn failed_round() {
        let outcome = RoundOutcome::failed(1);

        assert_eq!(outcome.round_index, 1);
        assert_eq!(outcome.tries_used, 3);
        assert!(!outcome.correct);
        assert_eq!(outcome.tries, [Incorrect, Incorrect, Incorrect]);
    }
}
