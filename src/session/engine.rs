//! Quiz session state machine
//!
//! ```text
//! Idle --start--> RoundActive(0, 3)
//! RoundActive(i, n) --submit correct--> RoundResolved(i)
//! RoundActive(i, n) --submit wrong, n > 1--> RoundActive(i, n - 1)
//! RoundActive(i, 1) --submit wrong--> RoundResolved(i)
//! RoundResolved(i) --advance--> RoundActive(i + 1, 3) | Complete
//! any --restart--> RoundActive(0, 3)
//! ```
//!
//! Commands that do not apply to the current phase are ignored rather than
//! rejected. The engine has no notion of time: the caller decides when to
//! `advance` out of a resolved round.

use super::snapshot::SessionSnapshot;
use crate::core::{MAX_ATTEMPTS, Round, RoundOutcome, judge};
use crate::error::{QuizError, Result};
use crate::share::ShareEncoder;
use tracing::{debug, info, instrument, warn};

/// Lifecycle phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    RoundActive,
    RoundResolved,
    Complete,
}

/// All mutable session data, owned by the engine
#[derive(Debug, Clone)]
pub struct SessionState {
    pub rounds: Vec<Round>,
    pub current_round: usize,
    pub attempts_remaining: u8,
    pub results: Vec<RoundOutcome>,
    pub phase: Phase,
}

impl SessionState {
    const fn idle() -> Self {
        Self {
            rounds: Vec::new(),
            current_round: 0,
            attempts_remaining: 0,
            results: Vec::new(),
            phase: Phase::Idle,
        }
    }
}

/// What a `submit` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    /// No round was accepting guesses
    Ignored,
    /// Wrong guess, round still open
    Incorrect { attempts_remaining: u8 },
    /// The round is over
    Resolved(RoundOutcome),
}

/// What an `advance` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceResult {
    /// No resolved round to move past
    Ignored,
    /// Moved to the round at this index
    NextRound(usize),
    /// The last round was resolved; the session is over
    Complete,
}

/// Drives one play-through of a day's rounds
#[derive(Debug, Clone)]
pub struct SessionEngine {
    state: SessionState,
    encoder: ShareEncoder,
}

impl SessionEngine {
    /// Create an idle engine that will label its share string with `encoder`
    #[must_use]
    pub const fn new(encoder: ShareEncoder) -> Self {
        Self {
            state: SessionState::idle(),
            encoder,
        }
    }

    /// Begin a session over `rounds`
    ///
    /// # Errors
    /// Returns `QuizError::InvalidInput` if `rounds` is empty. The engine
    /// state is left untouched in that case.
    #[instrument(skip_all, fields(rounds = rounds.len()))]
    pub fn start(&mut self, rounds: Vec<Round>) -> Result<()> {
        if rounds.is_empty() {
            warn!("Refusing to start a session with no rounds");
            return Err(QuizError::InvalidInput(
                "a session needs at least one round".to_string(),
            ));
        }

        info!(date = self.encoder.date_label(), "Starting session");
        self.state = SessionState {
            rounds,
            current_round: 0,
            attempts_remaining: MAX_ATTEMPTS,
            results: Vec::new(),
            phase: Phase::RoundActive,
        };
        Ok(())
    }

    /// Discard any progress and begin again over `rounds`
    ///
    /// # Errors
    /// Same as [`SessionEngine::start`].
    pub fn restart(&mut self, rounds: Vec<Round>) -> Result<()> {
        debug!(phase = ?self.state.phase, "Restarting session");
        self.start(rounds)
    }

    /// Submit a guess for the current round
    ///
    /// Ignored unless a round is active.
    pub fn submit(&mut self, option: &str) -> SubmitResult {
        if self.state.phase != Phase::RoundActive || self.state.attempts_remaining == 0 {
            debug!(phase = ?self.state.phase, "Ignoring late submit");
            return SubmitResult::Ignored;
        }

        let index = self.state.current_round;
        let remaining = self.state.attempts_remaining;
        let verdict = judge(&self.state.rounds[index], option);

        debug!(
            round = index,
            attempt = MAX_ATTEMPTS + 1 - remaining,
            correct = verdict.correct,
            "Guess judged"
        );

        if verdict.correct {
            let outcome = RoundOutcome::solved_on(index, MAX_ATTEMPTS + 1 - remaining);
            return self.resolve(outcome);
        }

        if remaining > 1 {
            self.state.attempts_remaining = remaining - 1;
            return SubmitResult::Incorrect {
                attempts_remaining: self.state.attempts_remaining,
            };
        }

        self.resolve(RoundOutcome::failed(index))
    }

    fn resolve(&mut self, outcome: RoundOutcome) -> SubmitResult {
        self.state.attempts_remaining = 0;
        self.state.results.push(outcome);
        self.state.phase = Phase::RoundResolved;
        SubmitResult::Resolved(outcome)
    }

    /// Move past a resolved round
    ///
    /// Ignored unless the current round has resolved.
    pub fn advance(&mut self) -> AdvanceResult {
        if self.state.phase != Phase::RoundResolved {
            debug!(phase = ?self.state.phase, "Ignoring advance");
            return AdvanceResult::Ignored;
        }

        let next = self.state.current_round + 1;
        if next < self.state.rounds.len() {
            self.state.current_round = next;
            self.state.attempts_remaining = MAX_ATTEMPTS;
            self.state.phase = Phase::RoundActive;
            AdvanceResult::NextRound(next)
        } else {
            self.state.phase = Phase::Complete;
            info!(
                score = self.score(),
                total = self.state.rounds.len(),
                "Session complete"
            );
            AdvanceResult::Complete
        }
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.phase == Phase::Complete
    }

    /// The round being played or just resolved
    #[must_use]
    pub fn current_round(&self) -> Option<&Round> {
        match self.state.phase {
            Phase::RoundActive | Phase::RoundResolved => {
                self.state.rounds.get(self.state.current_round)
            }
            Phase::Idle | Phase::Complete => None,
        }
    }

    /// Number of rounds solved so far
    #[must_use]
    pub fn score(&self) -> usize {
        self.state.results.iter().filter(|o| o.correct).count()
    }

    #[inline]
    #[must_use]
    pub const fn encoder(&self) -> &ShareEncoder {
        &self.encoder
    }

    /// The share string, once the session is complete
    #[must_use]
    pub fn share_string(&self) -> Option<String> {
        self.is_complete()
            .then(|| self.encoder.encode(&self.state.results))
    }

    /// Read-only view for rendering
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            phase: self.state.phase,
            round: self.current_round(),
            round_index: self.state.current_round,
            total_rounds: self.state.rounds.len(),
            attempts_remaining: self.state.attempts_remaining,
            latest_outcome: self.state.results.last(),
            results: &self.state.results,
            score: self.score(),
            share: self.share_string(),
        }
    }
}
