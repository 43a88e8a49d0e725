//! Read-only session view for presentation layers

use super::engine::Phase;
use crate::core::{Round, RoundOutcome};

/// Everything a renderer needs, borrowed from the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot<'a> {
    pub phase: Phase,
    /// Current round; `None` when idle or complete
    pub round: Option<&'a Round>,
    pub round_index: usize,
    pub total_rounds: usize,
    pub attempts_remaining: u8,
    pub latest_outcome: Option<&'a RoundOutcome>,
    pub results: &'a [RoundOutcome],
    pub score: usize,
    /// Encoded results; only present once complete
    pub share: Option<String>,
}

impl SessionSnapshot<'_> {
    /// 1-based position of the current round, for display
    #[must_use]
    pub const fn round_number(&self) -> usize {
        self.round_index + 1
    }
}
