//! Runtime configuration
//!
//! Collected from the command line in `main` and handed to the commands.

use crate::core::Round;
use crate::puzzles::{DirectoryRepository, EmbeddedRepository, PuzzleRepository};
use crate::share::{DEFAULT_URL, ShareEncoder};
use chrono::{Local, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::time::Duration;

/// How long a resolved round stays on screen before advancing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub resolve_delay: Duration,
    /// Used instead of `resolve_delay` when the round has a rationale to read
    pub rationale_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            resolve_delay: Duration::from_millis(1500),
            rationale_delay: Duration::from_millis(4000),
        }
    }
}

impl Timing {
    /// Display delay after `round` resolves
    #[must_use]
    pub fn delay_for(&self, round: &Round) -> Duration {
        if round.rationale().trim().is_empty() {
            self.resolve_delay
        } else {
            self.rationale_delay
        }
    }
}

/// Settings shared by every command
#[derive(Debug, Clone)]
pub struct QuizConfig {
    pub date: NaiveDate,
    /// Directory of `YYYY-MM-DD.json` files; embedded catalog when `None`
    pub data_dir: Option<PathBuf>,
    /// Seed for option shuffling; random when `None`
    pub seed: Option<u64>,
    pub url: String,
    pub timing: Timing,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            date: today(),
            data_dir: None,
            seed: None,
            url: DEFAULT_URL.to_string(),
            timing: Timing::default(),
        }
    }
}

impl QuizConfig {
    /// Repository selected by `data_dir`
    #[must_use]
    pub fn repository(&self) -> Box<dyn PuzzleRepository> {
        match &self.data_dir {
            Some(dir) => Box::new(DirectoryRepository::new(dir.clone())),
            None => Box::new(EmbeddedRepository::default()),
        }
    }

    /// Share encoder labelled with the configured date
    #[must_use]
    pub fn encoder(&self) -> ShareEncoder {
        ShareEncoder::new(self.date.format("%Y-%m-%d").to_string()).with_url(self.url.clone())
    }

    /// Random source for option shuffling
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

/// Today's date in local time
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EquationItem;
    use rand::Rng;

    fn round_with_rationale(rationale: &str) -> Round {
        Round::new(
            1,
            vec![EquationItem::emoji("a")],
            0,
            vec!["a".to_string()],
            rationale,
        )
        .unwrap()
    }

    #[test]
    fn rationale_extends_delay() {
        let timing = Timing::default();
        assert_eq!(
            timing.delay_for(&round_with_rationale("read me")),
            timing.rationale_delay
        );
        assert_eq!(timing.delay_for(&round_with_rationale("")), timing.resolve_delay);
        assert_eq!(timing.delay_for(&round_with_rationale("   ")), timing.resolve_delay);
    }

    #[test]
    fn encoder_uses_date_and_url() {
        let config = QuizConfig {
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            url: "https://example.com".to_string(),
            ..QuizConfig::default()
        };
        let text = config.encoder().encode(&[]);
        assert_eq!(text, "Emoji Equations 2025-03-10 0/0\nhttps://example.com");
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = QuizConfig {
            seed: Some(99),
            ..QuizConfig::default()
        };
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }
}
