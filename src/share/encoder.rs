//! Share string encoding
//!
//! Layout, one line each:
//! - header: `<title> <date> <correct>/<total>`
//! - one row per round, one glyph per attempt slot
//! - reference URL
//!
//! Output depends only on the outcomes and the encoder settings, so the same
//! results always produce byte-identical text.

use crate::core::{RoundOutcome, TryMark};

/// Title used in the share header
pub const DEFAULT_TITLE: &str = "Emoji Equations";

/// Reference line appended to every share string
pub const DEFAULT_URL: &str = "https://emojiequations.app";

/// Glyphs used for each attempt mark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareGlyphs {
    pub correct: char,
    pub incorrect: char,
    pub unused: char,
}

impl Default for ShareGlyphs {
    fn default() -> Self {
        Self {
            correct: '🟩',
            incorrect: '🟥',
            unused: '⬜',
        }
    }
}

impl ShareGlyphs {
    #[inline]
    #[must_use]
    pub const fn glyph(&self, mark: TryMark) -> char {
        match mark {
            TryMark::Correct => self.correct,
            TryMark::Incorrect => self.incorrect,
            TryMark::Unused => self.unused,
        }
    }
}

/// Encodes session results into a share string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareEncoder {
    title: String,
    date_label: String,
    url: String,
    glyphs: ShareGlyphs,
}

impl ShareEncoder {
    /// Create an encoder for the puzzle labelled `date_label`
    #[must_use]
    pub fn new(date_label: impl Into<String>) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            date_label: date_label.into(),
            url: DEFAULT_URL.to_string(),
            glyphs: ShareGlyphs::default(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    #[must_use]
    pub fn with_glyphs(mut self, glyphs: ShareGlyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    #[inline]
    #[must_use]
    pub fn date_label(&self) -> &str {
        &self.date_label
    }

    /// Render one outcome as a row of glyphs
    #[must_use]
    pub fn row(&self, outcome: &RoundOutcome) -> String {
        outcome
            .tries
            .iter()
            .map(|&mark| self.glyphs.glyph(mark))
            .collect()
    }

    /// Encode results, in round order, as a share string
    ///
    /// # Examples
    /// ```
    /// use emoji_equations::core::RoundOutcome;
    /// use emoji_equations::share::ShareEncoder;
    ///
    /// let results = [RoundOutcome::solved_on(0, 2), RoundOutcome::failed(1)];
    /// let text = ShareEncoder::new("2025-03-10")
    ///     .with_url("https://example.com")
    ///     .encode(&results);
    ///
    /// assert_eq!(
    ///     text,
    ///     "Emoji Equations 2025-03-10 1/2\n🟥🟩⬜\n🟥🟥🟥\nhttps://example.com"
    /// );
    /// ```
    #[must_use]
    pub fn encode(&self, results: &[RoundOutcome]) -> String {
        let correct = results.iter().filter(|o| o.correct).count();

        let mut text = format!(
            "{} {} {correct}/{}\n",
            self.title,
            self.date_label,
            results.len()
        );

        for outcome in results {
            text.push_str(&self.row(outcome));
            text.push('\n');
        }

        text.push_str(&self.url);
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_results() -> Vec<RoundOutcome> {
        vec![
            RoundOutcome::solved_on(0, 1),
            RoundOutcome::solved_on(1, 3),
            RoundOutcome::failed(2),
        ]
    }

    #[test]
    fn encode_layout() {
        let text = ShareEncoder::new("2025-03-10").encode(&sample_results());

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Emoji Equations 2025-03-10 2/3");
        assert_eq!(lines[1], "🟩⬜⬜");
        assert_eq!(lines[2], "🟥🟥🟩");
        assert_eq!(lines[3], "🟥🟥🟥");
        assert_eq!(lines[4], DEFAULT_URL);
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn encode_is_deterministic() {
        let encoder = ShareEncoder::new("2025-03-10");
        let results = sample_results();

        assert_eq!(encoder.encode(&results), encoder.encode(&results));
    }

    #[test]
    fn header_score_counts_correct_outcomes() {
        let results = vec![RoundOutcome::failed(0), RoundOutcome::failed(1)];
        let text = ShareEncoder::new("day").encode(&results);

        assert!(text.starts_with("Emoji Equations day 0/2\n"));
    }

    #[test]
    fn custom_title_and_glyphs() {
        let glyphs = ShareGlyphs {
            correct: 'O',
            incorrect: 'X',
            unused: '.',
        };
        let text = ShareEncoder::new("d")
            .with_title("Quiz")
            .with_url("u")
            .with_glyphs(glyphs)
            .encode(&[RoundOutcome::solved_on(0, 2)]);

        assert_eq!(text, "Quiz d 1/1\nXO.\nu");
    }

    #[test]
    fn row_matches_marks() {
        let encoder = ShareEncoder::new("d");
        assert_eq!(encoder.row(&RoundOutcome::solved_on(0, 1)), "🟩⬜⬜");
        assert_eq!(encoder.row(&RoundOutcome::failed(0)), "🟥🟥🟥");
    }
}
