//! Equation items and rounds
//!
//! A round is an equation of emoji and operator slots with one emoji slot
//! blanked out, plus the candidate answers for that slot. Rounds can only be
//! built through [`Round::new`], which enforces the content invariants, so any
//! `Round` in the program is known to be well-formed.

use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// One slot in an equation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquationItem {
    /// An operator such as `+` or `=`
    Operator { symbol: String },
    /// An emoji term, optionally decorated
    Emoji {
        symbol: String,
        coefficient: Option<String>,
        superscript: Option<String>,
        caption: Option<String>,
    },
}

impl EquationItem {
    /// Create an operator item
    #[must_use]
    pub fn operator(symbol: impl Into<String>) -> Self {
        Self::Operator {
            symbol: symbol.into(),
        }
    }

    /// Create an undecorated emoji item
    #[must_use]
    pub fn emoji(symbol: impl Into<String>) -> Self {
        Self::Emoji {
            symbol: symbol.into(),
            coefficient: None,
            superscript: None,
            caption: None,
        }
    }

    /// The raw symbol of this item
    #[inline]
    #[must_use]
    pub fn symbol(&self) -> &str {
        match self {
            Self::Operator { symbol } | Self::Emoji { symbol, .. } => symbol,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Operator { .. })
    }
}

/// Reasons a round fails validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundDefect {
    #[error("equation has no items")]
    EmptyEquation,
    #[error("missing index {index} is out of range for an equation of {len} items")]
    MissingIndexOutOfRange { index: usize, len: usize },
    #[error("missing index {index} points at an operator")]
    MissingSlotIsOperator { index: usize },
    #[error("round has no options")]
    NoOptions,
    #[error("option {0:?} appears more than once")]
    DuplicateOption(String),
}

/// One puzzle unit: an equation with a missing emoji and candidate answers
///
/// `options[0]` is always the correct answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    id: u32,
    equation: Vec<EquationItem>,
    missing_index: usize,
    options: Vec<String>,
    rationale: String,
}

impl Round {
    /// Create a new validated round
    ///
    /// # Errors
    /// Returns `RoundDefect` if:
    /// - The equation is empty
    /// - `missing_index` is outside the equation
    /// - The missing slot is an operator
    /// - There are no options, or an option value is repeated
    ///
    /// # Examples
    /// ```
    /// use emoji_equations::core::{EquationItem, Round};
    ///
    /// let round = Round::new(
    ///     1,
    ///     vec![
    ///         EquationItem::emoji("🐝"),
    ///         EquationItem::operator("+"),
    ///         EquationItem::emoji("🌸"),
    ///         EquationItem::operator("="),
    ///         EquationItem::emoji("🍯"),
    ///     ],
    ///     4,
    ///     vec!["🍯".to_string(), "🍭".to_string()],
    ///     "Bees make honey.",
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(round.correct_answer(), "🍯");
    /// ```
    pub fn new(
        id: u32,
        equation: Vec<EquationItem>,
        missing_index: usize,
        options: Vec<String>,
        rationale: impl Into<String>,
    ) -> Result<Self, RoundDefect> {
        if equation.is_empty() {
            return Err(RoundDefect::EmptyEquation);
        }

        if missing_index >= equation.len() {
            return Err(RoundDefect::MissingIndexOutOfRange {
                index: missing_index,
                len: equation.len(),
            });
        }

        if equation[missing_index].is_operator() {
            return Err(RoundDefect::MissingSlotIsOperator {
                index: missing_index,
            });
        }

        if options.is_empty() {
            return Err(RoundDefect::NoOptions);
        }

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for option in &options {
            if !seen.insert(option.as_str()) {
                return Err(RoundDefect::DuplicateOption(option.clone()));
            }
        }

        Ok(Self {
            id,
            equation,
            missing_index,
            options,
            rationale: rationale.into(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn equation(&self) -> &[EquationItem] {
        &self.equation
    }

    #[inline]
    #[must_use]
    pub const fn missing_index(&self) -> usize {
        self.missing_index
    }

    /// The blanked-out item; always an `Emoji`
    #[inline]
    #[must_use]
    pub fn missing_item(&self) -> &EquationItem {
        &self.equation[self.missing_index]
    }

    /// Candidate answers in authored order (correct answer first)
    #[inline]
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[inline]
    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.options[0]
    }

    #[inline]
    #[must_use]
    pub fn rationale(&self) -> &str {
        &self.rationale
    }

    /// Whether `option` is one of this round's candidates
    #[must_use]
    pub fn offers(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.equation.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if i == self.missing_index {
                f.write_str("?")?;
            } else {
                f.write_str(item.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cow_equation() -> Vec<EquationItem> {
        vec![
            EquationItem::emoji("🐄"),
            EquationItem::operator("+"),
            EquationItem::emoji("🌿"),
            EquationItem::operator("="),
            EquationItem::emoji("🥛"),
        ]
    }

    fn options(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn round_creation_valid() {
        let round = Round::new(7, cow_equation(), 4, options(&["🥛", "🧀"]), "milk").unwrap();

        assert_eq!(round.id(), 7);
        assert_eq!(round.missing_index(), 4);
        assert_eq!(round.correct_answer(), "🥛");
        assert_eq!(round.missing_item().symbol(), "🥛");
        assert_eq!(round.rationale(), "milk");
        assert!(round.offers("🧀"));
        assert!(!round.offers("🍦"));
    }

    #[test]
    fn round_rejects_empty_equation() {
        let result = Round::new(1, Vec::new(), 0, options(&["🥛"]), "");
        assert_eq!(result, Err(RoundDefect::EmptyEquation));
    }

    #[test]
    fn round_rejects_missing_index_out_of_range() {
        let result = Round::new(1, cow_equation(), 5, options(&["🥛"]), "");
        assert_eq!(
            result,
            Err(RoundDefect::MissingIndexOutOfRange { index: 5, len: 5 })
        );
    }

    #[test]
    fn round_rejects_operator_slot() {
        let result = Round::new(1, cow_equation(), 1, options(&["+"]), "");
        assert_eq!(result, Err(RoundDefect::MissingSlotIsOperator { index: 1 }));
    }

    #[test]
    fn round_rejects_no_options() {
        let result = Round::new(1, cow_equation(), 4, Vec::new(), "");
        assert_eq!(result, Err(RoundDefect::NoOptions));
    }

    #[test]
    fn round_rejects_duplicate_options() {
        let result = Round::new(1, cow_equation(), 4, options(&["🥛", "🧀", "🥛"]), "");
        assert_eq!(result, Err(RoundDefect::DuplicateOption("🥛".to_string())));
    }

    #[test]
    fn round_display_hides_missing_slot() {
        let round = Round::new(1, cow_equation(), 4, options(&["🥛"]), "").unwrap();
        assert_eq!(round.to_string(), "🐄 + 🌿 = ?");
    }

    #[test]
    fn item_symbol_and_kind() {
        let op = EquationItem::operator("=");
        let emoji = EquationItem::emoji("🌈");

        assert!(op.is_operator());
        assert!(!emoji.is_operator());
        assert_eq!(op.symbol(), "=");
        assert_eq!(emoji.symbol(), "🌈");
    }
}
