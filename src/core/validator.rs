//! Round answer judging
//!
//! Correctness is value equality against the round's first option. Display
//! order of the options never matters here.

use super::Round;

/// Verdict for one submitted option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Judgement {
    pub correct: bool,
}

/// Judge `selected` against `round`
///
/// Exact string comparison with `round.options()[0]`: no trimming, no case
/// folding. An option the round never offered is simply incorrect.
///
/// # Examples
/// ```
/// use emoji_equations::core::{EquationItem, Round, judge};
///
/// let round = Round::new(
///     1,
///     vec![EquationItem::emoji("☀️"), EquationItem::operator("="), EquationItem::emoji("🌞")],
///     0,
///     vec!["☀️".to_string(), "🌙".to_string()],
///     "",
/// )
/// .unwrap();
///
/// assert!(judge(&round, "☀️").correct);
/// assert!(!judge(&round, "🌙").correct);
/// ```
#[inline]
#[must_use]
pub fn judge(round: &Round, selected: &str) -> Judgement {
    Judgement {
        correct: selected == round.correct_answer(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EquationItem;

    fn abc_round() -> Round {
        Round::new(
            1,
            vec![
                EquationItem::emoji("a"),
                EquationItem::operator("+"),
                EquationItem::emoji("b"),
            ],
            2,
            vec!["b".to_string(), "B".to_string(), "c".to_string()],
            "",
        )
        .unwrap()
    }

    #[test]
    fn judge_correct_option() {
        assert!(judge(&abc_round(), "b").correct);
    }

    #[test]
    fn judge_wrong_option() {
        assert!(!judge(&abc_round(), "c").correct);
    }

    #[test]
    fn judge_is_case_sensitive() {
        assert!(!judge(&abc_round(), "B").correct);
    }

    #[test]
    fn judge_does_not_trim() {
        assert!(!judge(&abc_round(), " b").correct);
        assert!(!judge(&abc_round(), "b ").correct);
    }

    #[test]
    fn judge_unknown_option_is_incorrect() {
        let round = abc_round();
        assert!(!round.offers("zzz"));
        assert!(!judge(&round, "zzz").correct);
    }
}
