//! Formatting utilities for equations and outcomes

use crate::core::{EquationItem, Round, RoundOutcome};
use rand::Rng;
use rand::seq::SliceRandom;

/// Placeholder shown in the missing slot
pub const MISSING_SLOT: &str = "❓";

/// Format an item as `[coefficient]symbol[^superscript]`
///
/// Captions are not included; see [`format_caption`].
#[must_use]
pub fn format_item(item: &EquationItem) -> String {
    match item {
        EquationItem::Operator { symbol } => symbol.clone(),
        EquationItem::Emoji {
            symbol,
            coefficient,
            superscript,
            ..
        } => {
            let mut text = String::new();
            if let Some(c) = coefficient {
                text.push_str(c);
            }
            text.push_str(symbol);
            if let Some(s) = superscript {
                text.push('^');
                text.push_str(s);
            }
            text
        }
    }
}

/// Caption of an item, if it has one
#[must_use]
pub fn format_caption(item: &EquationItem) -> Option<&str> {
    match item {
        EquationItem::Emoji {
            caption: Some(caption),
            ..
        } => Some(caption),
        _ => None,
    }
}

/// Format a round's equation on one line
///
/// The missing slot shows `fill` when given, otherwise the placeholder. A
/// filled slot keeps the hidden item's coefficient and superscript.
#[must_use]
pub fn format_equation(round: &Round, fill: Option<&str>) -> String {
    round
        .equation()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if i != round.missing_index() {
                return format_item(item);
            }
            match (fill, item) {
                (
                    Some(option),
                    EquationItem::Emoji {
                        coefficient,
                        superscript,
                        caption,
                        ..
                    },
                ) => format_item(&EquationItem::Emoji {
                    symbol: option.to_string(),
                    coefficient: coefficient.clone(),
                    superscript: superscript.clone(),
                    caption: caption.clone(),
                }),
                _ => MISSING_SLOT.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One-line summary of a resolved round
#[must_use]
pub fn outcome_summary(outcome: &RoundOutcome) -> String {
    if outcome.correct {
        let tries = if outcome.tries_used == 1 { "try" } else { "tries" };
        format!("Solved in {} {tries}", outcome.tries_used)
    } else {
        "Out of guesses".to_string()
    }
}

/// Options in a uniformly random display order
///
/// Judging never depends on this order.
#[must_use]
pub fn display_order<R: Rng + ?Sized>(round: &Round, rng: &mut R) -> Vec<String> {
    let mut options = round.options().to_vec();
    options.shuffle(rng);
    options
}
