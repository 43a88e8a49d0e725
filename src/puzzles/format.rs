//! Puzzle file format
//!
//! A puzzle file holds one day's rounds as JSON, either as a bare array or
//! wrapped in an object:
//!
//! ```json
//! {
//!   "date": "2025-03-10",
//!   "rounds": [
//!     {
//!       "id": 1,
//!       "equation": [{ "emoji": "🐄" }, { "text": "+" }, { "emoji": "🌿", "caption": "grass" }],
//!       "missingIndex": 2,
//!       "options": ["🌿", "🍔"],
//!       "rationale": "Cows eat grass."
//!     }
//!   ]
//! }
//! ```
//!
//! `id` is optional and defaults to the round's 1-based position.

use crate::core::{EquationItem, Round};
use crate::error::{QuizError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use tracing::{debug, warn};

/// A parsed, validated puzzle day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Date declared inside the file, if any
    pub date: Option<NaiveDate>,
    pub rounds: Vec<Round>,
}

#[derive(Debug, Deserialize)]
struct PuzzleFile {
    #[serde(default)]
    date: Option<NaiveDate>,
    rounds: Vec<RawRound>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRound {
    #[serde(default)]
    id: Option<u32>,
    equation: Vec<RawItem>,
    missing_index: usize,
    options: Vec<String>,
    rationale: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawItem {
    Emoji {
        emoji: String,
        #[serde(default, deserialize_with = "optional_label")]
        coefficient: Option<String>,
        #[serde(default, deserialize_with = "optional_label")]
        superscript: Option<String>,
        #[serde(default)]
        caption: Option<String>,
    },
    Text {
        text: String,
    },
}

impl From<RawItem> for EquationItem {
    fn from(raw: RawItem) -> Self {
        match raw {
            RawItem::Emoji {
                emoji,
                coefficient,
                superscript,
                caption,
            } => Self::Emoji {
                symbol: emoji,
                coefficient,
                superscript,
                caption,
            },
            RawItem::Text { text } => Self::Operator { symbol: text },
        }
    }
}

/// Accept `"3"` as well as `3` for numeric decorations
fn optional_label<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Label {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Label>::deserialize(deserializer)?.map(|label| match label {
        Label::Text(text) => text,
        Label::Number(number) => number.to_string(),
    }))
}

/// Parse and validate one puzzle file
///
/// # Errors
///
/// - `QuizError::Parse` if the text is not JSON or a required field is missing
/// - `QuizError::MalformedRound` if a round breaks a content invariant
/// - `QuizError::InvalidInput` if the file contains no rounds
///
/// # Examples
/// ```
/// use emoji_equations::puzzles::parse_puzzle;
///
/// let json = r#"[{
///     "equation": [{"emoji": "🐝"}, {"text": "="}, {"emoji": "🍯"}],
///     "missingIndex": 2,
///     "options": ["🍯", "🍭"],
///     "rationale": "Bees make honey."
/// }]"#;
///
/// let puzzle = parse_puzzle(json).unwrap();
/// assert_eq!(puzzle.rounds.len(), 1);
/// assert_eq!(puzzle.rounds[0].id(), 1);
/// ```
pub fn parse_puzzle(json: &str) -> Result<Puzzle> {
    // Deserialize straight from the text so errors keep their line and column
    let file = if json.trim_start().starts_with('[') {
        PuzzleFile {
            date: None,
            rounds: serde_json::from_str(json)?,
        }
    } else {
        serde_json::from_str(json)?
    };

    if file.rounds.is_empty() {
        return Err(QuizError::InvalidInput(
            "puzzle file contains no rounds".to_string(),
        ));
    }

    let rounds = file
        .rounds
        .into_iter()
        .enumerate()
        .map(|(index, raw)| build_round(index, raw))
        .collect::<Result<Vec<_>>>()?;

    debug!(rounds = rounds.len(), date = ?file.date, "Parsed puzzle");

    Ok(Puzzle {
        date: file.date,
        rounds,
    })
}

fn build_round(index: usize, raw: RawRound) -> Result<Round> {
    let id = raw.id.unwrap_or_else(|| u32::try_from(index + 1).unwrap_or(u32::MAX));
    let equation: Vec<EquationItem> = raw.equation.into_iter().map(Into::into).collect();

    let round = Round::new(id, equation, raw.missing_index, raw.options, raw.rationale)
        .map_err(|defect| QuizError::MalformedRound {
            round: index,
            defect,
        })?;

    if round.missing_item().symbol() != round.correct_answer() {
        warn!(
            round = index,
            hidden = round.missing_item().symbol(),
            answer = round.correct_answer(),
            "Correct option differs from the hidden emoji"
        );
    }

    Ok(round)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RoundDefect;

    const WRAPPED: &str = r#"{
        "date": "2025-03-10",
        "rounds": [
            {
                "id": 9,
                "equation": [
                    { "emoji": "🍎", "coefficient": "3" },
                    { "text": "-" },
                    { "emoji": "🍎" },
                    { "text": "=" },
                    { "emoji": "🍎", "coefficient": 2, "superscript": "x", "caption": "two" }
                ],
                "missingIndex": 2,
                "options": ["🍎", "🍐"],
                "rationale": "3 - 1 = 2"
            }
        ]
    }"#;

    fn bare_round(missing_index: usize, options: &str) -> String {
        format!(
            r#"[{{
                "equation": [{{"emoji": "a"}}, {{"text": "+"}}, {{"emoji": "b"}}],
                "missingIndex": {missing_index},
                "options": {options},
                "rationale": ""
            }}]"#
        )
    }

    #[test]
    fn parse_wrapped_file() {
        let puzzle = parse_puzzle(WRAPPED).unwrap();

        assert_eq!(puzzle.date, NaiveDate::from_ymd_opt(2025, 3, 10));
        assert_eq!(puzzle.rounds.len(), 1);

        let round = &puzzle.rounds[0];
        assert_eq!(round.id(), 9);
        assert_eq!(round.missing_index(), 2);
        assert_eq!(round.options(), ["🍎", "🍐"]);
        assert_eq!(round.rationale(), "3 - 1 = 2");
        assert_eq!(
            round.equation()[0],
            EquationItem::Emoji {
                symbol: "🍎".to_string(),
                coefficient: Some("3".to_string()),
                superscript: None,
                caption: None,
            }
        );
        assert_eq!(round.equation()[1], EquationItem::operator("-"));
    }

    #[test]
    fn numeric_coefficient_becomes_text() {
        let puzzle = parse_puzzle(WRAPPED).unwrap();
        let EquationItem::Emoji {
            coefficient,
            superscript,
            caption,
            ..
        } = &puzzle.rounds[0].equation()[4]
        else {
            panic!("expected emoji item");
        };

        assert_eq!(coefficient.as_deref(), Some("2"));
        assert_eq!(superscript.as_deref(), Some("x"));
        assert_eq!(caption.as_deref(), Some("two"));
    }

    #[test]
    fn parse_bare_array_assigns_ids() {
        let json = r#"[
            {
                "equation": [{"emoji": "a"}, {"text": "+"}, {"emoji": "b"}],
                "missingIndex": 2,
                "options": ["b", "c"],
                "rationale": ""
            },
            {
                "equation": [{"emoji": "a"}, {"text": "+"}, {"emoji": "b"}],
                "missingIndex": 0,
                "options": ["a", "c"],
                "rationale": ""
            }
        ]"#;
        let puzzle = parse_puzzle(json).unwrap();

        assert!(puzzle.date.is_none());
        let ids: Vec<u32> = puzzle.rounds.iter().map(Round::id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn missing_field_is_parse_error() {
        let json = r#"[{ "equation": [{"emoji": "a"}], "options": ["a"], "rationale": "" }]"#;
        assert!(matches!(parse_puzzle(json), Err(QuizError::Parse { .. })));
    }

    #[test]
    fn parse_errors_keep_their_location() {
        let json = "[{\n  \"equation\": [{\"foo\": 1}],\n  \"missingIndex\": 0,\n  \"options\": [\"a\"],\n  \"rationale\": \"\"\n}]";

        let Err(QuizError::Parse { source }) = parse_puzzle(json) else {
            panic!("expected a parse error");
        };
        assert_eq!(source.line(), 2);
        assert!(source.column() > 0);
    }

    #[test]
    fn wrapped_missing_field_has_location() {
        let json = r#"{ "date": "2025-03-10", "rounds": [{ "equation": [], "options": [] }] }"#;

        let Err(QuizError::Parse { source }) = parse_puzzle(json) else {
            panic!("expected a parse error");
        };
        assert_eq!(source.line(), 1);
        assert!(source.column() > 0);
    }

    #[test]
    fn invalid_json_is_parse_error() {
        assert!(matches!(parse_puzzle("{not json"), Err(QuizError::Parse { .. })));
    }

    #[test]
    fn out_of_range_index_is_malformed() {
        let result = parse_puzzle(&bare_round(3, r#"["b"]"#));
        assert!(matches!(
            result,
            Err(QuizError::MalformedRound {
                round: 0,
                defect: RoundDefect::MissingIndexOutOfRange { index: 3, len: 3 }
            })
        ));
    }

    #[test]
    fn operator_slot_is_malformed() {
        let result = parse_puzzle(&bare_round(1, r#"["+"]"#));
        assert!(matches!(
            result,
            Err(QuizError::MalformedRound {
                defect: RoundDefect::MissingSlotIsOperator { index: 1 },
                ..
            })
        ));
    }

    #[test]
    fn duplicate_options_are_malformed() {
        let result = parse_puzzle(&bare_round(2, r#"["b", "c", "b"]"#));
        assert!(matches!(
            result,
            Err(QuizError::MalformedRound {
                defect: RoundDefect::DuplicateOption(_),
                ..
            })
        ));
    }

    #[test]
    fn empty_options_are_malformed() {
        let result = parse_puzzle(&bare_round(2, "[]"));
        assert!(matches!(
            result,
            Err(QuizError::MalformedRound {
                defect: RoundDefect::NoOptions,
                ..
            })
        ));
    }

    #[test]
    fn empty_round_list_is_invalid_input() {
        assert!(matches!(parse_puzzle("[]"), Err(QuizError::InvalidInput(_))));
        assert!(matches!(
            parse_puzzle(r#"{"rounds": []}"#),
            Err(QuizError::InvalidInput(_))
        ));
    }
}
