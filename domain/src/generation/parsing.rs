//! Parsing and repair of model-generated question sets.
//!
//! Models are asked for a bare JSON array but often wrap it in prose or code
//! fences. The array is located by the first `[` and the last `]`; only that
//! slice is parsed. Each element is then repaired field by field so that a
//! usable [`Question`] always comes out:
//!
//! | Field | Missing / invalid becomes |
//! |-------|---------------------------|
//! | `id` | position + 1 |
//! | `topic` | requested topic |
//! | `difficulty` | requested difficulty, or a random one when mixed |
//! | `question` | empty string |
//! | `options` | `["Option A", "Option B", "Option C", "Option D"]` |
//! | `correct` | 0 |

use crate::core::difficulty::{Difficulty, DifficultySetting};
use crate::core::question::{OPTION_COUNT, Question};
use crate::quiz::settings::QuizSettings;
use rand::Rng;
use rand::seq::SliceRandom;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

/// Options substituted when the model returns unusable ones
pub const PLACEHOLDER_OPTIONS: [&str; OPTION_COUNT] =
    ["Option A", "Option B", "Option C", "Option D"];

/// Why a generated response could not be turned into questions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid response format")]
    InvalidFormat,

    #[error("No questions generated")]
    NoQuestions,
}

/// Slice from the first `[` to the last `]`, if both exist in that order
pub fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (end > start).then(|| &text[start..=end])
}

/// Parse a raw model response into repaired questions
pub fn parse_generated_questions<R: Rng + ?Sized>(
    text: &str,
    settings: &QuizSettings,
    rng: &mut R,
) -> Result<Vec<Question>, ParseError> {
    let slice = extract_json_array(text).ok_or(ParseError::InvalidFormat)?;
    let value: Value = serde_json::from_str(slice).map_err(|e| {
        warn!("Generated JSON did not parse: {}", e);
        ParseError::InvalidFormat
    })?;

    let items = match value.as_array() {
        Some(items) if !items.is_empty() => items,
        _ => return Err(ParseError::NoQuestions),
    };

    Ok(items
        .iter()
        .enumerate()
        .map(|(index, item)| repair_question(item, index, settings, rng))
        .collect())
}

/// Build a question from one generated JSON element, substituting bad fields
pub fn repair_question<R: Rng + ?Sized>(
    item: &Value,
    index: usize,
    settings: &QuizSettings,
    rng: &mut R,
) -> Question {
    let mut repaired = Vec::new();

    let id = item
        .get("id")
        .and_then(whole_number)
        .filter(|&id| id > 0)
        .and_then(|id| u32::try_from(id).ok())
        .unwrap_or_else(|| {
            repaired.push("id");
            index as u32 + 1
        });

    let topic = match item.get("topic").and_then(Value::as_str) {
        Some(topic) if !topic.is_empty() => topic.to_string(),
        _ => {
            repaired.push("topic");
            settings.topic.clone()
        }
    };

    let difficulty = item
        .get("difficulty")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<Difficulty>().ok())
        .unwrap_or_else(|| {
            repaired.push("difficulty");
            fallback_difficulty(settings.difficulty, rng)
        });

    let text = item
        .get("question")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let options = parse_options(item.get("options")).unwrap_or_else(|| {
        repaired.push("options");
        PLACEHOLDER_OPTIONS.map(String::from)
    });

    let correct = item
        .get("correct")
        .and_then(whole_number)
        .and_then(|c| usize::try_from(c).ok())
        .filter(|&c| c < OPTION_COUNT)
        .unwrap_or_else(|| {
            repaired.push("correct");
            0
        });

    if !repaired.is_empty() {
        warn!(index, fields = ?repaired, "Repaired generated question");
    }

    Question::from_repaired(id, topic, difficulty, text, options, correct)
}

fn fallback_difficulty<R: Rng + ?Sized>(requested: DifficultySetting, rng: &mut R) -> Difficulty {
    match requested.fixed() {
        Some(d) => d,
        None => *Difficulty::ALL.choose(rng).unwrap_or(&Difficulty::Easy),
    }
}

/// Non-negative integer, also accepting integral floats such as `2.0`
fn whole_number(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(f))
            .map(|f| f as u64)
    })
}

fn parse_options(value: Option<&Value>) -> Option<[String; OPTION_COUNT]> {
    let items = value?.as_array()?;
    if items.len() != OPTION_COUNT {
        return None;
    }
    let strings: Vec<String> = items
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect::<Option<_>>()?;
    strings.try_into().ok()
}
