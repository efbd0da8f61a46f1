//! Remote question generation
//!
//! Turning free-form model output into [`Question`](crate::Question) values.

pub mod parsing;

pub use parsing::{
    PLACEHOLDER_OPTIONS, ParseError, extract_json_array, parse_generated_questions,
    repair_question,
};
