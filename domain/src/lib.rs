//! Domain layer for quizzly
//!
//! This crate contains the core quiz logic: question value objects, the
//! question bank, the per-question session state machine and the parsing of
//! model-generated question sets. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question Bank
//!
//! A fixed collection of pre-authored questions. Selection filters by topic
//! and difficulty, falls back to the whole bank when nothing matches, then
//! shuffles and truncates.
//!
//! ## Quiz Session
//!
//! One attempt at a list of questions: `AwaitingAnswer -> ShowingFeedback`
//! per question, ending in `Completed` with a [`QuizResult`].

pub mod bank;
pub mod config;
pub mod core;
pub mod generation;
pub mod prompt;
pub mod quiz;

// Re-export commonly used types
pub use bank::QuestionBank;
pub use config::OutputFormat;
pub use core::{
    difficulty::{Difficulty, DifficultySetting},
    error::DomainError,
    model::Model,
    question::{OPTION_COUNT, POINTS_PER_QUESTION, Question, QuestionRecord},
};
pub use generation::{ParseError, parse_generated_questions};
pub use prompt::QuizPromptTemplate;
pub use quiz::{
    result::{PerformanceTier, QuizResult, calculate_score},
    session::{AdvanceOutcome, AnswerOutcome, QuizSession, SessionPhase, TickOutcome},
    settings::{QUESTION_COUNT_CHOICES, QuizSettings},
};
