//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Invalid difficulty: {0}")]
    InvalidDifficulty(String),

    #[error("Question count must be a positive integer")]
    InvalidQuestionCount,

    #[error("Question bank is empty")]
    EmptyBank,

    #[error("Duplicate question id in bank: {0}")]
    DuplicateQuestionId(u32),

    #[error("Cannot start a session without questions")]
    EmptySession,

    #[error("Please enter a topic")]
    EmptyTopic,
}
