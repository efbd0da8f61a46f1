//! Question provider port
//!
//! A [`QuestionProvider`] turns [`QuizSettings`] into a list of questions.
//! Two strategies exist: a generative model behind an
//! [`LlmGateway`](super::llm_gateway::LlmGateway) and the local question bank.

use super::llm_gateway::GatewayError;
use async_trait::async_trait;
use quizzly_domain::{ParseError, Question, QuizSettings};
use std::time::Duration;
use thiserror::Error;

/// Message shown to the player whenever generation fails
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate questions. Please try again.";

/// Errors that can occur while obtaining questions
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Invalid response format")]
    InvalidResponseFormat,

    #[error("No questions generated")]
    NoQuestions,

    #[error("Generation timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("Generation cancelled")]
    Cancelled,
}

impl GenerationError {
    /// Player-facing text: the generic failure line plus the cause
    pub fn user_message(&self) -> String {
        format!("{} ({})", GENERATION_FAILED_MESSAGE, self)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, GenerationError::Cancelled)
    }
}

impl From<ParseError> for GenerationError {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::InvalidFormat => GenerationError::InvalidResponseFormat,
            ParseError::NoQuestions => GenerationError::NoQuestions,
        }
    }
}

/// Source of quiz questions
#[async_trait]
pub trait QuestionProvider: Send + Sync {
    /// Short name used in logs and progress output
    fn name(&self) -> &str;

    /// Topics this provider knows about, if it can list them
    fn topics(&self) -> Vec<String> {
        Vec::new()
    }

    /// Produce questions for the given settings
    async fn generate(&self, settings: &QuizSettings) -> Result<Vec<Question>, GenerationError>;
}
