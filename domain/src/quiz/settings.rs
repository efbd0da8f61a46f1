//! Quiz settings value object

use crate::core::difficulty::DifficultySetting;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Question counts offered on the setup screen
pub const QUESTION_COUNT_CHOICES: [usize; 4] = [5, 10, 15, 20];

/// Settings chosen by the player before a quiz starts (Value Object)
///
/// The topic may be empty or `"mixed"`, which disables topic filtering for
/// the local bank. Whether an empty topic is acceptable to *start* a quiz is
/// decided by the orchestrator, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSettings {
    pub topic: String,
    pub question_count: NonZeroUsize,
    pub difficulty: DifficultySetting,
}

impl QuizSettings {
    pub fn new(
        topic: impl Into<String>,
        question_count: usize,
        difficulty: DifficultySetting,
    ) -> Result<Self, DomainError> {
        let question_count =
            NonZeroUsize::new(question_count).ok_or(DomainError::InvalidQuestionCount)?;
        Ok(Self {
            topic: topic.into(),
            question_count,
            difficulty,
        })
    }

    pub fn question_count(&self) -> usize {
        self.question_count.get()
    }

    /// Whether the topic should narrow the candidate set
    ///
    /// False for an empty topic and for the literal "mixed" (any case).
    pub fn filters_topic(&self) -> bool {
        !self.topic.is_empty() && !self.topic.eq_ignore_ascii_case("mixed")
    }

    /// Copy of these settings with the topic trimmed, failing if nothing is left
    pub fn validated(&self) -> Result<Self, DomainError> {
        let topic = self.topic.trim();
        if topic.is_empty() {
            return Err(DomainError::EmptyTopic);
        }
        Ok(Self {
            topic: topic.to_string(),
            ..self.clone()
        })
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            topic: String::new(),
            question_count: NonZeroUsize::new(10).unwrap_or(NonZeroUsize::MIN),
            difficulty: DifficultySetting::Mixed,
        }
    }
}
