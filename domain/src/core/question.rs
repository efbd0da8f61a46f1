//! Question value object

use super::difficulty::Difficulty;
use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Number of answer options every question has
pub const OPTION_COUNT: usize = 4;

/// Points awarded for a correct answer
pub const POINTS_PER_QUESTION: u32 = 10;

/// A multiple-choice quiz question (Value Object)
///
/// Immutable once built. The option count is fixed by the array type and the
/// correct index is checked on construction, including when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionRecord", into = "QuestionRecord")]
pub struct Question {
    id: u32,
    topic: String,
    difficulty: Difficulty,
    text: String,
    options: [String; OPTION_COUNT],
    correct: usize,
}

impl Question {
    /// Create a new question
    ///
    /// Fails if `id` is zero or `correct` is not a valid option index.
    pub fn new(
        id: u32,
        topic: impl Into<String>,
        difficulty: Difficulty,
        text: impl Into<String>,
        options: [String; OPTION_COUNT],
        correct: usize,
    ) -> Result<Self, DomainError> {
        if id == 0 {
            return Err(DomainError::InvalidQuestion(
                "id must be a positive integer".to_string(),
            ));
        }
        if correct >= OPTION_COUNT {
            return Err(DomainError::InvalidQuestion(format!(
                "correct index {} is out of range 0..={}",
                correct,
                OPTION_COUNT - 1
            )));
        }
        Ok(Self {
            id,
            topic: topic.into(),
            difficulty,
            text: text.into(),
            options,
            correct,
        })
    }

    /// Build from fields the caller has already brought into range
    pub(crate) fn from_repaired(
        id: u32,
        topic: String,
        difficulty: Difficulty,
        text: String,
        options: [String; OPTION_COUNT],
        correct: usize,
    ) -> Self {
        debug_assert!(id > 0 && correct < OPTION_COUNT);
        Self {
            id,
            topic,
            difficulty,
            text,
            options,
            correct,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The prompt text shown to the player
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }

    /// Index of the correct option (always `< OPTION_COUNT`)
    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.correct]
    }

    pub fn is_correct(&self, answer: usize) -> bool {
        answer == self.correct
    }

    /// Whether all four options are distinct display strings
    pub fn has_distinct_options(&self) -> bool {
        self.options
            .iter()
            .enumerate()
            .all(|(i, a)| self.options[i + 1..].iter().all(|b| a != b))
    }

    /// Seconds allowed to answer this question
    pub fn time_limit_secs(&self) -> u32 {
        self.difficulty.time_limit_secs()
    }

    /// Letter label for an option index ("A".."D")
    pub fn option_label(index: usize) -> char {
        (b'A' + (index % OPTION_COUNT) as u8) as char
    }

    /// Case-insensitive topic match against the topic and prompt text
    pub fn matches_topic(&self, needle_lower: &str) -> bool {
        self.topic.to_lowercase().contains(needle_lower)
            || self.text.to_lowercase().contains(needle_lower)
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Wire shape of a question (JSON bank files and generated output)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: u32,
    pub topic: String,
    pub difficulty: Difficulty,
    pub question: String,
    pub options: [String; OPTION_COUNT],
    pub correct: usize,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = DomainError;

    fn try_from(r: QuestionRecord) -> Result<Self, Self::Error> {
        Question::new(r.id, r.topic, r.difficulty, r.question, r.options, r.correct)
    }
}

impl From<Question> for QuestionRecord {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            topic: q.topic,
            difficulty: q.difficulty,
            question: q.text,
            options: q.options,
            correct: q.correct,
        }
    }
}
