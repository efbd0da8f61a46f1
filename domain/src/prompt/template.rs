//! Prompt template for question generation

use crate::core::difficulty::DifficultySetting;

/// Templates for the question-generation request
pub struct QuizPromptTemplate;

impl QuizPromptTemplate {
    /// System instruction sent alongside every generation request
    pub fn system() -> &'static str {
        r#"You are a quiz author who writes accurate, unambiguous multiple choice questions.
Every question has exactly one correct answer and three plausible distractors.
You reply with JSON only."#
    }

    /// One-line instruction describing the requested difficulty
    pub fn difficulty_instruction(difficulty: DifficultySetting) -> String {
        match difficulty.fixed() {
            Some(d) => format!("All questions should be {} difficulty", d),
            None => "Mix of easy, medium, and hard questions".to_string(),
        }
    }

    /// User prompt asking for `count` questions about `topic`
    pub fn generation_prompt(topic: &str, count: usize, difficulty: DifficultySetting) -> String {
        format!(
            r#"Generate exactly {count} multiple choice questions about "{topic}".

Requirements:
- {instruction}
- Each question must have exactly 4 options (A, B, C, D)
- Only one correct answer per question
- Questions should be diverse and interesting
- Avoid repetitive or overly similar questions

Return the response as a valid JSON array with this exact structure:
[
  {{
    "id": 1,
    "topic": "{topic}",
    "difficulty": "easy|medium|hard",
    "question": "Question text here?",
    "options": ["Option A", "Option B", "Option C", "Option D"],
    "correct": 0
  }}
]

Important:
- The "correct" field should be the index (0-3) of the correct answer in the options array
- Make sure the JSON is valid and properly formatted
- Do not include any text before or after the JSON array
- Each question should have a unique id starting from 1"#,
            instruction = Self::difficulty_instruction(difficulty),
        )
    }
}
