//! Quiz defaults from TOML (`[quiz]` section)

use quizzly_application::ReplayMode;
use quizzly_domain::{DifficultySetting, DomainError, QuizSettings};
use serde::{Deserialize, Serialize};

/// Raw quiz configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// Topic pre-filled on the setup screen
    pub topic: String,
    pub question_count: usize,
    pub difficulty: DifficultySetting,
    pub replay: ReplayMode,
    /// Fixed RNG seed for reproducible selection
    pub seed: Option<u64>,
}

impl Default for FileQuizConfig {
    fn default() -> Self {
        Self {
            topic: String::new(),
            question_count: 10,
            difficulty: DifficultySetting::Mixed,
            replay: ReplayMode::default(),
            seed: None,
        }
    }
}

impl FileQuizConfig {
    /// Initial settings for the setup screen
    pub fn to_settings(&self) -> Result<QuizSettings, DomainError> {
        QuizSettings::new(self.topic.clone(), self.question_count, self.difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_deserialize() {
        let toml_str = r#"
[quiz]
topic = "Volcanoes"
question_count = 15
difficulty = "hard"
replay = "regenerate"
seed = 42
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.quiz.topic, "Volcanoes");
        assert_eq!(config.quiz.difficulty, DifficultySetting::Hard);
        assert_eq!(config.quiz.replay, ReplayMode::Regenerate);
        assert_eq!(config.quiz.seed, Some(42));

        let settings = config.quiz.to_settings().unwrap();
        assert_eq!(settings.question_count(), 15);
    }

    #[test]
    fn test_zero_count_rejected() {
        let config = FileQuizConfig {
            question_count: 0,
            ..Default::default()
        };
        assert!(config.to_settings().is_err());
    }
}
