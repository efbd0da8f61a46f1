//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod bank;
mod output;
mod provider;
mod quiz;

pub use bank::{FileBankConfig, FileLoggingConfig};
pub use output::{FileOutputConfig, FileOutputFormat};
pub use provider::{DEFAULT_GEMINI_ENDPOINT, FileProviderConfig, FileProviderKind};
pub use quiz::FileQuizConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("provider.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("quiz.question_count cannot be 0")]
    InvalidQuestionCount,

    #[error("provider.model cannot be empty")]
    EmptyModelName,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Question source settings
    pub provider: FileProviderConfig,
    /// Setup screen defaults and replay behavior
    pub quiz: FileQuizConfig,
    /// Local question bank
    pub bank: FileBankConfig,
    /// Print-mode output settings
    pub output: FileOutputConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Reject values that would make the application unusable
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.provider.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.quiz.question_count == 0 {
            return Err(ConfigValidationError::InvalidQuestionCount);
        }
        if self.provider.model.as_str().trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizzly_application::ReplayMode;
    use quizzly_domain::{DifficultySetting, Model, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[provider]
kind = "remote"
model = "gemini-2.5-flash-lite"
endpoint = "http://localhost:8080"
timeout_seconds = 20

[quiz]
topic = "Jazz"
question_count = 5
difficulty = "medium"
replay = "same"

[bank]
path = "extra-questions.json"

[output]
format = "full"
color = false

[logging]
file = "/tmp/quizzly-test.log"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.model, Model::Gemini25FlashLite);
        assert_eq!(config.provider.endpoint, "http://localhost:8080");
        assert_eq!(config.quiz.question_count, 5);
        assert_eq!(config.quiz.difficulty, DifficultySetting::Medium);
        assert_eq!(config.quiz.replay, ReplayMode::SameQuestions);
        assert_eq!(
            config.bank.path.as_deref(),
            Some(std::path::Path::new("extra-questions.json"))
        );
        assert_eq!(config.output.format, OutputFormat::Full);
        assert!(!config.output.color);
        assert!(config.logging.file.is_some());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[quiz]
difficulty = "easy"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.quiz.difficulty, DifficultySetting::Easy);
        // Defaults should apply
        assert_eq!(config.quiz.question_count, 10);
        assert_eq!(config.provider.kind, FileProviderKind::Remote);
        assert_eq!(config.provider.model, Model::Gemini25Flash);
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = FileConfig::default();
        config.provider.timeout_seconds = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));

        let mut config = FileConfig::default();
        config.quiz.question_count = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidQuestionCount)
        );

        let mut config = FileConfig::default();
        config.provider.model = Model::Custom(String::new());
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));
    }
}
