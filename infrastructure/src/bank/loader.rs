//! Question bank loader

use quizzly_domain::{DomainError, Question, QuestionBank};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Bank bundled with the binary
const EMBEDDED_BANK: &str = include_str!("../../data/questions.json");

/// Errors that can occur while loading a question bank
#[derive(Error, Debug)]
pub enum BankLoadError {
    #[error("Failed to read question bank {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid question bank JSON in {origin}: {source}")]
    Parse {
        origin: String,
        source: serde_json::Error,
    },

    #[error("Question {id} in {origin} has duplicate options")]
    DuplicateOptions { origin: String, id: u32 },

    #[error("Invalid question bank {origin}: {source}")]
    Invalid { origin: String, source: DomainError },
}

/// Loads question banks from JSON
pub struct BankLoader;

impl BankLoader {
    /// Load the configured bank, or the bundled one when no path is given
    pub fn load(path: Option<&Path>) -> Result<QuestionBank, BankLoadError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::embedded(),
        }
    }

    pub fn embedded() -> Result<QuestionBank, BankLoadError> {
        let bank = Self::from_json(EMBEDDED_BANK, "bundled bank")?;
        debug!("Loaded bundled bank with {} questions", bank.len());
        Ok(bank)
    }

    pub fn from_path(path: &Path) -> Result<QuestionBank, BankLoadError> {
        let json = std::fs::read_to_string(path).map_err(|source| BankLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let bank = Self::from_json(&json, &path.display().to_string())?;
        info!(
            "Loaded {} questions from {}",
            bank.len(),
            path.display()
        );
        Ok(bank)
    }

    /// Parse and validate a JSON array of questions
    pub fn from_json(json: &str, origin: &str) -> Result<QuestionBank, BankLoadError> {
        let questions: Vec<Question> =
            serde_json::from_str(json).map_err(|source| BankLoadError::Parse {
                origin: origin.to_string(),
                source,
            })?;

        if let Some(q) = questions.iter().find(|q| !q.has_distinct_options()) {
            return Err(BankLoadError::DuplicateOptions {
                origin: origin.to_string(),
                id: q.id(),
            });
        }

        QuestionBank::new(questions).map_err(|source| BankLoadError::Invalid {
            origin: origin.to_string(),
            source,
        })
    }
}
