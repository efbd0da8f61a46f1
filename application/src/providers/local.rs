//! Local question bank strategy

use crate::ports::question_provider::{GenerationError, QuestionProvider};
use async_trait::async_trait;
use quizzly_domain::{Question, QuestionBank, QuizSettings};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::info;

/// Picks questions from a fixed bank; never fails
pub struct BankQuestionProvider {
    bank: Arc<QuestionBank>,
    rng: Mutex<StdRng>,
}

impl BankQuestionProvider {
    /// Provider seeded from OS entropy
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Provider with a fixed seed, for reproducible selections
    pub fn with_seed(bank: Arc<QuestionBank>, seed: u64) -> Self {
        Self {
            bank,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

#[async_trait]
impl QuestionProvider for BankQuestionProvider {
    fn name(&self) -> &str {
        "local bank"
    }

    fn topics(&self) -> Vec<String> {
        self.bank.topics()
    }

    async fn generate(&self, settings: &QuizSettings) -> Result<Vec<Question>, GenerationError> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let questions = self.bank.select(settings, &mut *rng);
        info!(
            "Selected {} of {} requested questions from the local bank",
            questions.len(),
            settings.question_count()
        );
        Ok(questions)
    }
}
