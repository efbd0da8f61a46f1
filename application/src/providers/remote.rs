//! Generative model strategy
//!
//! Sends the quiz prompt through an [`LlmGateway`] and repairs whatever JSON
//! comes back into a usable question list.

use crate::config::BehaviorConfig;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::question_provider::{GenerationError, QuestionProvider};
use async_trait::async_trait;
use quizzly_domain::{Model, Question, QuizPromptTemplate, QuizSettings, parse_generated_questions};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};

/// Asks a model for questions
pub struct LlmQuestionProvider {
    gateway: Arc<dyn LlmGateway>,
    model: Model,
    behavior: BehaviorConfig,
    rng: Mutex<StdRng>,
}

impl LlmQuestionProvider {
    pub fn new(gateway: Arc<dyn LlmGateway>, model: Model) -> Self {
        Self {
            gateway,
            model,
            behavior: BehaviorConfig::default(),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    /// Seed the RNG used when repairing missing difficulties
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    async fn request(&self, prompt: &str) -> Result<String, GatewayError> {
        let session = self
            .gateway
            .create_session_with_system_prompt(&self.model, QuizPromptTemplate::system())
            .await?;
        session.send(prompt).await
    }
}

#[async_trait]
impl QuestionProvider for LlmQuestionProvider {
    fn name(&self) -> &str {
        self.model.as_str()
    }

    async fn generate(&self, settings: &QuizSettings) -> Result<Vec<Question>, GenerationError> {
        info!(
            "Requesting {} {} questions about '{}' from {}",
            settings.question_count(),
            settings.difficulty,
            settings.topic,
            self.model
        );

        let prompt = QuizPromptTemplate::generation_prompt(
            &settings.topic,
            settings.question_count(),
            settings.difficulty,
        );

        let text = match self.behavior.timeout {
            Some(limit) => tokio::time::timeout(limit, self.request(&prompt))
                .await
                .map_err(|_| {
                    warn!("Generation timed out after {:?}", limit);
                    GenerationError::Timeout(limit)
                })??,
            None => self.request(&prompt).await?,
        };
        debug!("Received {} bytes from {}", text.len(), self.model);

        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let questions = parse_generated_questions(&text, settings, &mut *rng).map_err(|e| {
            warn!("Could not use response from {}: {}", self.model, e);
            GenerationError::from(e)
        })?;

        if questions.len() != settings.question_count() {
            debug!(
                "Model returned {} questions, {} requested",
                questions.len(),
                settings.question_count()
            );
        }
        Ok(questions)
    }
}
