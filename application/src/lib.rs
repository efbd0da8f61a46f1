//! Application layer for quizzly
//!
//! This crate contains use cases, port definitions, the question provider
//! strategies and application configuration. It depends only on the domain
//! layer.

pub mod config;
pub mod ports;
pub mod providers;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BehaviorConfig, ReplayMode};
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    progress::{NoProgress, ProgressNotifier},
    question_provider::{GENERATION_FAILED_MESSAGE, GenerationError, QuestionProvider},
};
pub use providers::{BankQuestionProvider, LlmQuestionProvider};
pub use use_cases::countdown::{Countdown, CountdownHandle, TICK_PERIOD, next_tick};
pub use use_cases::orchestrator::{
    PendingGeneration, QuizError, QuizOrchestrator, QuizPhase, Replay,
};
