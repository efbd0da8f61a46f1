//! Quiz orchestrator use case
//!
//! Top-level flow controller: `Setup -> Active -> Results`, with a reset edge
//! back to `Setup` and a replay edge back to `Active`.
//!
//! Generation is split in two so an event loop can run the provider call on a
//! spawned task:
//!
//! 1. [`QuizOrchestrator::begin_generation`] validates the settings and hands
//!    out a [`PendingGeneration`] (request id + cancellation token)
//! 2. [`PendingGeneration::run`] performs the provider call
//! 3. [`QuizOrchestrator::finish_generation`] applies the result, ignoring
//!    anything but the latest request
//!
//! [`QuizOrchestrator::start_quiz`] composes the three for callers that can
//! simply await.

use crate::config::{BehaviorConfig, ReplayMode};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::question_provider::{GenerationError, QuestionProvider};
use quizzly_domain::{
    AdvanceOutcome, AnswerOutcome, DomainError, Question, QuizResult, QuizSession, QuizSettings,
    TickOutcome,
};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Screen-level phase of the quiz flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Setup,
    Active,
    Results,
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuizPhase::Setup => "setup",
            QuizPhase::Active => "active",
            QuizPhase::Results => "results",
        };
        f.write_str(name)
    }
}

/// Errors surfaced by the orchestrator
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("{0}")]
    Validation(#[from] DomainError),

    #[error("{}", .0.user_message())]
    Generation(#[from] GenerationError),

    #[error("Cannot {operation} during the {phase} phase")]
    InvalidPhase {
        operation: &'static str,
        phase: QuizPhase,
    },
}

/// An issued generation request
#[derive(Debug, Clone)]
pub struct PendingGeneration {
    pub id: u64,
    pub settings: QuizSettings,
    pub cancel: CancellationToken,
}

impl PendingGeneration {
    /// Run the provider call, stopping early if the request is cancelled
    pub async fn run(
        self,
        provider: Arc<dyn QuestionProvider>,
    ) -> (u64, Result<Vec<Question>, GenerationError>) {
        let result = tokio::select! {
            _ = self.cancel.cancelled() => Err(GenerationError::Cancelled),
            result = provider.generate(&self.settings) => result,
        };
        (self.id, result)
    }
}

/// Result of asking to play again
#[derive(Debug)]
pub enum Replay {
    /// A fresh session on the same questions is active
    Restarted,
    /// A new generation request was issued; the flow is back in setup
    Generating(PendingGeneration),
}

struct InFlight {
    id: u64,
    cancel: CancellationToken,
}

/// Owns the quiz flow state for one player
pub struct QuizOrchestrator {
    provider: Arc<dyn QuestionProvider>,
    behavior: BehaviorConfig,
    progress: Arc<dyn ProgressNotifier>,
    phase: QuizPhase,
    settings: Option<QuizSettings>,
    questions: Vec<Question>,
    session: Option<QuizSession>,
    result: Option<QuizResult>,
    error: Option<String>,
    in_flight: Option<InFlight>,
    next_request_id: u64,
}

impl QuizOrchestrator {
    pub fn new(provider: Arc<dyn QuestionProvider>, behavior: BehaviorConfig) -> Self {
        Self {
            provider,
            behavior,
            progress: Arc::new(NoProgress),
            phase: QuizPhase::Setup,
            settings: None,
            questions: Vec::new(),
            session: None,
            result: None,
            error: None,
            in_flight: None,
            next_request_id: 1,
        }
    }

    pub fn with_progress(mut self, progress: Arc<dyn ProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    // ==================== Accessors ====================

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn provider(&self) -> Arc<dyn QuestionProvider> {
        Arc::clone(&self.provider)
    }

    pub fn replay_mode(&self) -> ReplayMode {
        self.behavior.replay
    }

    pub fn settings(&self) -> Option<&QuizSettings> {
        self.settings.as_ref()
    }

    /// Question list of the current (or last) quiz
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    /// Dismissible message shown on the setup screen
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a generation request is outstanding
    pub fn is_generating(&self) -> bool {
        self.in_flight.is_some()
    }

    // ==================== Setup ====================

    /// Validate settings and issue a generation request
    ///
    /// A request already in flight is cancelled and superseded.
    pub fn begin_generation(
        &mut self,
        settings: QuizSettings,
    ) -> Result<PendingGeneration, QuizError> {
        if self.phase == QuizPhase::Active {
            return Err(QuizError::InvalidPhase {
                operation: "start a quiz",
                phase: self.phase,
            });
        }

        let settings = settings.validated().map_err(|e| {
            self.error = Some(e.to_string());
            QuizError::Validation(e)
        })?;

        self.cancel_in_flight();
        self.phase = QuizPhase::Setup;
        self.error = None;
        self.session = None;
        self.result = None;

        let id = self.next_request_id;
        self.next_request_id += 1;
        let cancel = CancellationToken::new();
        self.in_flight = Some(InFlight {
            id,
            cancel: cancel.clone(),
        });
        self.settings = Some(settings.clone());

        info!(
            request = id,
            "Generating {} questions on '{}' via {}",
            settings.question_count(),
            settings.topic,
            self.provider.name()
        );
        self.progress
            .on_generation_start(self.provider.name(), &settings);

        Ok(PendingGeneration {
            id,
            settings,
            cancel,
        })
    }

    /// Apply the outcome of a generation request
    ///
    /// Returns `Ok(true)` when a session became active and `Ok(false)` when the
    /// result was ignored (stale id or cancelled). A failure leaves the flow in
    /// setup with a dismissible message.
    pub fn finish_generation(
        &mut self,
        id: u64,
        result: Result<Vec<Question>, GenerationError>,
    ) -> Result<bool, QuizError> {
        match &self.in_flight {
            Some(in_flight) if in_flight.id == id && !in_flight.cancel.is_cancelled() => {}
            _ => {
                debug!(request = id, "Ignoring stale generation result");
                return Ok(false);
            }
        }
        self.in_flight = None;

        let session = result.and_then(|questions| {
            QuizSession::new(questions).map_err(|_| GenerationError::NoQuestions)
        });

        match session {
            Ok(session) => {
                let count = session.total_questions();
                self.progress.on_generation_complete(true, count);
                info!(request = id, "Quiz started with {} questions", count);
                self.questions = session.questions().to_vec();
                self.session = Some(session);
                self.phase = QuizPhase::Active;
                Ok(true)
            }
            Err(GenerationError::Cancelled) => {
                self.progress.on_generation_complete(false, 0);
                debug!(request = id, "Generation cancelled");
                Ok(false)
            }
            Err(e) => {
                self.progress.on_generation_complete(false, 0);
                warn!(request = id, "Generation failed: {}", e);
                self.error = Some(e.user_message());
                self.phase = QuizPhase::Setup;
                Err(QuizError::Generation(e))
            }
        }
    }

    /// Validate, generate and start a quiz in one call
    pub async fn start_quiz(&mut self, settings: QuizSettings) -> Result<(), QuizError> {
        let pending = self.begin_generation(settings)?;
        let (id, result) = pending.run(self.provider()).await;
        self.finish_generation(id, result).map(|_| ())
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    // ==================== Active ====================

    pub fn tick(&mut self) -> TickOutcome {
        match self.session.as_mut() {
            Some(session) => session.tick(),
            None => TickOutcome::Ignored,
        }
    }

    pub fn select_answer(&mut self, index: usize) -> AnswerOutcome {
        match self.session.as_mut() {
            Some(session) => session.select_answer(index),
            None => AnswerOutcome::Ignored,
        }
    }

    /// Move past the feedback screen; the last question completes the quiz
    pub fn advance(&mut self) -> AdvanceOutcome {
        let outcome = match self.session.as_mut() {
            Some(session) => session.advance(),
            None => return AdvanceOutcome::Ignored,
        };
        if let AdvanceOutcome::Completed(result) = outcome
            && let Err(e) = self.complete_quiz(result.score, result.total_questions)
        {
            warn!("Could not complete quiz: {}", e);
        }
        outcome
    }

    /// Active -> Results
    pub fn complete_quiz(&mut self, score: u32, total: usize) -> Result<QuizResult, QuizError> {
        if self.phase != QuizPhase::Active {
            return Err(QuizError::InvalidPhase {
                operation: "complete a quiz",
                phase: self.phase,
            });
        }
        let result = QuizResult::new(score, total);
        info!(
            "Quiz completed: {}/{} ({}%)",
            result.score,
            result.max_score(),
            result.percentage()
        );
        self.session = None;
        self.result = Some(result);
        self.phase = QuizPhase::Results;
        Ok(result)
    }

    // ==================== Results ====================

    /// Results -> Active (same questions) or a new generation request
    pub fn play_again(&mut self) -> Result<Replay, QuizError> {
        if self.phase != QuizPhase::Results {
            return Err(QuizError::InvalidPhase {
                operation: "play again",
                phase: self.phase,
            });
        }

        match (self.behavior.replay, self.settings.clone()) {
            (ReplayMode::Regenerate, Some(settings)) => {
                Ok(Replay::Generating(self.begin_generation(settings)?))
            }
            _ => {
                let session = QuizSession::new(self.questions.clone())?;
                info!("Replaying {} questions", self.questions.len());
                self.session = Some(session);
                self.result = None;
                self.phase = QuizPhase::Active;
                Ok(Replay::Restarted)
            }
        }
    }

    /// Back to setup from anywhere, dropping all quiz state
    pub fn go_home(&mut self) {
        self.cancel_in_flight();
        self.settings = None;
        self.questions.clear();
        self.session = None;
        self.result = None;
        self.error = None;
        self.phase = QuizPhase::Setup;
        debug!("Returned to setup");
    }

    /// Cancel any outstanding request (e.g. on exit)
    pub fn cancel_in_flight(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            debug!(request = in_flight.id, "Cancelling generation request");
            in_flight.cancel.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use quizzly_domain::{Difficulty, DifficultySetting, SessionPhase};
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    // ==================== Test Mocks ====================

    type Scripted = Result<Vec<Question>, GenerationError>;

    struct MockProvider {
        results: Mutex<VecDeque<Scripted>>,
        calls: Mutex<Vec<QuizSettings>>,
        delay: Option<Duration>,
    }

    impl MockProvider {
        fn new(results: Vec<Scripted>) -> Self {
            Self {
                results: Mutex::new(VecDeque::from(results)),
                calls: Mutex::new(Vec::new()),
                delay: None,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl QuestionProvider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        async fn generate(
            &self,
            settings: &QuizSettings,
        ) -> Result<Vec<Question>, GenerationError> {
            self.calls.lock().unwrap().push(settings.clone());
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(GenerationError::NoQuestions))
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_generation_start(&self, provider: &str, settings: &QuizSettings) {
            self.events
                .lock()
                .unwrap()
                .push(format!("start {} {}", provider, settings.topic));
        }

        fn on_generation_complete(&self, success: bool, count: usize) {
            self.events
                .lock()
                .unwrap()
                .push(format!("complete {} {}", success, count));
        }
    }

    fn questions(n: u32) -> Vec<Question> {
        (1..=n)
            .map(|id| {
                Question::new(
                    id,
                    "Oceans",
                    Difficulty::Easy,
                    format!("Ocean question {id}?"),
                    ["Pacific", "Atlantic", "Indian", "Arctic"].map(String::from),
                    0,
                )
                .unwrap()
            })
            .collect()
    }

    fn settings(topic: &str) -> QuizSettings {
        QuizSettings::new(topic, 3, DifficultySetting::Easy).unwrap()
    }

    fn orchestrator(provider: MockProvider) -> (QuizOrchestrator, Arc<MockProvider>) {
        let provider = Arc::new(provider);
        let orch = QuizOrchestrator::new(provider.clone(), BehaviorConfig::default());
        (orch, provider)
    }

    #[tokio::test]
    async fn test_empty_topic_stays_in_setup() {
        let (mut orch, provider) = orchestrator(MockProvider::new(vec![Ok(questions(3))]));
        let err = orch.start_quiz(settings("   ")).await.unwrap_err();

        assert!(matches!(err, QuizError::Validation(DomainError::EmptyTopic)));
        assert_eq!(err.to_string(), "Please enter a topic");
        assert_eq!(orch.phase(), QuizPhase::Setup);
        assert_eq!(orch.error(), Some("Please enter a topic"));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_start_quiz_trims_topic_and_enters_active() {
        let (mut orch, provider) = orchestrator(MockProvider::new(vec![Ok(questions(3))]));
        orch.start_quiz(settings("  Oceans  ")).await.unwrap();

        assert_eq!(orch.phase(), QuizPhase::Active);
        assert_eq!(orch.settings().unwrap().topic, "Oceans");
        assert_eq!(provider.calls.lock().unwrap()[0].topic, "Oceans");
        let session = orch.session().unwrap();
        assert_eq!(session.total_questions(), 3);
        assert_eq!(session.phase(), SessionPhase::AwaitingAnswer);
        assert!(!orch.is_generating());
    }

    #[tokio::test]
    async fn test_invalid_response_stays_in_setup() {
        let (mut orch, _) = orchestrator(MockProvider::new(vec![Err(
            GenerationError::InvalidResponseFormat,
        )]));
        let err = orch.start_quiz(settings("Oceans")).await.unwrap_err();

        assert!(matches!(
            err,
            QuizError::Generation(GenerationError::InvalidResponseFormat)
        ));
        assert_eq!(orch.phase(), QuizPhase::Setup);
        assert!(orch.session().is_none());
        assert!(orch.error().unwrap().starts_with("Failed to generate questions. Please try again."));

        orch.dismiss_error();
        assert!(orch.error().is_none());
    }

    #[tokio::test]
    async fn test_remote_response_without_array_stays_in_setup() {
        use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
        use crate::providers::LlmQuestionProvider;
        use quizzly_domain::Model;

        struct ProseSession(Model);

        #[async_trait]
        impl LlmSession for ProseSession {
            fn model(&self) -> &Model {
                &self.0
            }

            async fn send(&self, _content: &str) -> Result<String, GatewayError> {
                Ok("Here are some great questions about oceans!".to_string())
            }
        }

        struct ProseGateway;

        #[async_trait]
        impl LlmGateway for ProseGateway {
            async fn create_session_with_system_prompt(
                &self,
                model: &Model,
                _system_prompt: &str,
            ) -> Result<Box<dyn LlmSession>, GatewayError> {
                Ok(Box::new(ProseSession(model.clone())))
            }
        }

        let provider = LlmQuestionProvider::new(Arc::new(ProseGateway), Model::default());
        let mut orch = QuizOrchestrator::new(Arc::new(provider), BehaviorConfig::default());
        let err = orch.start_quiz(settings("Oceans")).await.unwrap_err();

        assert!(matches!(
            err,
            QuizError::Generation(GenerationError::InvalidResponseFormat)
        ));
        assert_eq!(orch.phase(), QuizPhase::Setup);
        assert!(orch.session().is_none());
        assert!(orch.questions().is_empty());
    }

    #[tokio::test]
    async fn test_empty_question_list_is_a_failure() {
        let (mut orch, _) = orchestrator(MockProvider::new(vec![Ok(vec![])]));
        let err = orch.start_quiz(settings("Oceans")).await.unwrap_err();
        assert!(matches!(err, QuizError::Generation(GenerationError::NoQuestions)));
        assert!(orch.session().is_none());
    }

    #[tokio::test]
    async fn test_full_flow_with_results_and_home() {
        let (mut orch, _) = orchestrator(MockProvider::new(vec![Ok(questions(3))]));
        orch.start_quiz(settings("Oceans")).await.unwrap();

        // correct, timeout, wrong
        assert_eq!(orch.select_answer(0), AnswerOutcome::Recorded { correct: true });
        assert_eq!(orch.advance(), AdvanceOutcome::NextQuestion { index: 1 });
        for _ in 0..29 {
            assert!(matches!(orch.tick(), TickOutcome::Running { .. }));
        }
        assert_eq!(orch.tick(), TickOutcome::TimedOut);
        assert_eq!(orch.advance(), AdvanceOutcome::NextQuestion { index: 2 });
        assert_eq!(orch.select_answer(3), AnswerOutcome::Recorded { correct: false });

        let outcome = orch.advance();
        assert!(matches!(outcome, AdvanceOutcome::Completed(_)));
        assert_eq!(orch.phase(), QuizPhase::Results);
        let result = *orch.result().unwrap();
        assert_eq!(result.score, 10);
        assert_eq!(result.total_questions, 3);
        assert_eq!(result.percentage(), 33);
        assert_eq!(result.performance_message(), "KEEP PUSHING FORWARD");

        orch.go_home();
        assert_eq!(orch.phase(), QuizPhase::Setup);
        assert!(orch.settings().is_none());
        assert!(orch.questions().is_empty());
        assert!(orch.result().is_none());
    }

    #[tokio::test]
    async fn test_play_again_reuses_questions() {
        let (mut orch, provider) = orchestrator(MockProvider::new(vec![Ok(questions(2))]));
        orch.start_quiz(settings("Oceans")).await.unwrap();
        orch.select_answer(0);
        orch.advance();
        orch.select_answer(0);
        orch.advance();
        assert_eq!(orch.phase(), QuizPhase::Results);

        let replay = orch.play_again().unwrap();
        assert!(matches!(replay, Replay::Restarted));
        assert_eq!(orch.phase(), QuizPhase::Active);
        let session = orch.session().unwrap();
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.questions(), questions(2).as_slice());
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_play_again_regenerate() {
        let provider = Arc::new(MockProvider::new(vec![Ok(questions(1)), Ok(questions(2))]));
        let mut orch = QuizOrchestrator::new(
            provider.clone(),
            BehaviorConfig::default().with_replay(ReplayMode::Regenerate),
        );
        orch.start_quiz(settings("Oceans")).await.unwrap();
        orch.select_answer(1);
        orch.advance();

        let Replay::Generating(pending) = orch.play_again().unwrap() else {
            panic!("expected a new generation request");
        };
        assert_eq!(orch.phase(), QuizPhase::Setup);
        assert!(orch.is_generating());
        assert_eq!(pending.settings.topic, "Oceans");

        let (id, result) = pending.run(orch.provider()).await;
        assert!(orch.finish_generation(id, result).unwrap());
        assert_eq!(orch.session().unwrap().total_questions(), 2);
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_play_again_outside_results() {
        let (mut orch, _) = orchestrator(MockProvider::new(vec![]));
        assert!(matches!(
            orch.play_again(),
            Err(QuizError::InvalidPhase { phase: QuizPhase::Setup, .. })
        ));
    }

    #[tokio::test]
    async fn test_stale_result_is_ignored() {
        let (mut orch, _) = orchestrator(MockProvider::new(vec![]));
        let first = orch.begin_generation(settings("Oceans")).unwrap();
        let second = orch.begin_generation(settings("Rivers")).unwrap();
        assert!(first.cancel.is_cancelled());
        assert!(!second.cancel.is_cancelled());

        assert!(!orch.finish_generation(first.id, Ok(questions(3))).unwrap());
        assert_eq!(orch.phase(), QuizPhase::Setup);
        assert!(orch.is_generating());

        assert!(orch.finish_generation(second.id, Ok(questions(1))).unwrap());
        assert_eq!(orch.phase(), QuizPhase::Active);
    }

    #[tokio::test(start_paused = true)]
    async fn test_go_home_cancels_pending_generation() {
        let mut provider = MockProvider::new(vec![Ok(questions(3))]);
        provider.delay = Some(Duration::from_secs(30));
        let (mut orch, _) = orchestrator(provider);

        let pending = orch.begin_generation(settings("Oceans")).unwrap();
        let task = tokio::spawn(pending.run(orch.provider()));
        tokio::task::yield_now().await;

        orch.go_home();
        let (id, result) = task.await.unwrap();
        assert!(matches!(result, Err(GenerationError::Cancelled)));
        assert!(!orch.finish_generation(id, result).unwrap());
        assert_eq!(orch.phase(), QuizPhase::Setup);
        assert!(orch.error().is_none());
    }

    #[tokio::test]
    async fn test_complete_quiz_requires_active() {
        let (mut orch, _) = orchestrator(MockProvider::new(vec![]));
        assert!(orch.complete_quiz(10, 1).is_err());
        assert_eq!(orch.tick(), TickOutcome::Ignored);
        assert_eq!(orch.select_answer(0), AnswerOutcome::Ignored);
        assert_eq!(orch.advance(), AdvanceOutcome::Ignored);
    }

    #[tokio::test]
    async fn test_progress_notifications() {
        let progress = Arc::new(RecordingProgress::default());
        let provider = Arc::new(MockProvider::new(vec![
            Ok(questions(2)),
            Err(GenerationError::NoQuestions),
        ]));
        let mut orch = QuizOrchestrator::new(provider, BehaviorConfig::default())
            .with_progress(progress.clone());

        orch.start_quiz(settings("Oceans")).await.unwrap();
        orch.go_home();
        let _ = orch.start_quiz(settings("Deserts")).await;

        let events = progress.events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                "start mock Oceans",
                "complete true 2",
                "start mock Deserts",
                "complete false 0",
            ]
        );
    }
}
