//! TUI application - event loop around the quiz orchestrator
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                 generation task (tokio::spawn)
//!   ├─ crossterm EventStream              └─ PendingGeneration::run
//!   ├─ generation_rx.recv() ◄──────────────── (request id, result)
//!   ├─ next_tick(countdown)   ◄─ Countdown task, alive while AwaitingAnswer
//!   └─ animation interval (spinner, flash expiry)
//! ```
//!
//! The app owns the [`QuizOrchestrator`] outright; the only work that leaves
//! the loop is the provider call, whose result comes back tagged with its
//! request id so stale answers are discarded.

use super::keys::{Action, KeyHandler, Screen};
use super::state::{FLASH_TTL, SetupField, TuiState};
use super::widgets::{
    HeaderWidget, HelpWidget, MainLayout, QuizWidget, ResultsWidget, SetupWidget,
    StatusBarWidget, centered_rect,
};
use crossterm::{
    event::{Event, EventStream, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use quizzly_application::{
    Countdown, CountdownHandle, GenerationError, PendingGeneration, QuizOrchestrator, QuizPhase,
    Replay, next_tick,
};
use quizzly_domain::{
    AdvanceOutcome, AnswerOutcome, Question, QuizSettings, SessionPhase, TickOutcome,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

type GenerationOutcome = (u64, Result<Vec<Question>, GenerationError>);

/// Interval for spinner animation and flash expiry
const ANIMATION_PERIOD: Duration = Duration::from_millis(100);

/// Main TUI application
pub struct TuiApp {
    orchestrator: QuizOrchestrator,
    state: TuiState,
    countdown: Option<CountdownHandle>,
    generation_tx: mpsc::UnboundedSender<GenerationOutcome>,
    generation_rx: mpsc::UnboundedReceiver<GenerationOutcome>,
}

impl TuiApp {
    /// Create a new app; `initial` pre-fills the setup form
    pub fn new(orchestrator: QuizOrchestrator, initial: &QuizSettings) -> Self {
        let provider = orchestrator.provider();
        let state = TuiState::new(initial, provider.name()).with_topics(provider.topics());
        let (generation_tx, generation_rx) = mpsc::unbounded_channel();

        Self {
            orchestrator,
            state,
            countdown: None,
            generation_tx,
            generation_rx,
        }
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        info!("TUI started with {}", self.state.provider_name);
        let result = self.event_loop(&mut terminal).await;

        self.orchestrator.cancel_in_flight();
        self.countdown = None;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> io::Result<()> {
        let mut event_stream = EventStream::new();
        let mut animation = tokio::time::interval(ANIMATION_PERIOD);

        loop {
            // Render
            terminal.draw(|frame| self.render(frame))?;

            if self.state.should_quit {
                return Ok(());
            }

            tokio::select! {
                // Terminal events (keyboard, resize)
                term_event = event_stream.next() => match term_event {
                    Some(Ok(event)) => self.handle_terminal_event(event),
                    Some(Err(e)) => return Err(e),
                    None => return Ok(()),
                },

                // Finished generation requests
                Some((id, result)) = self.generation_rx.recv() => {
                    self.apply_generation(id, result);
                }

                // Question timer
                Some(()) = next_tick(&mut self.countdown) => {
                    self.on_tick();
                }

                // Spinner animation, flash expiry
                _ = animation.tick() => {
                    if self.orchestrator.is_generating() {
                        self.state.advance_spinner();
                    }
                    self.state.expire_flash(FLASH_TTL);
                }
            }
        }
    }

    /// Render all widgets
    fn render(&self, frame: &mut ratatui::Frame) {
        let layout = MainLayout::compute(frame.area());
        let generating = self.orchestrator.is_generating();

        frame.render_widget(
            HeaderWidget::new(
                &self.state.provider_name,
                self.orchestrator.settings(),
                self.orchestrator.phase(),
                generating,
            ),
            layout.header,
        );

        match self.orchestrator.phase() {
            QuizPhase::Setup => frame.render_widget(
                SetupWidget::new(&self.state.form, &self.state.topics)
                    .error(self.orchestrator.error())
                    .generating(generating, self.state.spinner()),
                layout.body,
            ),
            QuizPhase::Active => {
                if let Some(session) = self.orchestrator.session() {
                    frame.render_widget(QuizWidget::new(session), layout.body);
                }
            }
            QuizPhase::Results => {
                if let Some(result) = self.orchestrator.result() {
                    frame.render_widget(
                        ResultsWidget::new(
                            result,
                            self.orchestrator.settings(),
                            self.orchestrator.replay_mode(),
                        ),
                        layout.body,
                    );
                }
            }
        }

        frame.render_widget(
            StatusBarWidget::new(self.screen(), generating, self.state.flash()),
            layout.status_bar,
        );

        if self.state.show_help {
            let area = centered_rect(60, HelpWidget::height(), frame.area());
            frame.render_widget(HelpWidget::new(), area);
        }
    }

    fn screen(&self) -> Screen {
        match self.orchestrator.phase() {
            QuizPhase::Setup => Screen::Setup(self.state.form.focus),
            QuizPhase::Active => match self.orchestrator.session().map(|s| s.phase()) {
                Some(SessionPhase::AwaitingAnswer) => Screen::Question,
                _ => Screen::Feedback,
            },
            QuizPhase::Results => Screen::Results,
        }
    }

    fn handle_terminal_event(&mut self, event: Event) {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            self.handle_key(key);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.state.show_help {
            self.state.show_help = false;
            return;
        }
        let action = KeyHandler::handle(self.screen(), key);
        self.handle_action(action);
        self.sync_countdown();
    }

    fn handle_action(&mut self, action: Action) {
        let form = &mut self.state.form;
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::ToggleHelp => self.state.show_help = !self.state.show_help,
            Action::NextField => form.focus = form.focus.next(),
            Action::PrevField => form.focus = form.focus.prev(),
            Action::InsertChar(c) => form.insert_char(c),
            Action::DeleteChar => form.delete_char(),
            Action::CursorLeft => form.cursor_left(),
            Action::CursorRight => form.cursor_right(),
            Action::CursorStart => form.cursor_start(),
            Action::CursorEnd => form.cursor_end(),
            Action::Increase | Action::Decrease => {
                let forward = action == Action::Increase;
                match form.focus {
                    SetupField::Count => form.cycle_count(forward),
                    SetupField::Difficulty => form.cycle_difficulty(forward),
                    _ => {}
                }
            }
            Action::Submit => self.submit(),
            Action::Cancel => self.cancel(),
            Action::Answer(index) => {
                if let AnswerOutcome::Recorded { correct } = self.orchestrator.select_answer(index)
                {
                    debug!(answer = index, correct, "Answer recorded");
                }
            }
            Action::Advance => {
                if let AdvanceOutcome::Completed(result) = self.orchestrator.advance() {
                    debug!(score = result.score, "Session completed");
                }
            }
            Action::PlayAgain => self.play_again(),
            Action::Home => {
                self.orchestrator.go_home();
                self.state.form.focus = SetupField::Topic;
            }
            Action::None => {}
        }
    }

    /// Start generation with the form settings unless a request is in flight
    fn submit(&mut self) {
        if self.orchestrator.is_generating() {
            return;
        }
        let settings = match self.state.form.to_settings() {
            Ok(settings) => settings,
            Err(e) => {
                self.state.set_flash(e.to_string());
                return;
            }
        };
        match self.orchestrator.begin_generation(settings) {
            Ok(pending) => self.spawn_generation(pending),
            // Validation errors are kept by the orchestrator and shown on the form
            Err(e) => debug!("Start rejected: {}", e),
        }
    }

    fn cancel(&mut self) {
        if self.orchestrator.error().is_some() {
            self.orchestrator.dismiss_error();
        } else if self.orchestrator.is_generating() {
            self.orchestrator.cancel_in_flight();
            self.state.set_flash("Generation cancelled");
        }
    }

    fn play_again(&mut self) {
        match self.orchestrator.play_again() {
            Ok(Replay::Restarted) => {}
            Ok(Replay::Generating(pending)) => self.spawn_generation(pending),
            Err(e) => {
                warn!("Play again failed: {}", e);
                self.state.set_flash(e.to_string());
            }
        }
    }

    fn spawn_generation(&self, pending: PendingGeneration) {
        let provider = self.orchestrator.provider();
        let tx = self.generation_tx.clone();
        tokio::spawn(async move {
            let outcome = pending.run(provider).await;
            // The receiver is gone only when the app is shutting down
            let _ = tx.send(outcome);
        });
    }

    fn apply_generation(&mut self, id: u64, result: Result<Vec<Question>, GenerationError>) {
        match self.orchestrator.finish_generation(id, result) {
            Ok(started) => debug!(request = id, started, "Generation settled"),
            Err(e) => debug!("Generation failed: {}", e),
        }
        self.sync_countdown();
    }

    fn on_tick(&mut self) {
        if let TickOutcome::TimedOut = self.orchestrator.tick() {
            debug!("Question timed out");
        }
        self.sync_countdown();
    }

    /// Keep exactly one countdown alive while a question awaits an answer
    fn sync_countdown(&mut self) {
        let awaiting = self
            .orchestrator
            .session()
            .is_some_and(|s| s.phase() == SessionPhase::AwaitingAnswer);

        match (awaiting, self.countdown.is_some()) {
            (true, false) => self.countdown = Some(Countdown::start()),
            // Dropping the handle stops the task
            (false, true) => self.countdown = None,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizzly_application::{BankQuestionProvider, BehaviorConfig};
    use quizzly_domain::{Difficulty, DifficultySetting, QuestionBank};
    use std::sync::Arc;

    fn app() -> TuiApp {
        let questions = (1..=3)
            .map(|id| {
                Question::new(
                    id,
                    "Space",
                    Difficulty::Easy,
                    format!("Question {id}"),
                    ["a", "b", "c", "d"].map(String::from),
                    0,
                )
                .unwrap()
            })
            .collect();
        let bank = Arc::new(QuestionBank::new(questions).unwrap());
        let provider = Arc::new(BankQuestionProvider::with_seed(bank, 7));
        let orchestrator = QuizOrchestrator::new(provider, BehaviorConfig::default());
        let initial = QuizSettings::new("", 5, DifficultySetting::Easy).unwrap();
        TuiApp::new(orchestrator, &initial)
    }

    fn type_topic(app: &mut TuiApp, topic: &str) {
        for c in topic.chars() {
            app.handle_action(Action::InsertChar(c));
        }
    }

    async fn settle_generation(app: &mut TuiApp) {
        let (id, result) = app.generation_rx.recv().await.unwrap();
        app.apply_generation(id, result);
    }

    #[tokio::test]
    async fn test_empty_topic_shows_error() {
        let mut app = app();
        app.handle_action(Action::Submit);

        assert_eq!(app.orchestrator.error(), Some("Please enter a topic"));
        assert!(!app.orchestrator.is_generating());
        assert_eq!(app.orchestrator.phase(), QuizPhase::Setup);

        app.handle_action(Action::Cancel);
        assert!(app.orchestrator.error().is_none());
    }

    #[tokio::test]
    async fn test_full_round_drives_countdown() {
        let mut app = app();
        type_topic(&mut app, "Space");
        app.handle_action(Action::Submit);
        assert!(app.orchestrator.is_generating());

        settle_generation(&mut app).await;
        assert_eq!(app.orchestrator.phase(), QuizPhase::Active);
        assert_eq!(app.screen(), Screen::Question);
        assert!(app.countdown.is_some());

        for _ in 0..3 {
            app.handle_action(Action::Answer(0));
            app.sync_countdown();
            assert_eq!(app.screen(), Screen::Feedback);
            assert!(app.countdown.is_none());

            app.handle_action(Action::Advance);
            app.sync_countdown();
        }

        assert_eq!(app.screen(), Screen::Results);
        assert!(app.countdown.is_none());
        assert_eq!(app.orchestrator.result().map(|r| r.score), Some(30));

        app.handle_action(Action::PlayAgain);
        app.sync_countdown();
        assert_eq!(app.screen(), Screen::Question);
        assert!(app.countdown.is_some());

        app.handle_action(Action::Home);
        app.sync_countdown();
        assert_eq!(app.screen(), Screen::Setup(SetupField::Topic));
        assert!(app.countdown.is_none());
    }

    #[tokio::test]
    async fn test_timeout_moves_to_feedback() {
        let mut app = app();
        type_topic(&mut app, "Space");
        app.handle_action(Action::Submit);
        settle_generation(&mut app).await;

        for _ in 0..Difficulty::Easy.time_limit_secs() {
            app.on_tick();
        }
        assert_eq!(app.screen(), Screen::Feedback);
        assert!(app.countdown.is_none());
        assert_eq!(
            app.orchestrator.session().and_then(|s| s.current_answer()),
            None
        );
    }

    #[tokio::test]
    async fn test_cancel_discards_pending_result() {
        let mut app = app();
        type_topic(&mut app, "Space");
        app.handle_action(Action::Submit);
        app.handle_action(Action::Cancel);

        assert!(!app.orchestrator.is_generating());
        assert_eq!(app.state.flash(), Some("Generation cancelled"));

        settle_generation(&mut app).await;
        assert_eq!(app.orchestrator.phase(), QuizPhase::Setup);
        assert!(app.orchestrator.session().is_none());
    }

    #[tokio::test]
    async fn test_selectors_follow_focus() {
        let mut app = app();
        app.handle_action(Action::Increase);
        assert_eq!(app.state.form.question_count, 5);

        app.handle_action(Action::NextField);
        app.handle_action(Action::Increase);
        assert_eq!(app.state.form.question_count, 10);

        app.handle_action(Action::NextField);
        app.handle_action(Action::Decrease);
        assert_eq!(app.state.form.difficulty, DifficultySetting::Mixed);
    }
}
