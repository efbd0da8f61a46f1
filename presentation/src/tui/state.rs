//! TUI state: the setup form and screen-local UI flags
//!
//! Quiz flow state (phase, session, results) lives in the
//! [`QuizOrchestrator`](quizzly_application::QuizOrchestrator); this module
//! only holds what the terminal UI needs on top of it.

use quizzly_domain::{DifficultySetting, DomainError, QUESTION_COUNT_CHOICES, QuizSettings};
use std::time::{Duration, Instant};

/// Spinner frames for the generating indicator
const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// How long a flash message stays in the status bar
pub const FLASH_TTL: Duration = Duration::from_secs(3);

/// Focusable field on the setup screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupField {
    #[default]
    Topic,
    Count,
    Difficulty,
    Start,
}

impl SetupField {
    const ORDER: [SetupField; 4] = [
        SetupField::Topic,
        SetupField::Count,
        SetupField::Difficulty,
        SetupField::Start,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Editable quiz settings on the setup screen
#[derive(Debug, Clone)]
pub struct SetupForm {
    pub topic: String,
    /// Cursor position in characters
    pub cursor: usize,
    pub question_count: usize,
    pub difficulty: DifficultySetting,
    pub focus: SetupField,
}

impl SetupForm {
    pub fn from_settings(settings: &QuizSettings) -> Self {
        Self {
            topic: settings.topic.clone(),
            cursor: settings.topic.chars().count(),
            question_count: settings.question_count(),
            difficulty: settings.difficulty,
            focus: SetupField::Topic,
        }
    }

    fn byte_offset(&self) -> usize {
        self.topic
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.topic.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset();
        self.topic.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset();
        self.topic.remove(at);
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.topic.chars().count());
    }

    pub fn cursor_start(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.topic.chars().count();
    }

    /// Topic split around the cursor: (before, under cursor, after)
    pub fn topic_parts(&self) -> (&str, Option<char>, &str) {
        let at = self.byte_offset();
        let (before, rest) = self.topic.split_at(at);
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) => (before, Some(c), chars.as_str()),
            None => (before, None, ""),
        }
    }

    /// Step through the offered counts; a custom count from the CLI steps to
    /// its nearest neighbour
    pub fn cycle_count(&mut self, forward: bool) {
        let current = self.question_count;
        self.question_count = if forward {
            QUESTION_COUNT_CHOICES
                .iter()
                .copied()
                .find(|&c| c > current)
                .unwrap_or(QUESTION_COUNT_CHOICES[0])
        } else {
            QUESTION_COUNT_CHOICES
                .iter()
                .rev()
                .copied()
                .find(|&c| c < current)
                .unwrap_or(QUESTION_COUNT_CHOICES[QUESTION_COUNT_CHOICES.len() - 1])
        };
    }

    pub fn cycle_difficulty(&mut self, forward: bool) {
        let all = DifficultySetting::ALL;
        let pos = all.iter().position(|d| *d == self.difficulty).unwrap_or(0);
        let next = if forward {
            (pos + 1) % all.len()
        } else {
            (pos + all.len() - 1) % all.len()
        };
        self.difficulty = all[next];
    }

    /// Settings as entered; the topic is validated by the orchestrator
    pub fn to_settings(&self) -> Result<QuizSettings, DomainError> {
        QuizSettings::new(self.topic.clone(), self.question_count, self.difficulty)
    }
}

/// UI state that is not part of the quiz flow
pub struct TuiState {
    pub form: SetupForm,
    pub provider_name: String,
    pub topics: Vec<String>,
    pub spinner_frame: usize,
    pub show_help: bool,
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
}

impl TuiState {
    pub fn new(settings: &QuizSettings, provider_name: impl Into<String>) -> Self {
        Self {
            form: SetupForm::from_settings(settings),
            provider_name: provider_name.into(),
            topics: Vec::new(),
            spinner_frame: 0,
            show_help: false,
            flash_message: None,
            should_quit: false,
        }
    }

    pub fn with_topics(mut self, topics: Vec<String>) -> Self {
        self.topics = topics;
        self
    }

    pub fn spinner(&self) -> char {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    pub fn advance_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    pub fn flash(&self) -> Option<&str> {
        self.flash_message.as_ref().map(|(msg, _)| msg.as_str())
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() > max_age
        {
            self.flash_message = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(topic: &str) -> SetupForm {
        SetupForm::from_settings(&QuizSettings::new(topic, 10, DifficultySetting::Mixed).unwrap())
    }

    #[test]
    fn test_field_focus_wraps() {
        assert_eq!(SetupField::Topic.next(), SetupField::Count);
        assert_eq!(SetupField::Start.next(), SetupField::Topic);
        assert_eq!(SetupField::Topic.prev(), SetupField::Start);
        assert_eq!(SetupField::Difficulty.prev(), SetupField::Count);
    }

    #[test]
    fn test_topic_editing() {
        let mut form = form("Spce");
        assert_eq!(form.cursor, 4);

        form.cursor_left();
        form.cursor_left();
        form.insert_char('a');
        assert_eq!(form.topic, "Space");
        assert_eq!(form.cursor, 3);

        form.cursor_end();
        form.delete_char();
        assert_eq!(form.topic, "Spac");

        form.cursor_start();
        form.delete_char();
        assert_eq!(form.topic, "Spac");
    }

    #[test]
    fn test_topic_editing_multibyte() {
        let mut form = form("Café");
        form.cursor_left();
        form.insert_char('x');
        assert_eq!(form.topic, "Cafxé");
        form.cursor_end();
        form.delete_char();
        assert_eq!(form.topic, "Cafx");
    }

    #[test]
    fn test_topic_parts() {
        let mut form = form("Space");
        form.cursor_start();
        form.cursor_right();
        assert_eq!(form.topic_parts(), ("S", Some('p'), "ace"));
        form.cursor_end();
        assert_eq!(form.topic_parts(), ("Space", None, ""));
    }

    #[test]
    fn test_cycle_count() {
        let mut form = form("Space");
        form.cycle_count(true);
        assert_eq!(form.question_count, 15);
        form.cycle_count(true);
        form.cycle_count(true);
        assert_eq!(form.question_count, 5);
        form.cycle_count(false);
        assert_eq!(form.question_count, 20);

        form.question_count = 7;
        form.cycle_count(true);
        assert_eq!(form.question_count, 10);
        form.question_count = 7;
        form.cycle_count(false);
        assert_eq!(form.question_count, 5);
    }

    #[test]
    fn test_cycle_difficulty() {
        let mut form = form("Space");
        assert_eq!(form.difficulty, DifficultySetting::Mixed);
        form.cycle_difficulty(true);
        assert_eq!(form.difficulty, DifficultySetting::Easy);
        form.cycle_difficulty(false);
        assert_eq!(form.difficulty, DifficultySetting::Mixed);
    }

    #[test]
    fn test_to_settings_keeps_raw_topic() {
        let mut form = form("");
        for c in "  Space ".chars() {
            form.insert_char(c);
        }
        let settings = form.to_settings().unwrap();
        assert_eq!(settings.topic, "  Space ");
        assert_eq!(settings.question_count(), 10);
    }

    #[test]
    fn test_flash_message() {
        let mut state = TuiState::new(&QuizSettings::default(), "local bank");
        state.set_flash("test");
        assert_eq!(state.flash(), Some("test"));

        // Should not expire immediately
        state.expire_flash(Duration::from_secs(5));
        assert!(state.flash_message.is_some());

        state.expire_flash(Duration::ZERO);
        std::thread::sleep(Duration::from_millis(2));
        state.expire_flash(Duration::ZERO);
        assert!(state.flash_message.is_none());
    }

    #[test]
    fn test_spinner_cycles() {
        let mut state = TuiState::new(&QuizSettings::default(), "local bank");
        let first = state.spinner();
        for _ in 0..SPINNER_FRAMES.len() {
            state.advance_spinner();
        }
        assert_eq!(state.spinner(), first);
    }
}
