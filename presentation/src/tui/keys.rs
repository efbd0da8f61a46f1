//! Key bindings
//!
//! Maps key events to actions based on the screen currently shown:
//! - Setup: edit the topic, cycle count/difficulty, start
//! - Question: pick an answer (1-4 or A-D)
//! - Feedback: continue to the next question
//! - Results: play again or go home

use super::state::SetupField;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Screen the key event was received on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Setup(SetupField),
    Question,
    Feedback,
    Results,
}

/// User action derived from key events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextField,
    PrevField,
    InsertChar(char),
    DeleteChar,
    CursorLeft,
    CursorRight,
    CursorStart,
    CursorEnd,
    /// Next value of the focused selector
    Increase,
    /// Previous value of the focused selector
    Decrease,
    /// Start the quiz with the form settings
    Submit,
    /// Dismiss the setup error or cancel a pending generation
    Cancel,
    Answer(usize),
    Advance,
    PlayAgain,
    Home,
    ToggleHelp,
    None,
}

/// Key event handler - maps key events to actions based on the current screen
pub struct KeyHandler;

impl KeyHandler {
    pub fn handle(screen: Screen, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }
        match screen {
            Screen::Setup(SetupField::Topic) => Self::handle_topic(key),
            Screen::Setup(_) => Self::handle_setup(key),
            Screen::Question => Self::handle_question(key),
            Screen::Feedback => Self::handle_feedback(key),
            Screen::Results => Self::handle_results(key),
        }
    }

    fn handle_topic(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::Submit,
            KeyCode::Esc => Action::Cancel,
            KeyCode::Tab | KeyCode::Down => Action::NextField,
            KeyCode::BackTab | KeyCode::Up => Action::PrevField,
            KeyCode::Backspace => Action::DeleteChar,
            KeyCode::Left => Action::CursorLeft,
            KeyCode::Right => Action::CursorRight,
            KeyCode::Home => Action::CursorStart,
            KeyCode::End => Action::CursorEnd,
            KeyCode::F(1) => Action::ToggleHelp,
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Action::InsertChar(c)
            }
            _ => Action::None,
        }
    }

    fn handle_setup(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Action::Submit,
            KeyCode::Esc => Action::Cancel,
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => Action::NextField,
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => Action::PrevField,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => Action::Increase,
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => Action::Decrease,
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') | KeyCode::F(1) => Action::ToggleHelp,
            _ => Action::None,
        }
    }

    fn handle_question(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(c @ '1'..='4') => Action::Answer(c as usize - '1' as usize),
            KeyCode::Char(c @ ('a'..='d' | 'A'..='D')) => {
                Action::Answer(c.to_ascii_lowercase() as usize - 'a' as usize)
            }
            KeyCode::Esc => Action::Home,
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') | KeyCode::F(1) => Action::ToggleHelp,
            _ => Action::None,
        }
    }

    fn handle_feedback(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') | KeyCode::Right => {
                Action::Advance
            }
            KeyCode::Esc => Action::Home,
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') | KeyCode::F(1) => Action::ToggleHelp,
            _ => Action::None,
        }
    }

    fn handle_results(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') => Action::PlayAgain,
            KeyCode::Esc | KeyCode::Char('h') => Action::Home,
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') | KeyCode::F(1) => Action::ToggleHelp,
            _ => Action::None,
        }
    }
}
