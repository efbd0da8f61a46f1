//! TUI (Text User Interface) for quizzly
//!
//! Terminal front end built on ratatui: a setup form, the timed question
//! screen and the results screen, all driven by one
//! [`QuizOrchestrator`](quizzly_application::QuizOrchestrator).

mod app;
mod keys;
mod state;
mod widgets;

pub use app::TuiApp;
pub use keys::{Action, KeyHandler, Screen};
pub use state::{SetupField, SetupForm, TuiState};
