//! Presentation layer for quizzly
//!
//! This crate contains CLI definitions, the terminal UI, the print-mode
//! formatter and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, DifficultyArg, OutputArg, ReplayArg};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use tui::TuiApp;
