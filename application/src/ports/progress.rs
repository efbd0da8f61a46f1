//! Progress notification port
//!
//! Defines the interface for reporting question generation progress.

use quizzly_domain::QuizSettings;

/// Callback for progress updates while questions are being obtained
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, status line, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called when a generation request is issued
    fn on_generation_start(&self, provider: &str, settings: &QuizSettings);

    /// Called when the request settles; `count` is the number of questions received
    fn on_generation_complete(&self, success: bool, count: usize);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_generation_start(&self, _provider: &str, _settings: &QuizSettings) {}
    fn on_generation_complete(&self, _success: bool, _count: usize) {}
}
