//! Progress reporting for question generation

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use quizzly_application::ProgressNotifier;
use quizzly_domain::QuizSettings;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Spinner shown on stderr while questions are being generated
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn describe(settings: &QuizSettings) -> String {
        format!(
            "{} {} questions on '{}'",
            settings.question_count(),
            settings.difficulty,
            settings.topic
        )
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_generation_start(&self, provider: &str, settings: &QuizSettings) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(provider.to_string());
        pb.set_message(Self::describe(settings));
        pb.enable_steady_tick(Duration::from_millis(100));

        let mut slot = self.spinner.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = slot.replace(pb) {
            previous.finish_and_clear();
        }
    }

    fn on_generation_complete(&self, success: bool, count: usize) {
        let spinner = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(pb) = spinner {
            if success {
                pb.finish_with_message(format!("{} {} questions ready", "v".green(), count));
            } else {
                pb.finish_with_message(format!("{} generation failed", "x".red()));
            }
        }
    }
}

/// Plain text progress for non-interactive output
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_generation_start(&self, provider: &str, settings: &QuizSettings) {
        eprintln!(
            "{} {} via {}",
            "->".cyan(),
            ProgressReporter::describe(settings).bold(),
            provider
        );
    }

    fn on_generation_complete(&self, success: bool, count: usize) {
        if success {
            eprintln!("  {} {} questions ready", "v".green(), count);
        } else {
            eprintln!("  {} generation failed", "x".red());
        }
    }
}
