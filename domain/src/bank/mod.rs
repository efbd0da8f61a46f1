//! Question bank and selection
//!
//! A [`QuestionBank`] is a fixed, read-only collection of pre-authored
//! questions. [`QuestionBank::select`] picks a random subset matching the
//! player's settings:
//!
//! 1. keep questions whose topic or text contains the requested topic
//!    (case-insensitive), unless the topic is empty or "mixed"
//! 2. keep questions of the requested difficulty, unless it is mixed
//! 3. if nothing survives, fall back to the whole bank
//! 4. shuffle (Fisher–Yates) and take up to `question_count`

use crate::core::error::DomainError;
use crate::core::question::Question;
use crate::quiz::settings::QuizSettings;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// Read-only collection of candidate questions
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank, rejecting an empty collection and duplicate ids
    pub fn new(questions: Vec<Question>) -> Result<Self, DomainError> {
        if questions.is_empty() {
            return Err(DomainError::EmptyBank);
        }
        let mut seen = HashSet::with_capacity(questions.len());
        for q in &questions {
            if !seen.insert(q.id()) {
                return Err(DomainError::DuplicateQuestionId(q.id()));
            }
        }
        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Never zero: `new` rejects an empty collection
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Sorted, de-duplicated topics present in the bank
    pub fn topics(&self) -> Vec<String> {
        self.questions
            .iter()
            .map(|q| q.topic().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Candidates matching the settings, before the fallback is applied
    pub fn matching<'a>(&'a self, settings: &QuizSettings) -> Vec<&'a Question> {
        let mut filtered: Vec<&Question> = self.questions.iter().collect();

        if settings.filters_topic() {
            let needle = settings.topic.to_lowercase();
            filtered.retain(|q| q.matches_topic(&needle));
        }

        if let Some(difficulty) = settings.difficulty.fixed() {
            filtered.retain(|q| q.difficulty() == difficulty);
        }

        filtered
    }

    /// Pick up to `question_count` random questions matching the settings
    ///
    /// Never returns an empty list: when the filters leave nothing, the whole
    /// bank is used instead.
    pub fn select<R: Rng + ?Sized>(&self, settings: &QuizSettings, rng: &mut R) -> Vec<Question> {
        let mut candidates = self.matching(settings);
        let matched = candidates.len();
        if candidates.is_empty() {
            candidates = self.questions.iter().collect();
        }

        candidates.shuffle(rng);
        candidates.truncate(settings.question_count());

        debug!(
            matched,
            fallback = matched == 0,
            selected = candidates.len(),
            "Selected questions from bank"
        );

        candidates.into_iter().cloned().collect()
    }
}
