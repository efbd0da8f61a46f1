//! Quiz result snapshot and its derived statistics

use crate::core::question::{POINTS_PER_QUESTION, Question};
use serde::{Deserialize, Serialize};

/// Final outcome of a quiz session (Value Object)
///
/// Only the score and the question count are stored; everything shown on the
/// results screen is derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub score: u32,
    pub total_questions: usize,
}

/// Badge shown next to the results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceTier {
    Trophy,
    Target,
    Zap,
}

impl QuizResult {
    pub fn new(score: u32, total_questions: usize) -> Self {
        Self {
            score,
            total_questions,
        }
    }

    pub fn max_score(&self) -> u32 {
        self.total_questions as u32 * POINTS_PER_QUESTION
    }

    fn ratio(&self) -> f64 {
        let max = self.max_score();
        if max == 0 {
            0.0
        } else {
            f64::from(self.score) / f64::from(max) * 100.0
        }
    }

    /// Accuracy rounded to the nearest whole percent
    pub fn percentage(&self) -> u32 {
        self.ratio().round() as u32
    }

    pub fn correct_answers(&self) -> u32 {
        self.score / POINTS_PER_QUESTION
    }

    pub fn incorrect_answers(&self) -> u32 {
        (self.total_questions as u32).saturating_sub(self.correct_answers())
    }

    /// Headline for the results screen, based on the unrounded accuracy
    pub fn performance_message(&self) -> &'static str {
        let pct = self.ratio();
        if pct >= 90.0 {
            "EXCEPTIONAL PERFORMANCE"
        } else if pct >= 80.0 {
            "OUTSTANDING KNOWLEDGE"
        } else if pct >= 70.0 {
            "SOLID UNDERSTANDING"
        } else if pct >= 60.0 {
            "GOOD FOUNDATION"
        } else if pct >= 50.0 {
            "ROOM FOR GROWTH"
        } else {
            "KEEP PUSHING FORWARD"
        }
    }

    pub fn performance_tier(&self) -> PerformanceTier {
        match self.percentage() {
            90.. => PerformanceTier::Trophy,
            70.. => PerformanceTier::Target,
            _ => PerformanceTier::Zap,
        }
    }
}

/// Score for a set of answers: 10 points for every answer matching its question
///
/// Unanswered slots and answers without a matching question score nothing.
pub fn calculate_score(answers: &[Option<usize>], questions: &[Question]) -> u32 {
    answers
        .iter()
        .zip(questions)
        .filter(|(answer, question)| answer.is_some_and(|a| question.is_correct(a)))
        .count() as u32
        * POINTS_PER_QUESTION
}
