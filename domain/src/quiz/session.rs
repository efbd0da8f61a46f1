//! Quiz session state machine
//!
//! A [`QuizSession`] owns one attempt at a quiz: the fixed question list, the
//! running score, one answer slot per question and the per-question countdown.
//!
//! ```text
//!                 select_answer / tick→0
//!  AwaitingAnswer ──────────────────────▶ ShowingFeedback
//!        ▲                                     │ advance
//!        └──────── (not last question) ◀───────┤
//!                                              ▼ (last question)
//!                                          Completed
//! ```
//!
//! The session never fails once built; calls made in the wrong phase are
//! ignored and reported through the returned outcome.

use super::result::QuizResult;
use crate::core::error::DomainError;
use crate::core::question::{OPTION_COUNT, POINTS_PER_QUESTION, Question};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Phase of the current question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Countdown running, waiting for the player
    AwaitingAnswer,
    /// Answer (or timeout) recorded, correct option revealed
    ShowingFeedback,
    /// Last question advanced past; terminal
    Completed,
}

/// Outcome of a one-second tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still counting down
    Running { remaining: u32 },
    /// Countdown hit zero; the question is scored as unanswered
    TimedOut,
    /// Not in `AwaitingAnswer`
    Ignored,
}

/// Outcome of selecting an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Recorded { correct: bool },
    /// Already answered, timed out, or index out of range
    Ignored,
}

/// Outcome of advancing past the feedback screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    NextQuestion { index: usize },
    Completed(QuizResult),
    /// Not in `ShowingFeedback`
    Ignored,
}

/// One attempt at a quiz (Entity)
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    score: u32,
    answers: Vec<Option<usize>>,
    time_remaining: u32,
    phase: SessionPhase,
}

impl QuizSession {
    /// Start a session on the first question
    pub fn new(questions: Vec<Question>) -> Result<Self, DomainError> {
        let first = questions.first().ok_or(DomainError::EmptySession)?;
        let time_remaining = first.time_limit_secs();
        let answers = vec![None; questions.len()];
        debug!(questions = questions.len(), "Quiz session created");
        Ok(Self {
            questions,
            current_index: 0,
            score: 0,
            answers,
            time_remaining,
            phase: SessionPhase::AwaitingAnswer,
        })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn answer_for(&self, index: usize) -> Option<usize> {
        self.answers.get(index).copied().flatten()
    }

    /// Answer recorded for the question on screen
    pub fn current_answer(&self) -> Option<usize> {
        self.answer_for(self.current_index)
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_completed(&self) -> bool {
        self.phase == SessionPhase::Completed
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    /// Fraction of the quiz reached, counting the current question
    pub fn progress(&self) -> f64 {
        (self.current_index + 1) as f64 / self.questions.len() as f64
    }

    /// Final result, available once completed
    pub fn result(&self) -> Option<QuizResult> {
        self.is_completed()
            .then(|| QuizResult::new(self.score, self.questions.len()))
    }

    /// One second elapsed
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != SessionPhase::AwaitingAnswer {
            return TickOutcome::Ignored;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            debug!(index = self.current_index, "Question timed out");
            self.phase = SessionPhase::ShowingFeedback;
            TickOutcome::TimedOut
        } else {
            TickOutcome::Running {
                remaining: self.time_remaining,
            }
        }
    }

    /// Record the player's answer for the current question
    ///
    /// Only the first selection per question counts.
    pub fn select_answer(&mut self, index: usize) -> AnswerOutcome {
        if self.phase != SessionPhase::AwaitingAnswer
            || index >= OPTION_COUNT
            || self.answers[self.current_index].is_some()
        {
            return AnswerOutcome::Ignored;
        }

        self.answers[self.current_index] = Some(index);
        let correct = self.current_question().is_correct(index);
        if correct {
            self.score += POINTS_PER_QUESTION;
        }
        self.phase = SessionPhase::ShowingFeedback;
        debug!(index = self.current_index, answer = index, correct, "Answer recorded");
        AnswerOutcome::Recorded { correct }
    }

    /// Move past the feedback screen
    pub fn advance(&mut self) -> AdvanceOutcome {
        if self.phase != SessionPhase::ShowingFeedback {
            return AdvanceOutcome::Ignored;
        }

        if self.is_last_question() {
            self.phase = SessionPhase::Completed;
            return AdvanceOutcome::Completed(QuizResult::new(self.score, self.questions.len()));
        }

        self.current_index += 1;
        self.time_remaining = self.current_question().time_limit_secs();
        self.phase = SessionPhase::AwaitingAnswer;
        AdvanceOutcome::NextQuestion {
            index: self.current_index,
        }
    }
}
