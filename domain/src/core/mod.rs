//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a validated multiple-choice question
//! - [`difficulty::Difficulty`] / [`difficulty::DifficultySetting`]: per-question and requested difficulty
//! - [`model::Model`]: generative models that can write questions
//! - [`error::DomainError`]: domain-level errors

pub mod difficulty;
pub mod error;
pub mod model;
pub mod question;
