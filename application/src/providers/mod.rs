//! Question provider strategies
//!
//! - [`LlmQuestionProvider`] asks a generative model through an [`LlmGateway`](crate::LlmGateway)
//! - [`BankQuestionProvider`] selects from a local [`QuestionBank`](quizzly_domain::QuestionBank)

pub mod local;
pub mod remote;

pub use local::BankQuestionProvider;
pub use remote::LlmQuestionProvider;
