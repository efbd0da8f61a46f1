//! Prompt domain
//!
//! Instruction text sent to the generative model.

mod template;

pub use template::QuizPromptTemplate;
