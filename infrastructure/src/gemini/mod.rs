//! Google Gemini adapter
//!
//! Implements the [`LlmGateway`](quizzly_application::LlmGateway) port over
//! the `generateContent` REST endpoint with `reqwest`.

pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;

pub use error::GeminiError;
pub use gateway::{GeminiConfig, GeminiLlmGateway};
pub use session::GeminiSession;
