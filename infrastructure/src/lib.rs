//! Infrastructure layer for quizzly
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the Gemini HTTP gateway, the question bank
//! loader and configuration file loading.

pub mod bank;
pub mod config;
pub mod gemini;

// Re-export commonly used types
pub use bank::{BankLoadError, BankLoader};
pub use config::{
    ConfigLoader, ConfigValidationError, FileBankConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, FileProviderConfig, FileProviderKind, FileQuizConfig,
};
pub use gemini::{GeminiConfig, GeminiError, GeminiLlmGateway};
