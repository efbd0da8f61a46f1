//! Port definitions
//!
//! Interfaces the application layer depends on. Adapters implementing them
//! live in the infrastructure and presentation layers.

pub mod llm_gateway;
pub mod progress;
pub mod question_provider;
