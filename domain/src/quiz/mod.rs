//! Quiz settings, the session state machine and results.

pub mod result;
pub mod session;
pub mod settings;
