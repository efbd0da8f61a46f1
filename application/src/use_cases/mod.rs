//! Use cases
//!
//! Application-level operations that orchestrate domain logic.
//!
//! - [`orchestrator`]: the setup / active / results flow
//! - [`countdown`]: the per-question timer task

pub mod countdown;
pub mod orchestrator;
