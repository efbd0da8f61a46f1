//! Application-level configuration.
//!
//! - [`BehaviorConfig`]: generation timeout and replay behavior
//! - [`ReplayMode`]: what "play again" does

pub mod behavior;

pub use behavior::{BehaviorConfig, ReplayMode};
