//! Application behavior configuration.
//!
//! Controls how use cases behave at runtime: how long a generation request may
//! take and what "play again" does.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// What happens when the player asks to play again from the results screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplayMode {
    /// Restart with the same question list, no new request
    #[default]
    #[serde(rename = "same", alias = "same-questions")]
    SameQuestions,
    /// Request a fresh question list with the same settings
    Regenerate,
}

impl ReplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplayMode::SameQuestions => "same",
            ReplayMode::Regenerate => "regenerate",
        }
    }
}

impl fmt::Display for ReplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "same" | "same-questions" => Ok(ReplayMode::SameQuestions),
            "regenerate" | "new" => Ok(ReplayMode::Regenerate),
            other => Err(format!(
                "Invalid replay mode '{}': expected 'same' or 'regenerate'",
                other
            )),
        }
    }
}

/// Application behavior configuration.
#[derive(Debug, Clone, Default)]
pub struct BehaviorConfig {
    /// Maximum time to wait for a generation response before timing out.
    pub timeout: Option<Duration>,
    /// Replay behavior on the results screen.
    pub replay: ReplayMode,
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig with a timeout specified in seconds.
    pub fn with_timeout_seconds(seconds: u64) -> Self {
        Self {
            timeout: Some(Duration::from_secs(seconds)),
            ..Default::default()
        }
    }

    pub fn with_replay(mut self, replay: ReplayMode) -> Self {
        self.replay = replay;
        self
    }
}
