//! Provider configuration from TOML (`[provider]` section)

use quizzly_domain::Model;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default Gemini REST endpoint
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Where questions come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileProviderKind {
    /// Generative model over HTTP
    #[default]
    Remote,
    /// Bundled or configured question bank
    Local,
}

impl fmt::Display for FileProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileProviderKind::Remote => f.write_str("remote"),
            FileProviderKind::Local => f.write_str("local"),
        }
    }
}

/// Raw provider configuration from TOML
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    pub kind: FileProviderKind,
    pub model: Model,
    /// Base URL of the generative language API
    pub endpoint: String,
    /// Timeout in seconds for one generation request
    pub timeout_seconds: u64,
    /// API key (prefer the `GEMINI_API_KEY` environment variable)
    pub api_key: Option<String>,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            kind: FileProviderKind::Remote,
            model: Model::default(),
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            timeout_seconds: 60,
            api_key: None,
        }
    }
}

impl FileProviderConfig {
    /// The API key, treating an empty string as absent
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }
}

// Keep the key out of logs and --show-config output
impl fmt::Debug for FileProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileProviderConfig")
            .field("kind", &self.kind)
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("api_key", &self.api_key().map(|_| "<redacted>"))
            .finish()
    }
}
