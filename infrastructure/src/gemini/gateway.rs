//! Gemini LLM Gateway implementation

use super::protocol::generate_content_url;
use super::session::GeminiSession;
use crate::config::{API_KEY_ENV, DEFAULT_GEMINI_ENDPOINT, FileProviderConfig};
use async_trait::async_trait;
use quizzly_application::{GatewayError, LlmGateway, LlmSession};
use quizzly_domain::Model;
use std::time::Duration;
use tracing::info;

/// Connection settings for the Gemini REST API
#[derive(Clone)]
pub struct GeminiConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    /// Transport-level timeout for each HTTP request
    pub request_timeout: Option<Duration>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            api_key: None,
            request_timeout: None,
        }
    }
}

impl From<&FileProviderConfig> for GeminiConfig {
    fn from(config: &FileProviderConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            api_key: config.api_key().map(str::to_string),
            request_timeout: Some(Duration::from_secs(config.timeout_seconds)),
        }
    }
}

/// LLM Gateway implementation for Google Gemini
///
/// Construction never fails on a missing key; session creation does, so the
/// problem surfaces as a generation error the player can read.
pub struct GeminiLlmGateway {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiLlmGateway {
    pub fn new(config: GeminiConfig) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        info!(
            endpoint = %config.endpoint,
            has_key = config.api_key.is_some(),
            "GeminiLlmGateway initialized"
        );
        Ok(Self { client, config })
    }

    fn api_key(&self) -> Result<&str, GatewayError> {
        self.config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                GatewayError::MissingCredential(format!(
                    "set {} or [provider] api_key",
                    API_KEY_ENV
                ))
            })
    }
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        let api_key = self.api_key()?.to_string();
        let url = generate_content_url(&self.config.endpoint, model.as_str());
        Ok(Box::new(GeminiSession::new(
            self.client.clone(),
            url,
            api_key,
            model.clone(),
            system_prompt.to_string(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_fails_at_session_creation() {
        let gateway = GeminiLlmGateway::new(GeminiConfig::default()).unwrap();
        let err = gateway
            .create_session_with_system_prompt(&Model::default(), "system")
            .await
            .err()
            .unwrap();
        assert!(matches!(err, GatewayError::MissingCredential(_)));
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[tokio::test]
    async fn test_session_created_with_key() {
        let gateway = GeminiLlmGateway::new(GeminiConfig {
            api_key: Some("test-key".to_string()),
            ..Default::default()
        })
        .unwrap();
        let session = gateway
            .create_session_with_system_prompt(&Model::Gemini25Pro, "system")
            .await
            .unwrap();
        assert_eq!(session.model(), &Model::Gemini25Pro);
    }

    #[test]
    fn test_config_from_file_config() {
        let file = FileProviderConfig {
            api_key: Some(String::new()),
            timeout_seconds: 12,
            ..Default::default()
        };
        let config = GeminiConfig::from(&file);
        assert_eq!(config.api_key, None);
        assert_eq!(config.request_timeout, Some(Duration::from_secs(12)));
        assert_eq!(config.endpoint, DEFAULT_GEMINI_ENDPOINT);
    }
}
