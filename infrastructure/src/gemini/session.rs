//! Gemini LLM session implementation
//!
//! The REST API is stateless; each `send` is a single `generateContent` call
//! carrying the session's system instruction.

use super::error::{GeminiError, Result};
use super::protocol::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use quizzly_application::{GatewayError, LlmSession};
use quizzly_domain::Model;
use tracing::{debug, warn};

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiSession {
    client: reqwest::Client,
    url: String,
    api_key: String,
    model: Model,
    system_prompt: String,
}

impl GeminiSession {
    pub fn new(
        client: reqwest::Client,
        url: String,
        api_key: String,
        model: Model,
        system_prompt: String,
    ) -> Self {
        Self {
            client,
            url,
            api_key,
            model,
            system_prompt,
        }
    }

    async fn generate(&self, content: &str) -> Result<String> {
        let request = GenerateContentRequest::new(content, Some(&self.system_prompt));
        debug!(model = %self.model, prompt_bytes = content.len(), "Sending generateContent");

        let response = self
            .client
            .post(&self.url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                });
            warn!(status = status.as_u16(), "Gemini request failed: {}", message);
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        if let Some(reason) = parsed.block_reason() {
            return Err(GeminiError::Blocked(reason.to_string()));
        }
        let text = parsed.text().ok_or(GeminiError::EmptyResponse)?;
        debug!(model = %self.model, response_bytes = text.len(), "Received generateContent");
        Ok(text)
    }
}

#[async_trait]
impl LlmSession for GeminiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> std::result::Result<String, GatewayError> {
        self.generate(content).await.map_err(GatewayError::from)
    }
}
