use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tokio::time::timeout;
use tracing::warn;

use crate::config::GenerationConfig;

/// Failure modes of the external text-generation collaborator. None of
/// these propagate to API callers; every consumer recovers with a static
/// fallback.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("generation transport failed: {0}")]
    Transport(String),
    #[error("generation timed out")]
    Timeout,
    #[error("generation returned an empty response")]
    Empty,
    #[error("generation returned malformed content: {0}")]
    Malformed(String),
}

/// Deterministically-built prompt handed to the collaborator.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub system: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Seam for the external language-model collaborator, object-safe so the
/// service can hold test doubles.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

/// Chat-completions client for OpenAI-compatible endpoints. Each attempt is
/// bounded by the configured timeout, with at most one automatic retry.
pub struct OpenAiGenerator {
    client: reqwest::Client,
    api_key: String,
    config: GenerationConfig,
}

impl OpenAiGenerator {
    /// Returns `None` when no API key is configured; callers then use their
    /// fallback path without issuing network calls.
    pub fn from_config(config: &GenerationConfig) -> Option<Self> {
        let api_key = config.api_key.clone()?;
        Some(Self {
            client: reqwest::Client::new(),
            api_key,
            config: config.clone(),
        })
    }

    async fn attempt(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let body = json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": request.system },
                { "role": "user", "content": request.prompt },
            ],
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
        });

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| GenerationError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::Transport(format!(
                "endpoint returned status {status}"
            )));
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|err| GenerationError::Malformed(err.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(GenerationError::Empty)
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let attempts = self.config.max_retries as u32 + 1;
        let mut last_error = GenerationError::Empty;

        for attempt in 1..=attempts {
            match timeout(self.config.timeout, self.attempt(request)).await {
                Ok(Ok(content)) => return Ok(content),
                Ok(Err(err)) => {
                    warn!(%err, attempt, "generation attempt failed");
                    last_error = err;
                }
                Err(_) => {
                    warn!(attempt, "generation attempt timed out");
                    last_error = GenerationError::Timeout;
                }
            }
        }

        Err(last_error)
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}
