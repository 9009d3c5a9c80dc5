//! Doubao chat-completions client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::ports::{ChatEngine, ChatRequest, ChatResponse, TokenUsage};

/// Generation engine backed by the Doubao chat-completions API
pub struct DoubaoChatEngine {
    client: Client,
    config: GenerationConfig,
}

impl std::fmt::Debug for DoubaoChatEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DoubaoChatEngine")
            .field("base_url", &self.config.base_url)
            .field("default_model", &self.config.default_model)
            .finish_non_exhaustive()
    }
}

impl DoubaoChatEngine {
    /// Create a new Doubao engine
    pub fn new(config: GenerationConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| GenerationError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            model = %config.default_model,
            "Initialized Doubao generation engine"
        );

        Ok(Self { client, config })
    }

    /// Create with default configuration for Doubao-lite
    pub fn with_defaults() -> Result<Self, GenerationError> {
        Self::new(GenerationConfig::doubao_lite())
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Get the model to use for a request
    fn resolve_model(&self, request: &ChatRequest) -> &str {
        request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model)
    }

    /// Attach the bearer token when an API key is configured
    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.config.api_key.as_deref() {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }
}

/// Chat-completions request body
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [crate::ports::ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

/// Chat-completions response body
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    model: String,
    choices: Vec<CompletionChoice>,
    #[serde(default)]
    usage: Option<CompletionUsage>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct CompletionUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[async_trait]
impl ChatEngine for DoubaoChatEngine {
    #[instrument(skip(self, request), fields(model = %self.resolve_model(&request)))]
    async fn generate(&self, request: ChatRequest) -> Result<ChatResponse, GenerationError> {
        let model = self.resolve_model(&request).to_string();

        let body = CompletionRequest {
            model: &model,
            messages: &request.messages,
            max_tokens: request.max_tokens.unwrap_or(self.config.max_tokens),
            temperature: request.temperature.unwrap_or(self.config.temperature),
        };

        debug!("Sending chat-completions request");

        let response = self
            .authorize(self.client.post(self.api_url("chat/completions")))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Generation request failed");
            return Err(GenerationError::ServerError(format!(
                "Status {status}: {body}"
            )));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GenerationError::InvalidResponse("no choices in response".to_string()))?;

        if choice.message.content.is_empty() {
            return Err(GenerationError::EmptyReply(completion.model));
        }

        let usage = completion.usage.map(|u| TokenUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        debug!(tokens = ?usage, "Generation completed");

        Ok(ChatResponse {
            content: choice.message.content,
            model: completion.model,
            usage,
            finish_reason: choice.finish_reason,
        })
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<bool, GenerationError> {
        let response = self
            .authorize(self.client.get(self.api_url("models")))
            .timeout(Duration::from_secs(5))
            .send()
            .await;

        match response {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(e) if e.is_timeout() || e.is_connect() => Ok(false),
            Err(e) => Err(GenerationError::RequestFailed(e.to_string())),
        }
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }
}
