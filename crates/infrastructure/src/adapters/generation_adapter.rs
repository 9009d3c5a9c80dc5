//! Generation adapter - Implements GenerationPort using ai_core

use std::time::Instant;

use ai_core::{ChatEngine, ChatRequest, DoubaoChatEngine, GenerationConfig, GenerationError};
use application::{
    error::ApplicationError,
    ports::{GenerationPort, GenerationResult},
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter for the Doubao chat-completions backend
#[derive(Debug)]
pub struct DoubaoGenerationAdapter {
    engine: DoubaoChatEngine,
}

impl DoubaoGenerationAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the engine fails to initialize.
    pub fn new(config: GenerationConfig) -> Result<Self, ApplicationError> {
        let engine = DoubaoChatEngine::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

        Ok(Self { engine })
    }

    /// Create with the default Doubao-lite configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the engine fails to initialize.
    pub fn with_defaults() -> Result<Self, ApplicationError> {
        Self::new(GenerationConfig::doubao_lite())
    }

    /// Convert ai_core error to application error
    fn map_error(e: GenerationError) -> ApplicationError {
        ApplicationError::Generation(e.to_string())
    }
}

#[async_trait]
impl GenerationPort for DoubaoGenerationAdapter {
    #[instrument(skip(self, query, steering), fields(query_len = query.len(), steering_len = steering.len()))]
    async fn generate(
        &self,
        query: &str,
        steering: &str,
    ) -> Result<GenerationResult, ApplicationError> {
        let start = Instant::now();

        // An empty steering field means no system turn at all.
        let request = if steering.is_empty() {
            ChatRequest::simple(query)
        } else {
            ChatRequest::with_system(steering, query)
        };

        let response = self.engine.generate(request).await.map_err(Self::map_error)?;

        #[allow(clippy::cast_possible_truncation)]
        let latency_ms = start.elapsed().as_millis() as u64;

        debug!(
            model = %response.model,
            latency_ms,
            "Generation completed"
        );

        Ok(GenerationResult {
            reply: response.content,
            model: response.model,
            tokens_used: response.usage.map(|u| u.total_tokens),
            latency_ms,
        })
    }

    async fn is_healthy(&self) -> bool {
        self.engine.health_check().await.unwrap_or(false)
    }

    fn model_name(&self) -> String {
        self.engine.default_model().to_string()
    }
}
