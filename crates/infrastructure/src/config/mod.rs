//! Application configuration
//!
//! Layered configuration: hard defaults, then an optional
//! `persona-relay.toml`, then `PERSONA_RELAY_*` environment overrides.
//! Split into focused sections:
//! - `server`: HTTP bind address and CORS origins
//! - `pipeline`: which orchestration variant this process runs
//! - `generation` / `retrieval` / `speech`: backend client settings

mod server;

use std::fmt;

use ai_core::GenerationConfig;
use ai_speech::SpeechConfig;
use application::PipelineConfig;
use integration_retrieval::RetrievalConfig;
use serde::{Deserialize, Serialize};

pub use server::ServerConfig;

/// Deployable orchestration variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceVariant {
    /// Character chat with voiced replies, no retrieval
    #[default]
    Voice,
    /// Retrieval-augmented chat, text-only replies
    Augmented,
}

impl fmt::Display for ServiceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Voice => write!(f, "voice"),
            Self::Augmented => write!(f, "augmented"),
        }
    }
}

/// Pipeline section of the configuration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PipelineSettings {
    /// Active orchestration variant
    #[serde(default)]
    pub variant: ServiceVariant,
}

impl PipelineSettings {
    /// Resolve the variant into the orchestrator's pipeline configuration
    pub const fn to_pipeline(self) -> PipelineConfig {
        match self.variant {
            ServiceVariant::Voice => PipelineConfig::voice(),
            ServiceVariant::Augmented => PipelineConfig::augmented(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Pipeline variant selection
    #[serde(default)]
    pub pipeline: PipelineSettings,

    /// Generation backend configuration
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Retrieval backend configuration
    #[serde(default)]
    pub retrieval: RetrievalConfig,

    /// Speech backend configuration
    #[serde(default)]
    pub speech: SpeechConfig,
}

impl AppConfig {
    /// Load configuration from defaults, file, and environment
    ///
    /// # Errors
    ///
    /// Returns a `config::ConfigError` when a source cannot be read or the
    /// merged values do not deserialize.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8001)?
            // Load from file if exists
            .add_source(config::File::with_name("persona-relay").required(false))
            // Override with environment variables (e.g., PERSONA_RELAY_SERVER_PORT)
            .add_source(
                config::Environment::with_prefix("PERSONA_RELAY")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
