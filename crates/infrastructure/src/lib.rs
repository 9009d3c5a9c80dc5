//! Infrastructure layer - Adapters and configuration
//!
//! Binds the backend clients (ai_core, ai_speech, integration_retrieval)
//! onto the application ports and provides process-wide configuration.

pub mod adapters;
pub mod config;

pub use adapters::{DoubaoGenerationAdapter, RetrievalAdapter, SpeechSynthesisAdapter};
pub use config::{AppConfig, PipelineSettings, ServerConfig, ServiceVariant};
