//! Speech port - Interface to the speech-synthesis backend

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Result of a speech synthesis operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisResult {
    /// Opaque reference to the synthesized audio (a file path)
    pub audio_ref: String,
}

/// Port for speech synthesis
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechPort: Send + Sync {
    /// Synthesize speech for the given text
    async fn synthesize(&self, text: &str) -> Result<SynthesisResult, ApplicationError>;

    /// Check if the speech backend is reachable
    async fn is_available(&self) -> bool;
}
