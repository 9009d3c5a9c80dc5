//! Port definition for text-to-speech providers

use async_trait::async_trait;

use crate::error::SpeechError;
use crate::types::{AudioFormat, SynthesizedAudio};

/// Port for text-to-speech synthesis
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Synthesize speech for the given text and persist it locally
    ///
    /// # Errors
    ///
    /// Returns [`SpeechError::SynthesisFailed`] for empty input or backend
    /// failures, and [`SpeechError::OutputFailed`] when the audio cannot be
    /// written to disk.
    async fn synthesize(&self, text: &str) -> Result<SynthesizedAudio, SpeechError>;

    /// Check whether the synthesis service is reachable
    async fn is_available(&self) -> bool;

    /// Output format produced by this provider
    fn output_format(&self) -> AudioFormat;
}
