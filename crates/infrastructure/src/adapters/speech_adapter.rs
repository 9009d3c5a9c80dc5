//! Speech adapter - Implements SpeechPort using ai_speech

use ai_speech::{FishSpeechProvider, SpeechConfig, SpeechError, TextToSpeech};
use application::{
    error::ApplicationError,
    ports::{SpeechPort, SynthesisResult},
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter for the fish-speech synthesis backend
#[derive(Debug)]
pub struct SpeechSynthesisAdapter {
    provider: FishSpeechProvider,
}

impl SpeechSynthesisAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails to initialize.
    pub fn new(config: SpeechConfig) -> Result<Self, ApplicationError> {
        let provider = FishSpeechProvider::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

        Ok(Self { provider })
    }

    /// Map speech error to application error
    fn map_error(err: SpeechError) -> ApplicationError {
        ApplicationError::Synthesis(err.to_string())
    }
}

#[async_trait]
impl SpeechPort for SpeechSynthesisAdapter {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn synthesize(&self, text: &str) -> Result<SynthesisResult, ApplicationError> {
        let audio = self
            .provider
            .synthesize(text)
            .await
            .map_err(Self::map_error)?;

        debug!(
            path = %audio.path.display(),
            size = audio.size_bytes,
            "Synthesis complete"
        );

        Ok(SynthesisResult {
            audio_ref: audio.path.display().to_string(),
        })
    }

    async fn is_available(&self) -> bool {
        self.provider.is_available().await
    }
}
