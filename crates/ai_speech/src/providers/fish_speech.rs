//! fish-speech Text-to-Speech provider
//!
//! Implements [`TextToSpeech`] against a fish-speech HTTP server. The server
//! answers `POST /v1/tts` with raw audio bytes; this provider writes them to
//! the configured output directory and returns the file path.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, error, instrument, warn};
use uuid::Uuid;

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::TextToSpeech;
use crate::types::{AudioFormat, SynthesizedAudio};

/// TTS provider backed by a fish-speech server
#[derive(Debug, Clone)]
pub struct FishSpeechProvider {
    client: Client,
    config: SpeechConfig,
}

/// fish-speech synthesis request body
#[derive(Debug, Serialize)]
struct TtsRequest<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_id: Option<&'a str>,
    format: &'a str,
}

impl FishSpeechProvider {
    /// Create a new fish-speech provider
    ///
    /// # Errors
    ///
    /// Returns [`SpeechError::Configuration`] if the configuration is
    /// invalid or the HTTP client cannot be built.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Build the TTS endpoint URL
    fn tts_url(&self) -> String {
        format!("{}/v1/tts", self.config.base_url.trim_end_matches('/'))
    }

    /// Build the health endpoint URL
    fn health_url(&self) -> String {
        format!("{}/v1/health", self.config.base_url.trim_end_matches('/'))
    }

    /// Write audio bytes to a fresh file in the output directory
    async fn write_audio(&self, data: &[u8]) -> Result<SynthesizedAudio, SpeechError> {
        let format = self.config.output_format;
        let filename = format!("{}.{}", Uuid::new_v4(), format.extension());
        let path = self.config.output_dir.join(filename);

        tokio::fs::create_dir_all(&self.config.output_dir)
            .await
            .map_err(|e| SpeechError::OutputFailed(format!("create output dir: {e}")))?;

        tokio::fs::write(&path, data)
            .await
            .map_err(|e| SpeechError::OutputFailed(format!("write {}: {e}", path.display())))?;

        debug!(path = %path.display(), size = data.len(), "Wrote synthesized audio");

        Ok(SynthesizedAudio {
            path,
            format,
            size_bytes: data.len(),
        })
    }
}

#[async_trait]
impl TextToSpeech for FishSpeechProvider {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn synthesize(&self, text: &str) -> Result<SynthesizedAudio, SpeechError> {
        if text.is_empty() {
            return Err(SpeechError::SynthesisFailed(
                "Cannot synthesize empty text".to_string(),
            ));
        }

        let body = TtsRequest {
            text,
            reference_id: self.config.reference_id.as_deref(),
            format: self.config.output_format.wire_name(),
        };

        debug!("Sending synthesis request to fish-speech");

        let response = self.client.post(self.tts_url()).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Synthesis request failed");
            return Err(SpeechError::SynthesisFailed(format!(
                "Status {status}: {body}"
            )));
        }

        let audio = response.bytes().await.map_err(|e| {
            SpeechError::InvalidResponse(format!("reading audio body failed: {e}"))
        })?;

        if audio.is_empty() {
            warn!("fish-speech returned an empty audio body");
            return Err(SpeechError::SynthesisFailed(
                "Server produced empty audio".to_string(),
            ));
        }

        self.write_audio(&audio).await
    }

    async fn is_available(&self) -> bool {
        self.client
            .get(self.health_url())
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .map(|resp| resp.status().is_success())
            .unwrap_or(false)
    }

    fn output_format(&self) -> AudioFormat {
        self.config.output_format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_provider_with_valid_config() {
        let provider = FishSpeechProvider::new(SpeechConfig::default());
        assert!(provider.is_ok());
    }

    #[test]
    fn rejects_invalid_config() {
        let config = SpeechConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            FishSpeechProvider::new(config),
            Err(SpeechError::Configuration(_))
        ));
    }

    #[test]
    fn tts_url_strips_trailing_slash() {
        let config = SpeechConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..Default::default()
        };
        let provider = FishSpeechProvider::new(config).unwrap();
        assert_eq!(provider.tts_url(), "http://localhost:8080/v1/tts");
        assert_eq!(provider.health_url(), "http://localhost:8080/v1/health");
    }

    #[tokio::test]
    async fn empty_text_is_rejected_before_any_request() {
        // base_url points nowhere; the guard must fire first.
        let config = SpeechConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            ..Default::default()
        };
        let provider = FishSpeechProvider::new(config).unwrap();

        let result = provider.synthesize("").await;
        assert!(matches!(result, Err(SpeechError::SynthesisFailed(_))));
    }

    #[test]
    fn output_format_reflects_config() {
        let config = SpeechConfig {
            output_format: AudioFormat::Mp3,
            ..Default::default()
        };
        let provider = FishSpeechProvider::new(config).unwrap();
        assert_eq!(provider.output_format(), AudioFormat::Mp3);
    }
}
