//! Configuration for the speech synthesis client

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::AudioFormat;

/// Configuration for the fish-speech synthesis backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Base URL of the fish-speech server
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Reference voice identifier understood by the server, if any
    #[serde(default)]
    pub reference_id: Option<String>,

    /// Directory synthesized audio files are written into
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Output audio format
    #[serde(default)]
    pub output_format: AudioFormat,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("generated_audio")
}

const fn default_timeout_ms() -> u64 {
    60000
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            reference_id: None,
            output_dir: default_output_dir(),
            output_format: AudioFormat::default(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl SpeechConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a message describing the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".to_string());
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err("output_dir must not be empty".to_string());
        }
        Ok(())
    }
}
