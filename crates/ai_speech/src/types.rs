//! Audio types shared across the speech crate

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Audio container format for synthesized output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// Uncompressed WAV (fish-speech default)
    #[default]
    Wav,
    /// MP3
    Mp3,
}

impl AudioFormat {
    /// File extension for this format
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
        }
    }

    /// Wire name used in synthesis requests
    pub const fn wire_name(self) -> &'static str {
        // Same spelling as the extension for both supported formats
        self.extension()
    }
}

/// Synthesized audio persisted to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedAudio {
    /// Path of the written audio file
    pub path: PathBuf,
    /// Format of the audio
    pub format: AudioFormat,
    /// Size of the written file in bytes
    pub size_bytes: usize,
}
