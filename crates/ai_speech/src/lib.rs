//! Text-to-Speech client for PersonaRelay
//!
//! Provides the [`TextToSpeech`] port and a fish-speech HTTP implementation.
//! Synthesized audio is written to a local output directory; the returned
//! file path is the opaque audio reference handed back to callers.
//!
//! # Example
//!
//! ```ignore
//! use ai_speech::{FishSpeechProvider, SpeechConfig, TextToSpeech};
//!
//! let provider = FishSpeechProvider::new(SpeechConfig::default())?;
//! let audio = provider.synthesize("你好").await?;
//! println!("audio at {}", audio.path.display());
//! ```

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

pub use config::SpeechConfig;
pub use error::SpeechError;
pub use ports::TextToSpeech;
pub use providers::fish_speech::FishSpeechProvider;
pub use types::{AudioFormat, SynthesizedAudio};
