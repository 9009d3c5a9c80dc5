//! Generation backend client for PersonaRelay
//!
//! Wraps the remote text-generation service behind the [`ChatEngine`] trait.
//! The shipped implementation targets Doubao-lite through its
//! OpenAI-compatible chat-completions API.

pub mod config;
pub mod doubao;
pub mod error;
pub mod ports;

pub use config::GenerationConfig;
pub use doubao::DoubaoChatEngine;
pub use error::GenerationError;
pub use ports::{ChatEngine, ChatMessage, ChatRequest, ChatResponse, TokenUsage};
