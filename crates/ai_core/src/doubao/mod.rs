//! Doubao-lite generation engine implementation
//!
//! Connects to the Doubao OpenAI-compatible chat-completions API (or any
//! server speaking the same dialect).

mod client;

pub use client::DoubaoChatEngine;
