//! Configuration for the generation backend client

use serde::{Deserialize, Serialize};

/// Configuration for the generation backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Base URL of the OpenAI-compatible chat-completions server
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as a bearer token; omitted when `None`
    #[serde(default)]
    pub api_key: Option<String>,

    /// Default model to use
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Temperature for sampling (0.0 - 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_base_url() -> String {
    "https://ark.cn-beijing.volces.com/api/v3".to_string()
}

fn default_model() -> String {
    "doubao-lite-4k".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000
}

const fn default_max_tokens() -> u32 {
    1024
}

const fn default_temperature() -> f32 {
    0.7
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            default_model: default_model(),
            timeout_ms: default_timeout_ms(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

impl GenerationConfig {
    /// Config for the Doubao-lite 4k-context model
    pub fn doubao_lite() -> Self {
        Self {
            default_model: "doubao-lite-4k".to_string(),
            ..Default::default()
        }
    }
}
