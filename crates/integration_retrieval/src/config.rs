//! Retrieval service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the passage-retrieval service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Retrieval service base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Number of passages requested per query
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8010".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_top_k() -> usize {
    4
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            top_k: default_top_k(),
        }
    }
}
