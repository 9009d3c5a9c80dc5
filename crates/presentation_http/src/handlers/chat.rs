//! Chat stub handler
//!
//! Answers with a fixed placeholder reply. Deliberately not wired to
//! generation; the voice variant's frontend polls it during development.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Fixed placeholder reply
const CHAT_PLACEHOLDER: &str = "这是一个测试回复";

/// Chat request body
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// User message
    pub message: String,
    /// Caller identifier, reserved for future context handling
    pub user_id: String,
}

/// Chat response body
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Reply text
    pub message: &'static str,
}

/// Handle a chat request with the placeholder reply
#[instrument(skip(request), fields(message_len = request.message.len()))]
pub async fn chat(Json(request): Json<ChatRequest>) -> Json<ChatResponse> {
    info!(user_id = %request.user_id, "Received chat message");

    Json(ChatResponse {
        message: CHAT_PLACEHOLDER,
    })
}
