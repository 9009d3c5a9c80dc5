//! Liveness and prompt-hint handlers

use axum::Json;
use serde::Serialize;

/// Static hint returned by the prompt endpoints
const PROMPT_HINT: &str = "请输入您的图像生成描述";

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    #[serde(rename = "Hello")]
    pub hello: &'static str,
}

/// Liveness probe
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse { hello: "World" })
}

/// Prompt hint response
#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub prompt: &'static str,
}

/// Return the static prompt hint
pub async fn get_prompt() -> Json<PromptResponse> {
    Json(PromptResponse {
        prompt: PROMPT_HINT,
    })
}
