//! Question-generation handler (augmented variant)
//!
//! The raw text body is the question-type tag; the query itself is a fixed
//! instruction. Retrieval does not run on this path.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::{info, instrument};

use crate::{error::ApiError, state::AppState};

/// Question response body
#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    /// Turn status
    pub status: &'static str,
    /// Generated question text
    pub result: String,
}

/// Generate a setting-appropriate question for the posted tag
#[instrument(skip(state, body), fields(body_len = body.len()))]
pub async fn generate_question(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<QuestionResponse>, ApiError> {
    let question_type = body.trim();
    info!(question_type = %question_type, "Received question request");

    let reply = state.turn_service.generate_question(question_type).await?;

    Ok(Json(QuestionResponse {
        status: "ok",
        result: reply.reply,
    }))
}
