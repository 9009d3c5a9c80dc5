//! Message handlers for both orchestration variants
//!
//! The voice variant accepts `{ message, character }` and answers with an
//! audio reference alongside the reply; the retrieval-augmented variant
//! accepts `{ query, character }` and answers with text only.

use axum::{Json, extract::State};
use domain::TurnRequest;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{error::ApiError, state::AppState};

/// Status value carried by successful turn responses
const STATUS_OK: &str = "ok";

/// Voice-variant message request body
#[derive(Debug, Deserialize)]
pub struct VoiceMessageRequest {
    /// User message
    pub message: String,
    /// Persona tag
    pub character: String,
}

/// Voice-variant message response body
#[derive(Debug, Serialize)]
pub struct VoiceMessageResponse {
    /// Turn status
    pub status: &'static str,
    /// Generated reply text
    pub result: String,
    /// Path of the synthesized audio; null when synthesis was skipped or
    /// failed
    pub audio_file: Option<String>,
}

/// Handle a voice-variant message
#[instrument(skip(state, request), fields(message_len = request.message.len()))]
pub async fn voice_message(
    State(state): State<AppState>,
    Json(request): Json<VoiceMessageRequest>,
) -> Result<Json<VoiceMessageResponse>, ApiError> {
    info!(character = %request.character, "Received message");

    let turn = TurnRequest::new(request.message, request.character)
        .map_err(application::ApplicationError::from)?;

    let reply = state.turn_service.run_turn(turn).await?;

    Ok(Json(VoiceMessageResponse {
        status: STATUS_OK,
        result: reply.reply,
        audio_file: reply.audio_ref,
    }))
}

/// Augmented-variant message request body
#[derive(Debug, Deserialize)]
pub struct AugmentedMessageRequest {
    /// User query
    pub query: String,
    /// Persona tag
    pub character: String,
}

/// Augmented-variant message response body (no audio field)
#[derive(Debug, Serialize)]
pub struct AugmentedMessageResponse {
    /// Turn status
    pub status: &'static str,
    /// Generated reply text
    pub result: String,
}

/// Handle a retrieval-augmented message
#[instrument(skip(state, request), fields(query_len = request.query.len()))]
pub async fn augmented_message(
    State(state): State<AppState>,
    Json(request): Json<AugmentedMessageRequest>,
) -> Result<Json<AugmentedMessageResponse>, ApiError> {
    info!(character = %request.character, "Received query");

    let turn = TurnRequest::new(request.query, request.character)
        .map_err(application::ApplicationError::from)?;

    let reply = state.turn_service.run_turn(turn).await?;

    Ok(Json(AugmentedMessageResponse {
        status: STATUS_OK,
        result: reply.reply,
    }))
}
