//! Route definitions
//!
//! One router per orchestration variant; the variant is fixed at startup
//! from configuration, never negotiated per request.

use axum::{
    Router,
    routing::{get, post},
};
use infrastructure::ServiceVariant;

use crate::{handlers, state::AppState};

/// Create the router for the configured variant
pub fn create_router(state: AppState, variant: ServiceVariant) -> Router {
    match variant {
        ServiceVariant::Voice => Router::new()
            .route("/", get(handlers::root::hello))
            .route("/message", post(handlers::message::voice_message))
            .route("/chat", post(handlers::chat::chat))
            .route("/get-prompt", get(handlers::root::get_prompt))
            .with_state(state),
        ServiceVariant::Augmented => Router::new()
            .route("/", get(handlers::root::hello))
            .route("/message", post(handlers::message::augmented_message))
            .route("/question", post(handlers::question::generate_question))
            .route("/get_prompt", get(handlers::root::get_prompt))
            .with_state(state),
    }
}
