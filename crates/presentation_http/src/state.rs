//! Application state shared across handlers

use std::sync::Arc;

use application::TurnService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Turn orchestration service
    pub turn_service: Arc<TurnService>,
}
