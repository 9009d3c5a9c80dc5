//! PersonaRelay HTTP presentation layer
//!
//! This crate provides the HTTP API for PersonaRelay. One router serves
//! whichever orchestration variant the process is configured for.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
