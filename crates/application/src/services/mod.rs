//! Application services

mod turn_service;

pub use turn_service::{PipelineConfig, QUESTION_INSTRUCTION, TurnService};
