//! Adapters implementing the application ports

mod generation_adapter;
mod retrieval_adapter;
mod speech_adapter;

pub use generation_adapter::DoubaoGenerationAdapter;
pub use retrieval_adapter::RetrievalAdapter;
pub use speech_adapter::SpeechSynthesisAdapter;
