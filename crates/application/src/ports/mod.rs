//! Port definitions for the application layer
//!
//! Ports are the interfaces through which the orchestrator reaches its
//! backends. Adapters in the infrastructure layer implement them.

mod generation_port;
mod retrieval_port;
mod speech_port;

pub use generation_port::{GenerationPort, GenerationResult};
#[cfg(test)]
pub use generation_port::MockGenerationPort;
pub use retrieval_port::RetrievalPort;
#[cfg(test)]
pub use retrieval_port::MockRetrievalPort;
pub use speech_port::{SpeechPort, SynthesisResult};
#[cfg(test)]
pub use speech_port::MockSpeechPort;
