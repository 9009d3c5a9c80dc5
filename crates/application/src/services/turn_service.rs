//! Turn service - The turn orchestration pipeline
//!
//! Sequences one conversational turn end to end:
//! validate → retrieve (optional) → compose → generate → synthesize
//! (optional) → reply. Stages run strictly in order because each stage's
//! output is the next stage's input. Retrieval and generation failures
//! terminate the turn; synthesis is best-effort.

use std::{fmt, sync::Arc, time::Instant};

use domain::{ComposedPrompt, CompositionScheme, TurnReply, TurnRequest, retrieval_query};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{GenerationPort, RetrievalPort, SpeechPort},
};

/// Fixed instruction sent on the question-generation path
pub const QUESTION_INSTRUCTION: &str = "randomly generate a question given the setting";

/// Pipeline configuration selecting one orchestration variant
///
/// The two deployed variants differ only in these three switches; they are
/// configuration, never a per-request decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Prompt composition scheme
    #[serde(default)]
    pub composition: CompositionScheme,
    /// Whether the retrieval stage runs before composition
    #[serde(default)]
    pub retrieval_enabled: bool,
    /// Whether the speech stage runs after generation
    #[serde(default)]
    pub speech_enabled: bool,
}

impl PipelineConfig {
    /// Voice variant: character passed straight through, reply voiced,
    /// no retrieval
    pub const fn voice() -> Self {
        Self {
            composition: CompositionScheme::CharacterDirect,
            retrieval_enabled: false,
            speech_enabled: true,
        }
    }

    /// Retrieval-augmented variant: context fused into the prompt, no speech
    pub const fn augmented() -> Self {
        Self {
            composition: CompositionScheme::ContextFused,
            retrieval_enabled: true,
            speech_enabled: false,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::voice()
    }
}

/// Service orchestrating conversational turns
pub struct TurnService {
    generation: Arc<dyn GenerationPort>,
    retrieval: Option<Arc<dyn RetrievalPort>>,
    speech: Option<Arc<dyn SpeechPort>>,
    pipeline: PipelineConfig,
}

impl fmt::Debug for TurnService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TurnService")
            .field("pipeline", &self.pipeline)
            .field("has_retrieval", &self.retrieval.is_some())
            .field("has_speech", &self.speech.is_some())
            .finish_non_exhaustive()
    }
}

impl TurnService {
    /// Create a turn service with only the generation backend wired
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the pipeline enables a
    /// stage that has no port.
    pub fn new(
        generation: Arc<dyn GenerationPort>,
        pipeline: PipelineConfig,
    ) -> Result<Self, ApplicationError> {
        Self::with_ports(generation, None, None, pipeline)
    }

    /// Create a turn service with all backends wired explicitly
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the pipeline enables a
    /// stage that has no port.
    pub fn with_ports(
        generation: Arc<dyn GenerationPort>,
        retrieval: Option<Arc<dyn RetrievalPort>>,
        speech: Option<Arc<dyn SpeechPort>>,
        pipeline: PipelineConfig,
    ) -> Result<Self, ApplicationError> {
        if pipeline.retrieval_enabled && retrieval.is_none() {
            return Err(ApplicationError::Configuration(
                "pipeline enables retrieval but no retrieval backend is configured".to_string(),
            ));
        }
        if pipeline.speech_enabled && speech.is_none() {
            return Err(ApplicationError::Configuration(
                "pipeline enables speech but no speech backend is configured".to_string(),
            ));
        }

        Ok(Self {
            generation,
            retrieval,
            speech,
            pipeline,
        })
    }

    /// The active pipeline configuration
    pub const fn pipeline(&self) -> &PipelineConfig {
        &self.pipeline
    }

    /// Run one turn from request to terminal outcome
    ///
    /// # Errors
    ///
    /// Returns the first fatal stage failure; synthesis failures are
    /// swallowed and reported as a missing `audio_ref`.
    #[instrument(skip(self, request), fields(
        query_len = request.query.len(),
        scheme = ?self.pipeline.composition
    ))]
    pub async fn run_turn(&self, request: TurnRequest) -> Result<TurnReply, ApplicationError> {
        let start = Instant::now();

        // Stage 1: retrieval (optional, fatal on error)
        let passages = match &self.retrieval {
            Some(retrieval) if self.pipeline.retrieval_enabled => {
                let composite = retrieval_query(&request.character, &request.query);
                let passages = retrieval.retrieve(&composite).await?;
                debug!(passages = passages.len(), "Context retrieved");
                passages
            },
            _ => Vec::new(),
        };

        // Stage 2: composition (pure, cannot fail)
        let prompt = ComposedPrompt::compose(
            self.pipeline.composition,
            &request.query,
            &passages,
            &request.character,
        );

        // Stage 3: generation (fatal on error)
        let generated = self
            .generation
            .generate(&prompt.query, &prompt.steering)
            .await?;

        let mut reply = TurnReply::text(generated.reply);

        // Stage 4: synthesis (optional, best-effort)
        if self.pipeline.speech_enabled {
            if let Some(speech) = &self.speech {
                match speech.synthesize(&reply.reply).await {
                    Ok(audio) => reply.audio_ref = Some(audio.audio_ref),
                    Err(e) => {
                        warn!(error = %e, "Synthesis failed, returning text-only reply");
                    },
                }
            }
        }

        #[allow(clippy::cast_possible_truncation)]
        let latency_ms = start.elapsed().as_millis() as u64;

        debug!(
            model = %generated.model,
            tokens = ?generated.tokens_used,
            latency_ms,
            has_audio = reply.audio_ref.is_some(),
            "Turn completed"
        );

        Ok(reply)
    }

    /// Generate a setting-appropriate question for the given tag
    ///
    /// Sends a fixed instruction with the caller's tag as steering. No
    /// retrieval runs on this path.
    #[instrument(skip(self))]
    pub async fn generate_question(
        &self,
        question_type: &str,
    ) -> Result<TurnReply, ApplicationError> {
        let generated = self
            .generation
            .generate(QUESTION_INSTRUCTION, question_type)
            .await?;

        Ok(TurnReply::text(generated.reply))
    }

    /// Check if the generation backend is healthy
    pub async fn is_healthy(&self) -> bool {
        self.generation.is_healthy().await
    }
}
