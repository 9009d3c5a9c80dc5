//! Turn entities
//!
//! A turn is one complete request/response cycle through the orchestration
//! pipeline: user utterance in, generated (and optionally voiced) reply out.
//! Turns carry no identity and are discarded once answered.

use crate::errors::DomainError;

/// A single inbound conversational turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRequest {
    /// User utterance driving the turn
    pub query: String,
    /// Persona tag steering generation style; opaque to the pipeline and
    /// allowed to be empty
    pub character: String,
}

impl TurnRequest {
    /// Create a validated turn request
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyQuery`] if the query is empty after
    /// trimming.
    pub fn new(
        query: impl Into<String>,
        character: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(DomainError::EmptyQuery);
        }
        Ok(Self {
            query,
            character: character.into(),
        })
    }
}

/// The successful outcome of a turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReply {
    /// Generated reply text
    pub reply: String,
    /// Opaque reference to synthesized audio. Present only when the speech
    /// stage ran and succeeded; absence does not signal failure.
    pub audio_ref: Option<String>,
}

impl TurnReply {
    /// A reply carrying text only
    pub fn text(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            audio_ref: None,
        }
    }

    /// Attach an audio reference to the reply
    #[must_use]
    pub fn with_audio(mut self, audio_ref: impl Into<String>) -> Self {
        self.audio_ref = Some(audio_ref.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_with_query_and_character() {
        let request = TurnRequest::new("你好", "活泼").unwrap();
        assert_eq!(request.query, "你好");
        assert_eq!(request.character, "活泼");
    }

    #[test]
    fn empty_character_is_allowed() {
        let request = TurnRequest::new("hello", "").unwrap();
        assert!(request.character.is_empty());
    }

    #[test]
    fn empty_query_is_rejected() {
        let result = TurnRequest::new("", "any");
        assert_eq!(result.unwrap_err(), DomainError::EmptyQuery);
    }

    #[test]
    fn whitespace_query_is_rejected() {
        let result = TurnRequest::new("   ", "any");
        assert_eq!(result.unwrap_err(), DomainError::EmptyQuery);
    }

    #[test]
    fn query_is_not_trimmed_on_accept() {
        // Trimming is only used for the emptiness check; the query itself
        // travels verbatim.
        let request = TurnRequest::new(" hi ", "").unwrap();
        assert_eq!(request.query, " hi ");
    }

    #[test]
    fn text_reply_has_no_audio() {
        let reply = TurnReply::text("回复X");
        assert_eq!(reply.reply, "回复X");
        assert!(reply.audio_ref.is_none());
    }

    #[test]
    fn with_audio_sets_reference() {
        let reply = TurnReply::text("hi").with_audio("/audio/out.wav");
        assert_eq!(reply.audio_ref.as_deref(), Some("/audio/out.wav"));
    }

    #[test]
    fn replies_with_identical_inputs_are_equal() {
        let a = TurnReply::text("same").with_audio("x.wav");
        let b = TurnReply::text("same").with_audio("x.wav");
        assert_eq!(a, b);
    }
}
