//! Integration tests for HTTP handlers
#![allow(clippy::expect_used)]

use std::sync::{Arc, Mutex};

use application::{
    ApplicationError, PipelineConfig, QUESTION_INSTRUCTION, TurnService,
    ports::{GenerationPort, GenerationResult, RetrievalPort, SpeechPort, SynthesisResult},
};
use async_trait::async_trait;
use axum_test::TestServer;
use infrastructure::ServiceVariant;
use presentation_http::{routes::create_router, state::AppState};
use serde_json::{Value, json};

/// Mock generation backend recording every call
struct MockGeneration {
    reply: String,
    fail: bool,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockGeneration {
    fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            fail: false,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: String::new(),
            fail: true,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl GenerationPort for MockGeneration {
    async fn generate(
        &self,
        query: &str,
        steering: &str,
    ) -> Result<GenerationResult, ApplicationError> {
        self.calls
            .lock()
            .expect("lock poisoned")
            .push((query.to_string(), steering.to_string()));

        if self.fail {
            return Err(ApplicationError::Generation("model down".to_string()));
        }

        Ok(GenerationResult {
            reply: self.reply.clone(),
            model: "mock-model".to_string(),
            tokens_used: Some(16),
            latency_ms: 5,
        })
    }

    async fn is_healthy(&self) -> bool {
        !self.fail
    }

    fn model_name(&self) -> String {
        "mock-model".to_string()
    }
}

/// Mock retrieval backend
struct MockRetrieval {
    passages: Vec<String>,
    fail: bool,
    calls: Mutex<Vec<String>>,
}

impl MockRetrieval {
    fn returning(passages: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            passages: passages.iter().map(ToString::to_string).collect(),
            fail: false,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            passages: Vec::new(),
            fail: true,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl RetrievalPort for MockRetrieval {
    async fn retrieve(&self, query: &str) -> Result<Vec<String>, ApplicationError> {
        self.calls
            .lock()
            .expect("lock poisoned")
            .push(query.to_string());

        if self.fail {
            return Err(ApplicationError::Retrieval("index offline".to_string()));
        }

        Ok(self.passages.clone())
    }

    async fn is_available(&self) -> bool {
        !self.fail
    }
}

/// Mock speech backend
struct MockSpeech {
    fail: bool,
}

#[async_trait]
impl SpeechPort for MockSpeech {
    async fn synthesize(&self, _text: &str) -> Result<SynthesisResult, ApplicationError> {
        if self.fail {
            return Err(ApplicationError::Synthesis("tts down".to_string()));
        }

        Ok(SynthesisResult {
            audio_ref: "generated_audio/reply.wav".to_string(),
        })
    }

    async fn is_available(&self) -> bool {
        !self.fail
    }
}

fn voice_server(generation: Arc<MockGeneration>, speech_fails: bool) -> TestServer {
    let service = TurnService::with_ports(
        generation,
        None,
        Some(Arc::new(MockSpeech { fail: speech_fails })),
        PipelineConfig::voice(),
    )
    .expect("pipeline must assemble");

    let state = AppState {
        turn_service: Arc::new(service),
    };

    TestServer::new(create_router(state, ServiceVariant::Voice)).expect("server must start")
}

fn augmented_server(
    generation: Arc<MockGeneration>,
    retrieval: Arc<MockRetrieval>,
) -> TestServer {
    let service = TurnService::with_ports(
        generation,
        Some(retrieval),
        None,
        PipelineConfig::augmented(),
    )
    .expect("pipeline must assemble");

    let state = AppState {
        turn_service: Arc::new(service),
    };

    TestServer::new(create_router(state, ServiceVariant::Augmented)).expect("server must start")
}

// =============================================================================
// Shared endpoints
// =============================================================================

#[tokio::test]
async fn hello_endpoint_on_both_variants() {
    let voice = voice_server(MockGeneration::replying("hi"), false);
    let response = voice.get("/").await;
    response.assert_status_ok();
    response.assert_json(&json!({"Hello": "World"}));

    let augmented = augmented_server(
        MockGeneration::replying("hi"),
        MockRetrieval::returning(&[]),
    );
    let response = augmented.get("/").await;
    response.assert_status_ok();
    response.assert_json(&json!({"Hello": "World"}));
}

// =============================================================================
// Voice variant
// =============================================================================

#[tokio::test]
async fn voice_message_success_includes_audio() {
    let generation = MockGeneration::replying("回复X");
    let server = voice_server(Arc::clone(&generation), false);

    let response = server
        .post("/message")
        .json(&json!({"message": "你好", "character": "活泼"}))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "status": "ok",
        "result": "回复X",
        "audio_file": "generated_audio/reply.wav"
    }));

    // Character-direct scheme: fields reach generation untouched.
    assert_eq!(generation.calls(), vec![("你好".to_string(), "活泼".to_string())]);
}

#[tokio::test]
async fn voice_message_speech_failure_degrades_to_null_audio() {
    let server = voice_server(MockGeneration::replying("回复X"), true);

    let response = server
        .post("/message")
        .json(&json!({"message": "你好", "character": ""}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["result"], "回复X");
    assert_eq!(body["audio_file"], Value::Null);
}

#[tokio::test]
async fn voice_message_empty_message_is_rejected() {
    let generation = MockGeneration::replying("unused");
    let server = voice_server(Arc::clone(&generation), false);

    let response = server
        .post("/message")
        .json(&json!({"message": "   ", "character": "x"}))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert!(body["detail"].as_str().expect("detail present").contains("empty"));

    // Rejected before any backend call.
    assert!(generation.calls().is_empty());
}

#[tokio::test]
async fn voice_message_generation_failure_is_500_with_detail() {
    let server = voice_server(MockGeneration::failing(), false);

    let response = server
        .post("/message")
        .json(&json!({"message": "你好", "character": ""}))
        .await;

    response.assert_status_internal_server_error();
    let body: Value = response.json();
    assert!(
        body["detail"]
            .as_str()
            .expect("detail present")
            .contains("model down")
    );
}

#[tokio::test]
async fn voice_message_missing_field_is_client_error() {
    let server = voice_server(MockGeneration::replying("unused"), false);

    let response = server.post("/message").json(&json!({"message": "hi"})).await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn chat_stub_returns_placeholder() {
    let server = voice_server(MockGeneration::replying("unused"), false);

    let response = server
        .post("/chat")
        .json(&json!({"message": "hello", "user_id": "u-1"}))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({"message": "这是一个测试回复"}));
}

#[tokio::test]
async fn voice_variant_prompt_hint_and_routes() {
    let server = voice_server(MockGeneration::replying("unused"), false);

    let response = server.get("/get-prompt").await;
    response.assert_status_ok();
    response.assert_json(&json!({"prompt": "请输入您的图像生成描述"}));

    // The question endpoint belongs to the augmented variant only.
    let response = server.post("/question").text("科幻").await;
    response.assert_status_not_found();
}

// =============================================================================
// Augmented variant
// =============================================================================

#[tokio::test]
async fn augmented_message_fuses_retrieved_context() {
    let generation = MockGeneration::replying("回复X");
    let retrieval = MockRetrieval::returning(&["事实A", "事实B"]);
    let server = augmented_server(Arc::clone(&generation), Arc::clone(&retrieval));

    let response = server
        .post("/message")
        .json(&json!({"query": "测试", "character": "活泼"}))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({"status": "ok", "result": "回复X"}));

    // Retrieval sees the persona-prefixed composite query.
    assert_eq!(retrieval.calls(), vec!["活泼测试".to_string()]);

    // Generation sees the raw query plus the fused steering string.
    assert_eq!(
        generation.calls(),
        vec![("测试".to_string(), "测试 事实A 事实B 活泼".to_string())]
    );
}

#[tokio::test]
async fn augmented_message_empty_context_keeps_separators() {
    let generation = MockGeneration::replying("回复");
    let retrieval = MockRetrieval::returning(&[]);
    let server = augmented_server(Arc::clone(&generation), retrieval);

    let response = server
        .post("/message")
        .json(&json!({"query": "你好", "character": ""}))
        .await;

    response.assert_status_ok();
    assert_eq!(
        generation.calls(),
        vec![("你好".to_string(), "你好  ".to_string())]
    );
}

#[tokio::test]
async fn augmented_message_retrieval_failure_stops_the_turn() {
    let generation = MockGeneration::replying("unused");
    let retrieval = MockRetrieval::failing();
    let server = augmented_server(Arc::clone(&generation), retrieval);

    let response = server
        .post("/message")
        .json(&json!({"query": "测试", "character": "活泼"}))
        .await;

    response.assert_status_internal_server_error();
    let body: Value = response.json();
    assert!(
        body["detail"]
            .as_str()
            .expect("detail present")
            .contains("index offline")
    );

    // Generation is never invoked after a fatal retrieval failure.
    assert!(generation.calls().is_empty());
}

#[tokio::test]
async fn augmented_message_has_no_audio_field() {
    let server = augmented_server(
        MockGeneration::replying("回复X"),
        MockRetrieval::returning(&[]),
    );

    let response = server
        .post("/message")
        .json(&json!({"query": "测试", "character": ""}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body.get("audio_file").is_none());
}

#[tokio::test]
async fn question_endpoint_uses_fixed_instruction_without_retrieval() {
    let generation = MockGeneration::replying("问题Y");
    let retrieval = MockRetrieval::returning(&["ignored"]);
    let server = augmented_server(Arc::clone(&generation), Arc::clone(&retrieval));

    let response = server.post("/question").text("科幻").await;

    response.assert_status_ok();
    response.assert_json(&json!({"status": "ok", "result": "问题Y"}));

    assert_eq!(
        generation.calls(),
        vec![(QUESTION_INSTRUCTION.to_string(), "科幻".to_string())]
    );
    assert!(retrieval.calls().is_empty());
}

#[tokio::test]
async fn augmented_variant_prompt_hint_and_routes() {
    let server = augmented_server(
        MockGeneration::replying("unused"),
        MockRetrieval::returning(&[]),
    );

    let response = server.get("/get_prompt").await;
    response.assert_status_ok();
    response.assert_json(&json!({"prompt": "请输入您的图像生成描述"}));

    // The chat stub belongs to the voice variant only.
    let response = server
        .post("/chat")
        .json(&json!({"message": "hi", "user_id": "u"}))
        .await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn identical_turns_yield_identical_responses() {
    let generation = MockGeneration::replying("deterministic");
    let retrieval = MockRetrieval::returning(&["事实A"]);
    let server = augmented_server(generation, retrieval);

    let body = json!({"query": "same", "character": "tag"});
    let first: Value = server.post("/message").json(&body).await.json();
    let second: Value = server.post("/message").json(&body).await.json();

    assert_eq!(first, second);
}
