//! Integration tests for the retrieval client using WireMock

use integration_retrieval::{RetrievalClient, RetrievalConfig, RetrievalError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method, path},
};

fn config_for_mock(base_url: &str) -> RetrievalConfig {
    RetrievalConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
        top_k: 3,
    }
}

#[tokio::test]
async fn retrieve_returns_passages_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/retrieve"))
        .and(body_partial_json(serde_json::json!({
            "query": "活泼测试",
            "top_k": 3
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "passages": [
                {"text": "事实A", "score": 0.91},
                {"text": "事实B", "score": 0.72}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RetrievalClient::new(config_for_mock(&mock_server.uri())).unwrap();
    let passages = client.retrieve("活泼测试").await.unwrap();

    assert_eq!(passages.len(), 2);
    assert_eq!(passages[0].text, "事实A");
    assert_eq!(passages[1].text, "事实B");
    assert_eq!(passages[0].score, Some(0.91));
}

#[tokio::test]
async fn retrieve_empty_passages_is_not_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/retrieve"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"passages": []})),
        )
        .mount(&mock_server)
        .await;

    let client = RetrievalClient::new(config_for_mock(&mock_server.uri())).unwrap();
    let passages = client.retrieve("无匹配").await.unwrap();

    assert!(passages.is_empty());
}

#[tokio::test]
async fn retrieve_server_error_surfaces() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/retrieve"))
        .respond_with(ResponseTemplate::new(500).set_body_string("index offline"))
        .mount(&mock_server)
        .await;

    let client = RetrievalClient::new(config_for_mock(&mock_server.uri())).unwrap();
    let result = client.retrieve("任何").await;

    match result {
        Err(RetrievalError::ServerError(msg)) => {
            assert!(msg.contains("500"));
            assert!(msg.contains("index offline"));
        },
        other => panic!("Expected ServerError, got {other:?}"),
    }
}

#[tokio::test]
async fn retrieve_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/retrieve"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = RetrievalClient::new(config_for_mock(&mock_server.uri())).unwrap();
    let result = client.retrieve("任何").await;

    assert!(matches!(result, Err(RetrievalError::ParseError(_))));
}

#[tokio::test]
async fn is_healthy_reflects_health_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = RetrievalClient::new(config_for_mock(&mock_server.uri())).unwrap();
    assert!(client.is_healthy().await);
}

#[tokio::test]
async fn is_healthy_false_when_unreachable() {
    let config = RetrievalConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 1,
        top_k: 3,
    };
    let client = RetrievalClient::new(config).unwrap();
    assert!(!client.is_healthy().await);
}
