//! Integration tests for the chat proxy
//!
//! Exercises the full router against a wiremock stand-in for the completion
//! endpoint, the same way the real binary talks to Together.

use serde_json::json;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use foliochat::config::Config;
use foliochat::profile::Profile;
use foliochat::providers::TogetherProvider;
use foliochat::server::{router, AppState};

/// Build a router whose provider points at the given mock server
fn app_for(server_uri: &str, timeout_seconds: u64) -> axum::Router {
    let mut config = Config::default();
    config.provider.api_base = server_uri.to_string();
    config.provider.timeout_seconds = timeout_seconds;
    // Not set in the environment; the bearer token is simply empty.
    config.provider.api_key_env = "FOLIOCHAT_TEST_API_KEY".to_string();

    let provider = Arc::new(TogetherProvider::new(config.provider.clone()).unwrap());
    let state = AppState::new(provider, Arc::new(Profile::default()), Arc::new(config));
    router(state)
}

fn chat_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn choices_body(content: &str) -> serde_json::Value {
    json!({
        "choices": [{
            "message": { "role": "assistant", "content": content }
        }]
    })
}

#[tokio::test]
async fn test_success_returns_first_choice_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(choices_body("Hi there")))
        .expect(1)
        .mount(&server)
        .await;

    let app = app_for(&server.uri(), 30);
    let response = app
        .oneshot(chat_request(
            json!({"messages": [{"role": "user", "content": "Hello"}]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body, json!({"role": "assistant", "content": "Hi there"}));
}

#[tokio::test]
async fn test_system_prompt_prepended_to_forwarded_messages() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(choices_body("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let app = app_for(&server.uri(), 30);
    let _ = app
        .oneshot(chat_request(
            json!({"messages": [{"role": "user", "content": "Hello"}]}),
        ))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let forwarded: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();

    let messages = forwarded["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(
        messages[1],
        json!({"role": "user", "content": "Hello"})
    );

    // Fixed model identifier and sampling parameters go with every request.
    assert_eq!(forwarded["model"], "mistralai/Mistral-7B-Instruct-v0.1");
    assert_eq!(forwarded["temperature"], 0.3);
    assert_eq!(forwarded["max_tokens"], 500);
    assert_eq!(forwarded["top_p"], 0.9);
}

#[tokio::test]
async fn test_malformed_entries_dropped_before_forwarding() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(choices_body("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let app = app_for(&server.uri(), 30);
    let _ = app
        .oneshot(chat_request(json!({"messages": [
            {"role": "user", "content": "first"},
            {"role": "user"},
            {"role": "assistant", "content": "second"}
        ]})))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let forwarded: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let messages = forwarded["messages"].as_array().unwrap();

    // System prompt plus the two surviving entries.
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1]["content"], "first");
    assert_eq!(messages[2]["content"], "second");
}

#[tokio::test]
async fn test_provider_error_status_yields_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .expect(1)
        .mount(&server)
        .await;

    let app = app_for(&server.uri(), 30);
    let response = app
        .oneshot(chat_request(
            json!({"messages": [{"role": "user", "content": "Hello"}]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["role"], "assistant");
    assert!(body["content"]
        .as_str()
        .unwrap()
        .starts_with("I'm currently unavailable"));
}

#[tokio::test]
async fn test_zero_choices_treated_as_provider_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .expect(1)
        .mount(&server)
        .await;

    let app = app_for(&server.uri(), 30);
    let response = app
        .oneshot(chat_request(
            json!({"messages": [{"role": "user", "content": "Hello"}]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert!(body["content"]
        .as_str()
        .unwrap()
        .starts_with("I'm currently unavailable"));
}

#[tokio::test]
async fn test_wrong_method_gets_405_and_no_provider_call() {
    let server = MockServer::start().await;

    // No call must reach the completion endpoint.
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(choices_body("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let app = app_for(&server.uri(), 30);
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/chat")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unparseable_body_yields_fallback_without_provider_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(choices_body("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let app = app_for(&server.uri(), 30);
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/chat")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["role"], "assistant");
}

#[tokio::test]
async fn test_slow_provider_hits_deadline_and_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(choices_body("too late"))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let app = app_for(&server.uri(), 1);
    let response = app
        .oneshot(chat_request(
            json!({"messages": [{"role": "user", "content": "Hello"}]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert!(body["content"]
        .as_str()
        .unwrap()
        .starts_with("I'm currently unavailable"));
}
