use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use contract_analyzer::application::ports::{LlmClient, LlmClientError};
use contract_analyzer::infrastructure::llm::OpenAiClient;

#[derive(Default)]
struct Captured {
    body: Option<Value>,
    authorization: Option<String>,
}

async fn start_mock_openai_server(
    response_status: u16,
    response_body: &'static str,
    delay: Duration,
) -> (String, Arc<Mutex<Captured>>, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let captured = Arc::new(Mutex::new(Captured::default()));
    let captured_by_handler = Arc::clone(&captured);

    let app = Router::new().route(
        "/v1/chat/completions",
        post(move |headers: HeaderMap, body: String| {
            let captured = Arc::clone(&captured_by_handler);
            async move {
                {
                    let mut captured = captured.lock().unwrap();
                    captured.body = serde_json::from_str(&body).ok();
                    captured.authorization = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(String::from);
                }
                tokio::time::sleep(delay).await;
                let status = StatusCode::from_u16(response_status).unwrap();
                (status, response_body).into_response()
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let endpoint = format!("http://{}/v1/chat/completions", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (endpoint, captured, shutdown_tx)
}

fn client(endpoint: &str, timeout: Duration) -> OpenAiClient {
    OpenAiClient::new(
        "openai",
        endpoint,
        "sk-test-key",
        "gpt-4o-mini",
        800,
        0.0,
        timeout,
    )
    .unwrap()
}

#[tokio::test]
async fn given_successful_completion_when_calling_then_returns_first_choice_content() {
    let body = r#"{"choices": [{"message": {"role": "assistant", "content": "{\"contract_type\": \"NDA\"}"}}], "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}}"#;
    let (endpoint, _, shutdown_tx) = start_mock_openai_server(200, body, Duration::ZERO).await;

    let result = client(&endpoint, Duration::from_secs(5))
        .complete("system prompt", "user prompt")
        .await;

    assert_eq!(result.unwrap(), "{\"contract_type\": \"NDA\"}");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_completion_call_when_sent_then_request_has_model_messages_and_bearer_auth() {
    let body = r#"{"choices": [{"message": {"role": "assistant", "content": "ok"}}]}"#;
    let (endpoint, captured, shutdown_tx) =
        start_mock_openai_server(200, body, Duration::ZERO).await;

    client(&endpoint, Duration::from_secs(5))
        .complete("You are a helpful legal contract analyzer.", "CONTRACT:\nabc")
        .await
        .unwrap();

    let captured = captured.lock().unwrap();
    let request = captured.body.as_ref().expect("request body captured");
    assert_eq!(request["model"], "gpt-4o-mini");
    assert_eq!(request["max_tokens"], 800);
    assert_eq!(request["temperature"], 0.0);
    assert_eq!(request["messages"][0]["role"], "system");
    assert_eq!(
        request["messages"][0]["content"],
        "You are a helpful legal contract analyzer."
    );
    assert_eq!(request["messages"][1]["role"], "user");
    assert_eq!(request["messages"][1]["content"], "CONTRACT:\nabc");
    assert_eq!(captured.authorization.as_deref(), Some("Bearer sk-test-key"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rate_limit_status_when_calling_then_returns_rate_limited() {
    let (endpoint, _, shutdown_tx) =
        start_mock_openai_server(429, r#"{"error": "slow down"}"#, Duration::ZERO).await;

    let result = client(&endpoint, Duration::from_secs(5))
        .complete("s", "u")
        .await;

    assert!(matches!(result, Err(LlmClientError::RateLimited)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_server_error_status_when_calling_then_returns_api_request_failed_with_status() {
    let (endpoint, _, shutdown_tx) =
        start_mock_openai_server(500, "internal", Duration::ZERO).await;

    let result = client(&endpoint, Duration::from_secs(5))
        .complete("s", "u")
        .await;

    match result {
        Err(LlmClientError::ApiRequestFailed(message)) => {
            assert!(message.starts_with("HTTP 500"), "{message}")
        }
        other => panic!("expected api failure, got {other:?}"),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_choices_when_calling_then_returns_invalid_response() {
    let (endpoint, _, shutdown_tx) =
        start_mock_openai_server(200, r#"{"choices": []}"#, Duration::ZERO).await;

    let result = client(&endpoint, Duration::from_secs(5))
        .complete("s", "u")
        .await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_null_content_when_calling_then_returns_invalid_response() {
    let body = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
    let (endpoint, _, shutdown_tx) = start_mock_openai_server(200, body, Duration::ZERO).await;

    let result = client(&endpoint, Duration::from_secs(5))
        .complete("s", "u")
        .await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_undecodable_body_when_calling_then_returns_invalid_response() {
    let (endpoint, _, shutdown_tx) =
        start_mock_openai_server(200, "<html>gateway</html>", Duration::ZERO).await;

    let result = client(&endpoint, Duration::from_secs(5))
        .complete("s", "u")
        .await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_slow_provider_when_timeout_elapses_then_returns_timeout() {
    let body = r#"{"choices": [{"message": {"content": "late"}}]}"#;
    let (endpoint, _, shutdown_tx) =
        start_mock_openai_server(200, body, Duration::from_secs(2)).await;

    let result = client(&endpoint, Duration::from_millis(100))
        .complete("s", "u")
        .await;

    assert!(matches!(result, Err(LlmClientError::Timeout)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_provider_when_calling_then_returns_api_request_failed() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = client(
        &format!("http://{addr}/v1/chat/completions"),
        Duration::from_secs(5),
    )
    .complete("s", "u")
    .await;

    assert!(matches!(result, Err(LlmClientError::ApiRequestFailed(_))));
}
