use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::middleware;
use axum::routing::get;
use axum::Extension;
use tower::ServiceExt;

use contract_analyzer::infrastructure::observability::{
    PROCESS_TIME_HEADER, REQUEST_ID_HEADER, RequestId, request_id_middleware,
};

fn echo_router() -> Router {
    Router::new()
        .route(
            "/echo",
            get(|Extension(request_id): Extension<RequestId>| async move { request_id.0 }),
        )
        .layer(middleware::from_fn(request_id_middleware))
}

#[test]
fn given_header_constants_when_accessed_then_use_expected_names() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
    assert_eq!(PROCESS_TIME_HEADER, "x-process-time");
}

#[tokio::test]
async fn given_incoming_request_id_when_handled_then_is_propagated_and_echoed() {
    let response = echo_router()
        .oneshot(
            Request::builder()
                .uri("/echo")
                .header(REQUEST_ID_HEADER, "req-abc-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-abc-123");

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"req-abc-123");
}

#[tokio::test]
async fn given_no_request_id_when_handled_then_generates_uuid() {
    let response = echo_router()
        .oneshot(Request::builder().uri("/echo").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let generated = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(generated).is_ok());
}

#[tokio::test]
async fn given_any_request_when_handled_then_reports_process_time_in_ms() {
    let response = echo_router()
        .oneshot(Request::builder().uri("/echo").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let process_time = response.headers()[PROCESS_TIME_HEADER].to_str().unwrap();
    assert!(process_time.parse::<f64>().is_ok_and(|ms| ms >= 0.0));
}
