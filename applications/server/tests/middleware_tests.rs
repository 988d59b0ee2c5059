/// Middleware chain tests
/// Security headers, panic recovery and request timeouts
mod common;

use axum::{
    http::{header, StatusCode},
    response::Response,
    routing::get,
    Router,
};
use common::{create_test_app, empty_request, error_message, json_request, send, MemoryStore};
use roster_server::middleware::{layered, SECURITY_HEADERS};
use std::time::Duration;

fn assert_security_headers(response: &Response) {
    for (name, value) in &SECURITY_HEADERS {
        assert_eq!(
            response.headers().get(name).and_then(|v| v.to_str().ok()),
            Some(*value),
            "missing or wrong {name}"
        );
    }
}

async fn boom() -> &'static str {
    panic!("handler exploded")
}

async fn slow() -> &'static str {
    tokio::time::sleep(Duration::from_secs(60)).await;
    "done"
}

async fn ok() -> &'static str {
    "ok"
}

/// Test headers on a successful response
#[tokio::test]
async fn test_security_headers_on_success() {
    let app = create_test_app(MemoryStore::new());

    let response = send(&app, empty_request("GET", "/users")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_security_headers(&response);

    assert_eq!(
        response.headers().get(header::X_FRAME_OPTIONS).unwrap(),
        "deny"
    );
    assert_eq!(
        response.headers().get(header::CONTENT_SECURITY_POLICY).unwrap(),
        "default-src 'self'"
    );
}

/// Test headers on every kind of error response
#[tokio::test]
async fn test_security_headers_on_errors() {
    let app = create_test_app(MemoryStore::new());

    let response = send(&app, json_request("POST", "/users", "{")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_security_headers(&response);

    let response = send(&app, empty_request("GET", "/users/7")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_security_headers(&response);

    let response = send(&app, empty_request("GET", "/nowhere")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_security_headers(&response);
}

/// Test that a panic becomes a 500 and the service keeps serving
#[tokio::test]
async fn test_panic_recovery() {
    let app = layered(
        Router::new().route("/panic", get(boom)).route("/ok", get(ok)),
        Duration::from_secs(5),
    );

    let response = send(&app, empty_request("GET", "/panic")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.headers().get(header::CONNECTION).unwrap(), "close");

    let message = error_message(response).await;
    assert_eq!(message, "Internal server error");
    assert!(!message.contains("exploded"));

    let response = send(&app, empty_request("GET", "/ok")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_security_headers(&response);
}

/// Test that a request outliving the timeout is answered with 408
#[tokio::test(start_paused = true)]
async fn test_request_timeout() {
    let app = layered(
        Router::new().route("/slow", get(slow)),
        Duration::from_secs(1),
    );

    let response = send(&app, empty_request("GET", "/slow")).await;
    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    assert_security_headers(&response);
}
