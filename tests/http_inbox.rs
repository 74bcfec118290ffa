//! Integration tests for the inbox HTTP surface
//!
//! Exercises the assembled router end to end:
//! - success envelope echoes the posted value exactly
//! - empty and malformed bodies are rejected before/at the parser
//! - the info page answers GET on any path
//! - repeated identical POSTs produce identical responses

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use json_inbox::{router, InboxConfig};

fn test_router() -> axum::Router {
    router(Arc::new(InboxConfig::default()))
}

/// Build a request carrying the connect info the real server would attach.
fn request(method: Method, uri: &str, body: &str) -> Request<Body> {
    let addr: SocketAddr = "127.0.0.1:54321".parse().unwrap();
    let mut builder = Request::builder().method(method).uri(uri);
    if !body.is_empty() {
        builder = builder
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::CONTENT_LENGTH, body.len());
    }
    let mut request = builder.body(Body::from(body.to_owned())).unwrap();
    request.extensions_mut().insert(ConnectInfo(addr));
    request
}

async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_post_echoes_payload_in_envelope() {
    let payload = r#"{"message": "Hello, Server!", "value": 42}"#;
    let response = test_router()
        .oneshot(request(Method::POST, "/", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(
        body,
        json!({
            "status": "success",
            "message": "JSON received and printed",
            "received_data": {"message": "Hello, Server!", "value": 42}
        })
    );
}

#[tokio::test]
async fn test_post_round_trips_arbitrary_json_values() {
    for payload in [
        r#"{"nested": {"list": [1, 2, 3], "flag": true}}"#,
        r#"[1, "two", null, 4.5]"#,
        r#""just a string""#,
        r#"{"unicode": "héllo wörld ✓"}"#,
    ] {
        let sent: Value = serde_json::from_str(payload).unwrap();
        let response = test_router()
            .oneshot(request(Method::POST, "/", payload))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["received_data"], sent);
    }
}

#[tokio::test]
async fn test_post_without_body_is_rejected() {
    let response = test_router()
        .oneshot(request(Method::POST, "/", ""))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_string(response).await.contains("No data in request body"));
}

#[tokio::test]
async fn test_post_with_zero_content_length_is_rejected() {
    let addr: SocketAddr = "127.0.0.1:54321".parse().unwrap();
    let mut zero = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(header::CONTENT_LENGTH, 0)
        .body(Body::empty())
        .unwrap();
    zero.extensions_mut().insert(ConnectInfo(addr));

    let response = test_router().oneshot(zero).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_string(response).await.contains("No data in request body"));
}

#[tokio::test]
async fn test_post_with_malformed_json_reports_diagnostic() {
    let response = test_router()
        .oneshot(request(Method::POST, "/", "not valid json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response).await;
    assert!(body.contains("Invalid JSON:"), "got: {body}");
    assert!(!body.contains("success"));
}

#[tokio::test]
async fn test_post_is_accepted_on_any_path() {
    let response = test_router()
        .oneshot(request(Method::POST, "/hooks/deploy", r#"{"ok": true}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["received_data"], json!({"ok": true}));
}

#[tokio::test]
async fn test_get_serves_info_page_on_any_path() {
    for uri in ["/", "/foo", "/?x=1"] {
        let response = test_router()
            .oneshot(request(Method::GET, uri, ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "uri: {uri}");
        let content_type = response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .to_owned();
        assert!(content_type.starts_with("text/html"), "uri: {uri}");
        assert!(body_string(response).await.contains("36625"), "uri: {uri}");
    }
}

#[tokio::test]
async fn test_identical_posts_produce_identical_responses() {
    let payload = r#"{"message": "Hello, Server!", "value": 42}"#;

    let first = body_string(
        test_router()
            .oneshot(request(Method::POST, "/", payload))
            .await
            .unwrap(),
    )
    .await;
    let second = body_string(
        test_router()
            .oneshot(request(Method::POST, "/", payload))
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(first, second);
}
