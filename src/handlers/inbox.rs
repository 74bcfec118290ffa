//! JSON inbox handler
//!
//! Terminates one POST with a deterministic validate-parse-print-respond
//! sequence. No state survives the request; the only side effect is the
//! delimited block printed to stdout.

use axum::extract::{ConnectInfo, Request};
use axum::http::{header, HeaderMap};
use axum::response::Json;
use serde::Serialize;
use serde_json::Value;
use std::net::SocketAddr;

use crate::error::RequestError;

const SEPARATOR_WIDTH: usize = 50;

/// Confirmation envelope echoed back for every accepted POST
#[derive(Debug, Serialize)]
pub struct InboxResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub received_data: Value,
}

/// Handle a JSON POST on any path.
///
/// The body must be declared via `Content-Length`; bodies without one
/// (including chunked uploads) are rejected before any read happens. No
/// upper bound is placed on the declared length.
pub async fn receive(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
) -> Result<Json<InboxResponse>, RequestError> {
    let (parts, body) = request.into_parts();

    if declared_content_length(&parts.headers) == 0 {
        return Err(RequestError::EmptyBody);
    }

    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|e| RequestError::Internal(e.to_string()))?;

    let json_data: Value =
        serde_json::from_slice(&bytes).map_err(|e| RequestError::MalformedJson(e.to_string()))?;

    print_received(addr, &parts.uri.to_string(), &json_data);

    Ok(Json(InboxResponse {
        status: "success",
        message: "JSON received and printed",
        received_data: json_data,
    }))
}

/// `Content-Length` as declared by the client; absent or unparsable
/// headers count as zero.
fn declared_content_length(headers: &HeaderMap) -> u64 {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}

/// Print the received payload as a delimited console block.
fn print_received(addr: SocketAddr, path: &str, json_data: &Value) {
    let pretty =
        serde_json::to_string_pretty(json_data).unwrap_or_else(|_| json_data.to_string());
    let separator = "=".repeat(SEPARATOR_WIDTH);

    println!("\n{separator}");
    println!("Received POST request");
    println!("From: {addr}");
    println!("Path: {path}");
    println!("JSON Body:");
    println!("{pretty}");
    println!("{separator}\n");
}
