//! Per-request error taxonomy

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failures that can occur while handling a single request.
///
/// Every variant renders as a plain-text response body so clients always
/// see a human-readable reason, never a JSON error schema. Failures are
/// contained within the request that produced them.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request carried no `Content-Length`, or declared zero bytes
    #[error("No data in request body")]
    EmptyBody,

    /// The body was read but did not parse as JSON
    #[error("Invalid JSON: {0}")]
    MalformedJson(String),

    /// Anything else that went wrong mid-request (body stream I/O, etc.)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl RequestError {
    /// HTTP status the variant maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::EmptyBody | Self::MalformedJson(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Error processing request: {}", self);
        }
        (status, self.to_string()).into_response()
    }
}
