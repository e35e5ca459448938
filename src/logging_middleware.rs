// src/logging_middleware.rs
//! Middleware for logging request and response bodies in debug mode

use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

/// Buffer the request and response bodies and log them at debug level.
/// Bodies that are not valid UTF-8 are skipped.
pub async fn log_request_response(request: Request, next: Next) -> Result<Response, StatusCode> {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if let Ok(body_str) = std::str::from_utf8(&bytes) {
        if !body_str.is_empty() {
            debug!(
                method = %parts.method,
                uri = %parts.uri,
                request_body = %body_str,
                "Request"
            );
        }
    }

    let request = Request::from_parts(parts, Body::from(bytes));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if let Ok(body_str) = std::str::from_utf8(&bytes) {
        if !body_str.is_empty() {
            debug!(status = %parts.status, response_body = %body_str, "Response");
        }
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}
