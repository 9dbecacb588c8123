//! Request middleware for the gateway API
//!
//! Provides:
//! - Request logging (level chosen by status class)
//! - Request body size limit

use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{error, info, warn};

#[derive(Debug, Clone)]
pub struct RequestGuardConfig {
    /// Enable per-request logging
    pub log_requests: bool,
    /// Maximum request body size in bytes
    pub max_request_size: usize,
}

impl Default for RequestGuardConfig {
    fn default() -> Self {
        Self {
            log_requests: true,
            max_request_size: 64 * 1024, // 64KB
        }
    }
}

/// Log method, path, status and latency of every request
pub async fn logging_middleware(
    State(config): State<RequestGuardConfig>,
    request: Request,
    next: Next,
) -> Response {
    if !config.log_requests {
        return next.run(request).await;
    }

    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;
    let duration = start.elapsed();
    let status = response.status();

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            "Request failed"
        );
    } else if status.is_client_error() {
        warn!(
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            "Client error"
        );
    } else {
        info!(
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            "Request completed"
        );
    }

    response
}

/// Reject requests whose declared body exceeds the configured limit
pub async fn body_size_middleware(
    State(config): State<RequestGuardConfig>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if let Some(length) = headers
        .get("content-length")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<usize>().ok())
        && length > config.max_request_size
    {
        warn!(
            "Request body too large: {} bytes (max: {})",
            length, config.max_request_size
        );
        return Err(StatusCode::PAYLOAD_TOO_LARGE);
    }

    Ok(next.run(request).await)
}
