//! HTTP API for the reputation gateway
//!
//! Provides:
//! - Reputation aggregation endpoint
//! - Request logging and body size middleware
//! - Permissive CORS (configurable)

pub mod middleware;
pub mod reputation;

pub use middleware::{RequestGuardConfig, body_size_middleware, logging_middleware};
pub use reputation::{REPUTATION_PATH, ReputationApiState, create_router};

use axum::{Router, extract::DefaultBodyLimit};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;

/// Assemble the full application: routes plus middleware layers
pub fn create_app(config: &GatewayConfig, state: ReputationApiState) -> Router {
    let guard = RequestGuardConfig {
        log_requests: config.logging.log_requests,
        max_request_size: config.security.max_request_size,
    };

    let mut app = create_router(state)
        .layer(DefaultBodyLimit::max(config.security.max_request_size))
        .layer(axum::middleware::from_fn_with_state(
            guard.clone(),
            body_size_middleware,
        ))
        .layer(axum::middleware::from_fn_with_state(guard, logging_middleware));

    if config.security.enable_cors {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    app.layer(TraceLayer::new_for_http())
}
