//! Reputation API Endpoints
//!
//! Endpoints:
//!   POST /api/v1/web2-reputation -> Aggregate reputation across sources
//!   GET  /health                 -> Liveness check

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use std::sync::Arc;
use tracing::debug;

use crate::models::{AggregateReport, ReputationQuery};
use crate::reputation::ReputationAggregator;

pub const REPUTATION_PATH: &str = "/api/v1/web2-reputation";

/// API state for reputation endpoints
#[derive(Clone)]
pub struct ReputationApiState {
    pub aggregator: Arc<ReputationAggregator>,
}

impl ReputationApiState {
    pub fn new(aggregator: ReputationAggregator) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
        }
    }
}

/// POST /api/v1/web2-reputation - always 200 once the body parses
pub async fn aggregate_reputation(
    State(state): State<ReputationApiState>,
    Json(query): Json<ReputationQuery>,
) -> Json<AggregateReport> {
    debug!(
        requested = query.requested_sources(),
        "Reputation request received"
    );
    Json(state.aggregator.aggregate(&query).await)
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub fn create_router(state: ReputationApiState) -> Router {
    Router::new()
        .route(REPUTATION_PATH, post(aggregate_reputation))
        .route("/health", get(health_check))
        .with_state(state)
}
