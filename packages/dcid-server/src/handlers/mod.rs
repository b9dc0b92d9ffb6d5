//! HTTP request handlers, one per route, grouped by SDK module.
//!
//! Every handler follows the same contract: parse the request, extract the
//! optional bearer token, invoke exactly one SDK operation, and reshape the
//! result, or let [`ApiError`](crate::error::ApiError) translate the
//! failure into a structured JSON response.

pub mod analytics;
pub mod auth;
pub mod identity;
pub mod verification;

use crate::response::HealthResponse;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// Health check. Fixed shape, independent of SDK or upstream state.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "dcid-server",
        environment: state.config.environment.clone(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        requests: state.request_count.load(Ordering::Relaxed),
    })
}
