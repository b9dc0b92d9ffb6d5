//! Session analytics routes.

use crate::error::ApiError;
use crate::response::{EndSessionResponse, StartSessionResponse};
use crate::schemas::Body;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use dcid_sdk::analytics::{EndSessionEvent, StartSessionEvent};
use std::sync::Arc;

/// `POST /api/analytics/start-session`
pub async fn start_session(
    State(state): State<Arc<AppState>>,
    Body(event): Body<StartSessionEvent>,
) -> Result<Json<StartSessionResponse>, ApiError> {
    let result = state.sdk.analytics.start_session(&event).await?;
    Ok(Json(result.into()))
}

/// `POST /api/analytics/end-session`
pub async fn end_session(
    State(state): State<Arc<AppState>>,
    Body(event): Body<EndSessionEvent>,
) -> Result<Json<EndSessionResponse>, ApiError> {
    let result = state.sdk.analytics.end_session(&event).await?;
    Ok(Json(result.into()))
}
