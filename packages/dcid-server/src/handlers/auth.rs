//! OTP sign-in and token refresh routes.

use crate::error::ApiError;
use crate::response::TokenResponse;
use crate::schemas::Body;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use dcid_sdk::auth::{ConfirmOtpRequest, InitiateOtpRequest, OtpResponse, RefreshTokenRequest};
use std::sync::Arc;
use tracing::info;

/// `POST /api/auth/sign-in/initiate`
pub async fn sign_in_initiate(
    State(state): State<Arc<AppState>>,
    Body(req): Body<InitiateOtpRequest>,
) -> Result<Json<OtpResponse>, ApiError> {
    let result = state.sdk.auth.register_otp(&req).await?;
    Ok(Json(result))
}

/// `POST /api/auth/sign-in/confirm`
pub async fn sign_in_confirm(
    State(state): State<Arc<AppState>>,
    Body(req): Body<ConfirmOtpRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let tokens = state.sdk.auth.confirm_otp(&req).await?;
    info!("sign-in confirmed");
    Ok(Json(tokens.into()))
}

/// `POST /api/auth/admin-login`
pub async fn admin_login(
    State(state): State<Arc<AppState>>,
    Body(req): Body<InitiateOtpRequest>,
) -> Result<Json<OtpResponse>, ApiError> {
    let result = state.sdk.auth.admin_login(&req).await?;
    Ok(Json(result))
}

/// `POST /api/auth/token/refresh`
pub async fn token_refresh(
    State(state): State<Arc<AppState>>,
    Body(req): Body<RefreshTokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let tokens = state.sdk.auth.refresh_token(&req).await?;
    Ok(Json(tokens.into()))
}
