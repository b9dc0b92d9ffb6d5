//! Proof-based sign-in and link-store routes.

use crate::error::ApiError;
use crate::schemas::{bearer_token, Body, CallbackQuery, LinkStoreQuery};
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;
use dcid_sdk::identity::verification::{
    CallbackMessage, LinkStoreMessage, PostLinkStoreRequest, PostLinkStoreResponse,
    VerifyCallbackRequest, VerifySignInRequest, VerifySignInResponse,
};
use std::sync::Arc;

/// `POST /api/identity/verify/sign-in`
pub async fn verify_sign_in(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Body(req): Body<VerifySignInRequest>,
) -> Result<Json<VerifySignInResponse>, ApiError> {
    let auth = bearer_token(&headers);
    let result = state
        .sdk
        .identity
        .verification
        .verify_sign_in(auth.as_ref(), &req)
        .await?;
    Ok(Json(result))
}

/// `GET /api/identity/verification/link-store?id`
pub async fn get_link_store(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<LinkStoreQuery>,
) -> Result<Json<LinkStoreMessage>, ApiError> {
    let auth = bearer_token(&headers);
    let result = state
        .sdk
        .identity
        .verification
        .get_link_store(auth.as_ref(), &query.id)
        .await?;
    Ok(Json(result))
}

/// `POST /api/identity/verification/link-store`
pub async fn post_link_store(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Body(req): Body<PostLinkStoreRequest>,
) -> Result<Json<PostLinkStoreResponse>, ApiError> {
    let auth = bearer_token(&headers);
    let result = state
        .sdk
        .identity
        .verification
        .post_link_store(auth.as_ref(), &req)
        .await?;
    Ok(Json(result))
}

/// `POST /api/identity/verification/callback?sessionId`
pub async fn verify_callback(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<CallbackQuery>,
    Body(req): Body<VerifyCallbackRequest>,
) -> Result<Json<CallbackMessage>, ApiError> {
    let auth = bearer_token(&headers);
    let result = state
        .sdk
        .identity
        .verification
        .verify_callback(auth.as_ref(), &query.session_id, &req)
        .await?;
    Ok(Json(result))
}
