//! Encryption key, issuer, and IPFS credential routes.

use crate::error::ApiError;
use crate::schemas::{bearer_token, Body, CredentialOfferQuery};
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;
use dcid_sdk::identity::encryption::{
    EncryptedKeyResponse, GenerateEncryptionKeyRequest, GeneratedKeyResponse,
    GetEncryptedKeyRequest,
};
use dcid_sdk::identity::ipfs::{
    AllCredentialsResponse, GetAllUserCredentialsRequest, RetrieveUserCredentialRequest,
    RetrievedCredentialResponse, StoreCredentialRequest, StoreCredentialResponse,
};
use dcid_sdk::identity::issuer::{
    CredentialOfferResponse, GetCredentialOfferRequest, IssueCredentialRequest,
    IssueCredentialResult,
};
use std::sync::Arc;
use tracing::info;

/// `POST /api/identity/get-encrypted-key`
pub async fn get_encrypted_key(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Body(req): Body<GetEncryptedKeyRequest>,
) -> Result<Json<EncryptedKeyResponse>, ApiError> {
    let auth = bearer_token(&headers);
    let result = state.sdk.identity.encryption.get_key(auth.as_ref(), &req).await?;
    Ok(Json(result))
}

/// `POST /api/identity/generate-encrypted-key`
pub async fn generate_encrypted_key(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Body(req): Body<GenerateEncryptionKeyRequest>,
) -> Result<Json<GeneratedKeyResponse>, ApiError> {
    let auth = bearer_token(&headers);
    let result = state
        .sdk
        .identity
        .encryption
        .generate_key(auth.as_ref(), &req)
        .await?;
    Ok(Json(result))
}

/// `POST /api/identity/issuer/issue-credential`
///
/// The response is one of two mutually exclusive shapes: a claimable offer
/// (`qrCodeLink`/`schemaType`) or a pending transaction (`txId`/`claimId`).
pub async fn issue_credential(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Body(req): Body<IssueCredentialRequest>,
) -> Result<Json<IssueCredentialResult>, ApiError> {
    let auth = bearer_token(&headers);
    info!(credential = %req.credential_name, "Issuing credential");
    let result = state
        .sdk
        .identity
        .issuer
        .issue_credential(auth.as_ref(), &req)
        .await?;
    Ok(Json(result))
}

/// `GET /api/identity/issuer/get-credential-offer?claimId&txId`
pub async fn get_credential_offer(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<CredentialOfferQuery>,
) -> Result<Json<CredentialOfferResponse>, ApiError> {
    let auth = bearer_token(&headers);
    let req = GetCredentialOfferRequest {
        claim_id: query.claim_id,
        tx_id: query.tx_id,
    };
    let result = state
        .sdk
        .identity
        .issuer
        .get_credential_offer(auth.as_ref(), &req)
        .await?;
    Ok(Json(result))
}

/// `POST /api/identity/ipfs/store-credential`
pub async fn store_credential(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Body(req): Body<StoreCredentialRequest>,
) -> Result<Json<StoreCredentialResponse>, ApiError> {
    let auth = bearer_token(&headers);
    let result = state
        .sdk
        .identity
        .ipfs
        .store_credential(auth.as_ref(), &req)
        .await?;
    Ok(Json(result))
}

/// `POST /api/identity/ipfs/retrieve-user-credential`
pub async fn retrieve_user_credential(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Body(req): Body<RetrieveUserCredentialRequest>,
) -> Result<Json<RetrievedCredentialResponse>, ApiError> {
    let auth = bearer_token(&headers);
    let result = state
        .sdk
        .identity
        .ipfs
        .retrieve_user_credential(auth.as_ref(), &req)
        .await?;
    Ok(Json(result))
}

/// `POST /api/identity/get-all-user-credentials`
pub async fn get_all_user_credentials(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Body(req): Body<GetAllUserCredentialsRequest>,
) -> Result<Json<AllCredentialsResponse>, ApiError> {
    let auth = bearer_token(&headers);
    let result = state
        .sdk
        .identity
        .ipfs
        .get_all_user_credentials(auth.as_ref(), &req)
        .await?;
    Ok(Json(result))
}
