//! Proof-based sign-in verification and the link store.
//!
//! The link store is a persisted iden3comm message envelope used in
//! proof-request/response exchanges between verifier and wallet.

use crate::http::Transport;
use crate::{AuthToken, SdkError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifySignInRequest {
    pub credential_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifySignInResponse {
    pub proof_request_url: String,
    pub iden3comm_url: String,
    pub session_id: String,
}

/// Stored proof-request envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkStoreMessage {
    pub id: String,
    pub thid: String,
    #[serde(rename = "type")]
    pub message_type: String,
    pub from: String,
    pub typ: String,
    pub body: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostLinkStoreRequest {
    pub id: String,
    pub thid: String,
    #[serde(rename = "type")]
    pub message_type: String,
    pub from: String,
    pub typ: String,
    pub body: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostLinkStoreResponse {
    pub proof_request_url: String,
    pub iden3comm_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyCallbackRequest {
    pub token: String,
}

/// Verified proof response envelope returned by the callback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackMessage {
    pub id: String,
    pub typ: String,
    #[serde(rename = "type")]
    pub message_type: String,
    pub thid: String,
    pub body: Value,
    pub from: String,
    pub to: String,
}

#[derive(Clone)]
pub struct VerificationClient {
    transport: Arc<Transport>,
}

impl VerificationClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Start a proof-based sign-in and get the proof request to present.
    pub async fn verify_sign_in(
        &self,
        auth: Option<&AuthToken>,
        req: &VerifySignInRequest,
    ) -> Result<VerifySignInResponse, SdkError> {
        self.transport
            .post("/v1/identity/verification/sign-in", auth, req)
            .await
    }

    /// Fetch a stored envelope by id.
    pub async fn get_link_store(
        &self,
        auth: Option<&AuthToken>,
        id: &str,
    ) -> Result<LinkStoreMessage, SdkError> {
        self.transport
            .get("/v1/identity/verification/link-store", auth, &[("id", id)])
            .await
    }

    /// Persist a proof-request envelope.
    pub async fn post_link_store(
        &self,
        auth: Option<&AuthToken>,
        req: &PostLinkStoreRequest,
    ) -> Result<PostLinkStoreResponse, SdkError> {
        self.transport
            .post("/v1/identity/verification/link-store", auth, req)
            .await
    }

    /// Submit the wallet's proof token for a verification session.
    pub async fn verify_callback(
        &self,
        auth: Option<&AuthToken>,
        session_id: &str,
        req: &VerifyCallbackRequest,
    ) -> Result<CallbackMessage, SdkError> {
        self.transport
            .post_query(
                "/v1/identity/verification/callback",
                auth,
                &[("sessionId", session_id)],
                req,
            )
            .await
    }
}
