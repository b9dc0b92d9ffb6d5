//! DID-scoped encryption key custody.

use crate::http::Transport;
use crate::{AuthToken, SdkError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetEncryptedKeyRequest {
    pub did: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateEncryptionKeyRequest {
    pub did: String,
    pub owner_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptedKeyResponse {
    pub encrypted_key: String,
    pub did: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedKeyResponse {
    pub encrypted_key: String,
    pub did: String,
    pub owner_email: String,
    pub message: String,
}

#[derive(Clone)]
pub struct EncryptionClient {
    transport: Arc<Transport>,
}

impl EncryptionClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Fetch the encrypted key held in custody for a DID.
    pub async fn get_key(
        &self,
        auth: Option<&AuthToken>,
        req: &GetEncryptedKeyRequest,
    ) -> Result<EncryptedKeyResponse, SdkError> {
        self.transport
            .post("/v1/identity/encryption/get-key", auth, req)
            .await
    }

    /// Generate a new encryption key for a DID and place it in custody.
    pub async fn generate_key(
        &self,
        auth: Option<&AuthToken>,
        req: &GenerateEncryptionKeyRequest,
    ) -> Result<GeneratedKeyResponse, SdkError> {
        self.transport
            .post("/v1/identity/encryption/generate-key", auth, req)
            .await
    }
}
