//! IPFS-backed credential storage.

use crate::http::Transport;
use crate::{AuthToken, SdkError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreCredentialRequest {
    pub did: String,
    pub credential_type: String,
    pub credential: Value,
    #[serde(default = "default_true")]
    pub encrypted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreCredentialResponse {
    pub cid: String,
    pub did: String,
    pub credential_type: String,
    pub message: String,
    pub encrypted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrieveUserCredentialRequest {
    pub did: String,
    pub credential_type: String,
    #[serde(default)]
    pub include_cid_only: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievedCredentialResponse {
    pub cid: String,
    pub did: String,
    pub credential_type: String,
    pub message: String,
    /// Null when only the CID was requested.
    pub credential: Option<Value>,
    pub encrypted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAllUserCredentialsRequest {
    pub did: String,
    #[serde(default)]
    pub include_credential_data: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllCredentialsResponse {
    pub credentials: Vec<Value>,
    pub did: String,
    pub count: u64,
    pub message: String,
}

#[derive(Clone)]
pub struct IpfsClient {
    transport: Arc<Transport>,
}

impl IpfsClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Pin a credential to IPFS under the DID's namespace.
    pub async fn store_credential(
        &self,
        auth: Option<&AuthToken>,
        req: &StoreCredentialRequest,
    ) -> Result<StoreCredentialResponse, SdkError> {
        self.transport
            .post("/v1/identity/ipfs/store-credential", auth, req)
            .await
    }

    /// Retrieve one credential by type, optionally CID only.
    pub async fn retrieve_user_credential(
        &self,
        auth: Option<&AuthToken>,
        req: &RetrieveUserCredentialRequest,
    ) -> Result<RetrievedCredentialResponse, SdkError> {
        self.transport
            .post("/v1/identity/ipfs/retrieve-credential", auth, req)
            .await
    }

    /// List every credential stored for a DID.
    pub async fn get_all_user_credentials(
        &self,
        auth: Option<&AuthToken>,
        req: &GetAllUserCredentialsRequest,
    ) -> Result<AllCredentialsResponse, SdkError> {
        self.transport
            .post("/v1/identity/ipfs/all-credentials", auth, req)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_request_defaults_to_encrypted() {
        let req: StoreCredentialRequest = serde_json::from_str(
            r#"{"did":"did:ex:1","credentialType":"KYC","credential":{}}"#,
        )
        .unwrap();
        assert!(req.encrypted);
    }

    #[test]
    fn cid_only_retrieval_serializes_credential_as_null() {
        let resp = RetrievedCredentialResponse {
            cid: "bafy-1".into(),
            did: "did:ex:1".into(),
            credential_type: "KYC".into(),
            message: "ok".into(),
            credential: None,
            encrypted: true,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json["credential"].is_null());
    }

    #[test]
    fn retrieve_request_defaults_cid_only_off() {
        let req: RetrieveUserCredentialRequest =
            serde_json::from_str(r#"{"did":"did:ex:1","credentialType":"KYC"}"#).unwrap();
        assert!(!req.include_cid_only);
    }
}
