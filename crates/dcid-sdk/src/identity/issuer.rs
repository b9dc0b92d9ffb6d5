//! Verifiable-credential issuance on the platform ledger.

use crate::http::Transport;
use crate::{AuthToken, SdkError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCredentialRequest {
    pub did: String,
    pub credential_name: String,
    /// Arbitrary claim key/value map, passed through to the schema.
    pub values: Map<String, Value>,
    pub owner_email: String,
}

/// Issuance outcome. The platform answers with exactly one of two shapes:
/// an immediately claimable offer, or a pending ledger transaction to poll
/// via [`IssuerClient::get_credential_offer`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IssueCredentialResult {
    #[serde(rename_all = "camelCase")]
    Offer {
        qr_code_link: String,
        schema_type: String,
    },
    #[serde(rename_all = "camelCase")]
    Pending { tx_id: String, claim_id: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCredentialOfferRequest {
    pub claim_id: String,
    pub tx_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialOfferResponse {
    pub status: String,
    pub tx_id: String,
    pub claim_id: String,
    pub offer_available: bool,
    // Always on the wire, null until the offer is ready.
    pub qr_code_link: Option<String>,
    pub offer: Option<Value>,
    pub message: Option<String>,
}

#[derive(Clone)]
pub struct IssuerClient {
    transport: Arc<Transport>,
}

impl IssuerClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Issue a credential for a DID.
    pub async fn issue_credential(
        &self,
        auth: Option<&AuthToken>,
        req: &IssueCredentialRequest,
    ) -> Result<IssueCredentialResult, SdkError> {
        self.transport
            .post("/v1/identity/issuer/issue-credential", auth, req)
            .await
    }

    /// Poll the offer correlated with a pending issuance.
    pub async fn get_credential_offer(
        &self,
        auth: Option<&AuthToken>,
        req: &GetCredentialOfferRequest,
    ) -> Result<CredentialOfferResponse, SdkError> {
        self.transport
            .get(
                "/v1/identity/issuer/credential-offer",
                auth,
                &[("claimId", req.claim_id.as_str()), ("txId", req.tx_id.as_str())],
            )
            .await
    }
}
