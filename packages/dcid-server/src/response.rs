//! Response types the server shapes itself.
//!
//! Most routes echo the SDK's typed response unchanged; the types here exist
//! where the external shape differs from the wire shape (snake_case token
//! pairs and analytics results, and the health payload).

use dcid_sdk::analytics::{EndSessionResult, StartSessionResult};
use dcid_sdk::auth::TokenPair;
use serde::Serialize;

/// Token pair in the client-facing snake_case shape.
#[derive(Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<TokenPair> for TokenResponse {
    fn from(tokens: TokenPair) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        }
    }
}

#[derive(Serialize)]
pub struct StartSessionResponse {
    pub success: bool,
    pub session_id: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonymous_id: Option<String>,
    pub linked: bool,
}

impl From<StartSessionResult> for StartSessionResponse {
    fn from(result: StartSessionResult) -> Self {
        Self {
            success: result.success,
            session_id: result.session_id,
            timestamp: result.timestamp,
            anonymous_id: result.anonymous_id,
            linked: result.linked,
        }
    }
}

#[derive(Serialize)]
pub struct EndSessionResponse {
    pub success: bool,
    pub timestamp: String,
}

impl From<EndSessionResult> for EndSessionResponse {
    fn from(result: EndSessionResult) -> Self {
        Self {
            success: result.success,
            timestamp: result.timestamp,
        }
    }
}

/// Response from the health endpoint. `status` and `service` are fixed.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub environment: String,
    pub uptime_secs: u64,
    pub requests: u64,
}
