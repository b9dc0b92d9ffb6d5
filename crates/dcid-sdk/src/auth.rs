//! OTP sign-in and token lifecycle.

use crate::http::Transport;
use crate::SdkError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Start of an OTP flow: one of email or phone identifies the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitiateOtpRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpResponse {
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmOtpRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Access/refresh token pair returned on successful sign-in or refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Authentication operations (no bearer token required).
#[derive(Clone)]
pub struct AuthClient {
    transport: Arc<Transport>,
}

impl AuthClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Issue an OTP for sign-in.
    pub async fn register_otp(&self, req: &InitiateOtpRequest) -> Result<OtpResponse, SdkError> {
        self.transport.post("/v1/auth/otp/register", None, req).await
    }

    /// Exchange a confirmed OTP for a token pair.
    pub async fn confirm_otp(&self, req: &ConfirmOtpRequest) -> Result<TokenPair, SdkError> {
        self.transport.post("/v1/auth/otp/confirm", None, req).await
    }

    /// Issue an OTP for an administrator sign-in.
    pub async fn admin_login(&self, req: &InitiateOtpRequest) -> Result<OtpResponse, SdkError> {
        self.transport.post("/v1/auth/admin/login", None, req).await
    }

    /// Exchange a refresh token for a fresh token pair.
    pub async fn refresh_token(&self, req: &RefreshTokenRequest) -> Result<TokenPair, SdkError> {
        self.transport.post("/v1/auth/token/refresh", None, req).await
    }
}
