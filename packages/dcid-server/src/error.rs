//! SDK error → HTTP response translation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use dcid_sdk::SdkError;
use serde_json::json;
use std::fmt;

/// Error surface of every handler. Wraps the SDK taxonomy and adds the
/// server's own request-parsing failure so no route ever answers without a
/// JSON body.
#[derive(Debug)]
pub enum ApiError {
    Sdk(SdkError),
    BadRequest(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        ApiError::BadRequest(msg.into())
    }
}

impl From<SdkError> for ApiError {
    fn from(err: SdkError) -> Self {
        ApiError::Sdk(err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Sdk(e) => write!(f, "{e}"),
            ApiError::BadRequest(msg) => write!(f, "bad request: {msg}"),
        }
    }
}

fn status_or(status: Option<u16>, fallback: StatusCode) -> StatusCode {
    status
        .and_then(|s| StatusCode::from_u16(s).ok())
        .unwrap_or(fallback)
}

impl IntoResponse for ApiError {
    /// First match wins: authentication → its status or 401, network →
    /// always 502, server/sdk → their status or 500, anything else → 500
    /// labeled unknown.
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Sdk(SdkError::Authentication {
                message,
                status,
                is_api_key_error,
            }) => (
                status_or(status, StatusCode::UNAUTHORIZED),
                json!({
                    "error": message,
                    "type": "AuthenticationError",
                    "isAPIKeyError": is_api_key_error,
                }),
            ),
            ApiError::Sdk(SdkError::Network { message, code }) => (
                StatusCode::BAD_GATEWAY,
                json!({
                    "error": message,
                    "type": "NetworkError",
                    "code": code,
                }),
            ),
            ApiError::Sdk(SdkError::Server { message, status }) => (
                status_or(Some(status), StatusCode::INTERNAL_SERVER_ERROR),
                json!({
                    "error": message,
                    "type": "ServerError",
                }),
            ),
            ApiError::Sdk(SdkError::Sdk { message, status }) => (
                status_or(status, StatusCode::INTERNAL_SERVER_ERROR),
                json!({
                    "error": message,
                    "type": "SDKError",
                }),
            ),
            ApiError::Sdk(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": err.to_string(),
                    "type": "UnknownError",
                }),
            ),
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": message,
                    "type": "BadRequest",
                }),
            ),
        };
        (status, Json(body)).into_response()
    }
}
