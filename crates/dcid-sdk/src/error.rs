//! Error taxonomy for the DCID SDK.
//!
//! Every failure an operation can surface falls into one of four classes,
//! mirroring the platform's own error model: authentication failures,
//! transport failures, upstream server failures, and everything else the
//! API rejects with a status.

use thiserror::Error;

/// Error raised by any SDK operation.
#[derive(Debug, Error)]
pub enum SdkError {
    /// Bad or expired credentials, or a bad API key (upstream 401/403).
    #[error("authentication error: {message}")]
    Authentication {
        message: String,
        /// Upstream status, when one was received.
        status: Option<u16>,
        /// Whether the failing credential was the API key rather than a
        /// user bearer token.
        is_api_key_error: bool,
    },

    /// Transport failure: the upstream was never reached, or the connection
    /// broke mid-flight. Carries a stable machine-readable code.
    #[error("network error ({code}): {message}")]
    Network { message: String, code: String },

    /// The upstream service itself failed (5xx).
    #[error("server error ({status}): {message}")]
    Server { message: String, status: u16 },

    /// Any other non-success response, or an unusable success payload.
    #[error("sdk error: {message}")]
    Sdk {
        message: String,
        status: Option<u16>,
    },

    /// Invalid SDK configuration (bad environment, client build failure).
    #[error("config error: {message}")]
    Config { message: String },
}

impl SdkError {
    /// Upstream HTTP status attached to this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            SdkError::Authentication { status, .. } => *status,
            SdkError::Server { status, .. } => Some(*status),
            SdkError::Sdk { status, .. } => *status,
            SdkError::Network { .. } | SdkError::Config { .. } => None,
        }
    }
}
