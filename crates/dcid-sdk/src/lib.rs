//! # DCID Server SDK
//!
//! Typed Rust client for the DCID identity platform: OTP authentication,
//! DID-scoped encryption key custody, verifiable-credential issuance,
//! IPFS-backed credential storage, proof-based sign-in verification, and
//! session analytics.
//!
//! The SDK is a thin facade over the platform's REST API: request building,
//! response decoding, and error classification. All protocol logic (OTP
//! issuance, ledger interaction, key custody, proof verification) lives
//! upstream.
//!
//! ```no_run
//! use dcid_sdk::{DcidSdk, Environment, SdkConfig};
//!
//! # async fn run() -> Result<(), dcid_sdk::SdkError> {
//! let sdk = DcidSdk::new(SdkConfig::new("my-api-key", Environment::Dev))?;
//! let otp = sdk
//!     .auth
//!     .register_otp(&dcid_sdk::auth::InitiateOtpRequest {
//!         email: Some("user@example.com".into()),
//!         phone: None,
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! User-scoped operations take the bearer token as an explicit argument.
//! There is no client-wide "current token": credentials are values threaded
//! through each call, so concurrent callers cannot clobber each other.

pub mod analytics;
pub mod auth;
mod error;
mod http;
pub mod identity;

use std::str::FromStr;
use std::sync::Arc;

pub use error::SdkError;

/// Default per-request timeout. Credential operations can touch a ledger,
/// so this is deliberately generous.
pub const DEFAULT_TIMEOUT_MS: u64 = 120_000;

/// A user bearer token, scoped to a single call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AuthToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

/// DCID platform environment selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Dev,
    Staging,
    Prod,
}

impl Environment {
    /// Base URL of the platform API for this environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Dev => "https://api.dev.dcid.network",
            Environment::Staging => "https://api.staging.dcid.network",
            Environment::Prod => "https://api.dcid.network",
        }
    }
}

impl FromStr for Environment {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Dev),
            "staging" => Ok(Environment::Staging),
            "prod" | "production" => Ok(Environment::Prod),
            other => Err(SdkError::Config {
                message: format!("unknown environment: {other}"),
            }),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Dev => write!(f, "dev"),
            Environment::Staging => write!(f, "staging"),
            Environment::Prod => write!(f, "prod"),
        }
    }
}

/// SDK construction options.
#[derive(Debug, Clone)]
pub struct SdkConfig {
    /// Platform API key, sent as `x-api-key` on every request.
    pub api_key: String,
    pub environment: Environment,
    /// Explicit base URL override (tests, self-hosted deployments).
    pub base_url: Option<String>,
    pub timeout_ms: u64,
    /// Log each request's method, path, and status at debug level.
    pub request_logging: bool,
}

impl SdkConfig {
    pub fn new(api_key: impl Into<String>, environment: Environment) -> Self {
        Self {
            api_key: api_key.into(),
            environment,
            base_url: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            request_logging: false,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_request_logging(mut self, enabled: bool) -> Self {
        self.request_logging = enabled;
        self
    }
}

/// Entry point to the platform API, one facade per module.
#[derive(Clone)]
pub struct DcidSdk {
    pub auth: auth::AuthClient,
    pub identity: identity::IdentityClient,
    pub analytics: analytics::AnalyticsClient,
}

impl DcidSdk {
    pub fn new(config: SdkConfig) -> Result<Self, SdkError> {
        let transport = Arc::new(http::Transport::new(&config)?);
        Ok(Self {
            auth: auth::AuthClient::new(Arc::clone(&transport)),
            identity: identity::IdentityClient::new(Arc::clone(&transport)),
            analytics: analytics::AnalyticsClient::new(transport),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parses_common_spellings() {
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Dev);
        assert_eq!(
            "PRODUCTION".parse::<Environment>().unwrap(),
            Environment::Prod
        );
        assert_eq!(
            "staging".parse::<Environment>().unwrap(),
            Environment::Staging
        );
        assert!("qa".parse::<Environment>().is_err());
    }

    #[test]
    fn environments_map_to_distinct_base_urls() {
        assert_ne!(Environment::Dev.base_url(), Environment::Prod.base_url());
        assert!(Environment::Prod.base_url().starts_with("https://"));
    }
}
