//! HTTP transport shared by all SDK modules.
//!
//! Builds requests against the configured environment, attaches the API key
//! and optional bearer token, decodes JSON responses, and classifies
//! failures into the [`SdkError`] taxonomy.

use crate::{AuthToken, SdkConfig, SdkError};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Shape of upstream error bodies, when the upstream bothers to send one.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
    #[serde(rename = "isAPIKeyError")]
    is_api_key_error: Option<bool>,
}

pub(crate) struct Transport {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    request_logging: bool,
}

impl Transport {
    pub(crate) fn new(config: &SdkConfig) -> Result<Self, SdkError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| SdkError::Config {
                message: format!("HTTP client build failed: {e}"),
            })?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| config.environment.base_url().to_string());

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            request_logging: config.request_logging,
        })
    }

    pub(crate) async fn get<T>(
        &self,
        path: &str,
        auth: Option<&AuthToken>,
        query: &[(&str, &str)],
    ) -> Result<T, SdkError>
    where
        T: DeserializeOwned,
    {
        let request = self
            .request(Method::GET, path, auth)
            .query(query);
        self.execute(Method::GET, path, auth.is_some(), request).await
    }

    pub(crate) async fn post<B, T>(
        &self,
        path: &str,
        auth: Option<&AuthToken>,
        body: &B,
    ) -> Result<T, SdkError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path, auth).json(body);
        self.execute(Method::POST, path, auth.is_some(), request).await
    }

    /// POST with query parameters. Values are percent-encoded by reqwest, so
    /// reserved characters in caller-supplied ids survive intact.
    pub(crate) async fn post_query<B, T>(
        &self,
        path: &str,
        auth: Option<&AuthToken>,
        query: &[(&str, &str)],
        body: &B,
    ) -> Result<T, SdkError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .request(Method::POST, path, auth)
            .query(query)
            .json(body);
        self.execute(Method::POST, path, auth.is_some(), request).await
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        auth: Option<&AuthToken>,
    ) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        let mut builder = self
            .http
            .request(method, url)
            .header("x-api-key", &self.api_key);
        if let Some(token) = auth {
            builder = builder.bearer_auth(token.as_str());
        }
        builder
    }

    async fn execute<T>(
        &self,
        method: Method,
        path: &str,
        had_bearer: bool,
        request: reqwest::RequestBuilder,
    ) -> Result<T, SdkError>
    where
        T: DeserializeOwned,
    {
        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => {
                let err = transport_error(&e);
                if self.request_logging {
                    warn!(%method, path, error = %err, "DCID request failed");
                }
                return Err(err);
            }
        };

        let status = response.status();
        if self.request_logging {
            debug!(%method, path, status = status.as_u16(), "DCID request");
        }

        if status.is_success() {
            return response.json::<T>().await.map_err(|e| SdkError::Sdk {
                message: format!("unexpected response payload: {e}"),
                status: Some(status.as_u16()),
            });
        }

        let body = response.text().await.map_err(|e| SdkError::Network {
            message: format!("failed to read error response: {e}"),
            code: "decode".into(),
        })?;

        let err = classify(status, &body, had_bearer);
        if self.request_logging {
            warn!(%method, path, status = status.as_u16(), error = %err, "DCID request rejected");
        }
        Err(err)
    }
}

/// Map a reqwest transport failure to a `Network` error with a stable code.
fn transport_error(e: &reqwest::Error) -> SdkError {
    let code = if e.is_timeout() {
        "timeout"
    } else if e.is_connect() {
        "connect"
    } else {
        "request"
    };
    SdkError::Network {
        message: e.to_string(),
        code: code.into(),
    }
}

/// Classify a non-success upstream response.
///
/// 401/403 are authentication failures; the body's `isAPIKeyError` flag wins
/// when present, otherwise a rejected request that carried no bearer token is
/// attributed to the API key. 5xx is a server failure. Everything else is a
/// generic SDK error carrying the upstream status.
fn classify(status: StatusCode, body: &str, had_bearer: bool) -> SdkError {
    let parsed: Option<ErrorBody> = serde_json::from_str(body).ok();
    let message = parsed
        .as_ref()
        .and_then(|b| b.error.clone().or_else(|| b.message.clone()))
        .unwrap_or_else(|| {
            if body.is_empty() {
                format!("HTTP {status}")
            } else {
                body.to_string()
            }
        });

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SdkError::Authentication {
            message,
            status: Some(status.as_u16()),
            is_api_key_error: parsed
                .as_ref()
                .and_then(|b| b.is_api_key_error)
                .unwrap_or(!had_bearer),
        },
        s if s.is_server_error() => SdkError::Server {
            message,
            status: s.as_u16(),
        },
        s => SdkError::Sdk {
            message,
            status: Some(s.as_u16()),
        },
    }
}
