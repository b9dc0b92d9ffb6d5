//! Request-side parsing: body extractor, bearer token, query schemas.

use crate::error::ApiError;
use axum::extract::{FromRequest, Request};
use axum::http::{header, HeaderMap};
use axum::Json;
use dcid_sdk::AuthToken;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// JSON body extractor whose rejection is a structured [`ApiError`], so a
/// malformed body never produces a bodiless error response.
pub struct Body<T>(pub T);

impl<S, T> FromRequest<S> for Body<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;
        Ok(Self(value))
    }
}

/// Extract `Bearer <token>` from the authorization header. Absent or
/// malformed headers yield `None` and the SDK call proceeds with the API
/// key alone.
pub fn bearer_token(headers: &HeaderMap) -> Option<AuthToken> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .filter(|t| !t.is_empty())
        .map(AuthToken::new)
}

#[derive(Debug, Deserialize)]
pub struct CredentialOfferQuery {
    #[serde(rename = "claimId")]
    pub claim_id: String,
    #[serde(rename = "txId")]
    pub tx_id: String,
}

#[derive(Debug, Deserialize)]
pub struct LinkStoreQuery {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn well_formed_bearer_is_extracted() {
        let token = bearer_token(&headers_with_auth("Bearer abc123")).unwrap();
        assert_eq!(token.as_str(), "abc123");
    }

    #[test]
    fn missing_header_yields_none() {
        assert!(bearer_token(&HeaderMap::new()).is_none());
    }

    #[test]
    fn malformed_headers_yield_none() {
        assert!(bearer_token(&headers_with_auth("Token abc123")).is_none());
        assert!(bearer_token(&headers_with_auth("Bearer ")).is_none());
        assert!(bearer_token(&headers_with_auth("bearer abc123")).is_none());
    }
}
