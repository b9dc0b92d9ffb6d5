//! Client tests against an in-process mock of the platform API.

use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use dcid_sdk::auth::{ConfirmOtpRequest, InitiateOtpRequest};
use dcid_sdk::identity::encryption::GetEncryptedKeyRequest;
use dcid_sdk::identity::verification::VerifyCallbackRequest;
use dcid_sdk::{AuthToken, DcidSdk, Environment, SdkConfig, SdkError};
use serde_json::json;
use std::collections::HashMap;

/// Bind a mock upstream on an ephemeral port and return its base URL.
async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn sdk_for(base_url: &str) -> DcidSdk {
    let config = SdkConfig::new("test-api-key", Environment::Dev).with_base_url(base_url);
    DcidSdk::new(config).unwrap()
}

#[tokio::test]
async fn confirm_otp_decodes_token_pair() {
    let router = Router::new().route(
        "/v1/auth/otp/confirm",
        post(|Json(body): Json<serde_json::Value>| async move {
            assert_eq!(body["otp"], "123456");
            Json(json!({"accessToken": "access-1", "refreshToken": "refresh-1"}))
        }),
    );
    let base = spawn_upstream(router).await;

    let tokens = sdk_for(&base)
        .auth
        .confirm_otp(&ConfirmOtpRequest {
            email: Some("user@example.com".into()),
            phone: None,
            otp: "123456".into(),
        })
        .await
        .unwrap();

    assert_eq!(tokens.access_token, "access-1");
    assert_eq!(tokens.refresh_token, "refresh-1");
}

#[tokio::test]
async fn api_key_and_bearer_are_forwarded() {
    // Echo the auth headers back through the response fields.
    let router = Router::new().route(
        "/v1/identity/encryption/get-key",
        post(|headers: HeaderMap| async move {
            let api_key = headers
                .get("x-api-key")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("")
                .to_string();
            let authorization = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("")
                .to_string();
            Json(json!({
                "encryptedKey": api_key,
                "did": authorization,
                "message": "ok"
            }))
        }),
    );
    let base = spawn_upstream(router).await;

    let token = AuthToken::new("user-token");
    let result = sdk_for(&base)
        .identity
        .encryption
        .get_key(
            Some(&token),
            &GetEncryptedKeyRequest {
                did: "did:ex:1".into(),
            },
        )
        .await
        .unwrap();

    assert_eq!(result.encrypted_key, "test-api-key");
    assert_eq!(result.did, "Bearer user-token");
}

#[tokio::test]
async fn unauthorized_maps_to_authentication_error() {
    let router = Router::new().route(
        "/v1/auth/otp/register",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": "invalid API key", "isAPIKeyError": true})),
            )
        }),
    );
    let base = spawn_upstream(router).await;

    let err = sdk_for(&base)
        .auth
        .register_otp(&InitiateOtpRequest {
            email: Some("user@example.com".into()),
            phone: None,
        })
        .await
        .unwrap_err();

    match err {
        SdkError::Authentication {
            message,
            status,
            is_api_key_error,
        } => {
            assert_eq!(message, "invalid API key");
            assert_eq!(status, Some(401));
            assert!(is_api_key_error);
        }
        other => panic!("expected Authentication, got {other:?}"),
    }
}

#[tokio::test]
async fn upstream_five_xx_maps_to_server_error() {
    let router = Router::new().route(
        "/v1/auth/otp/register",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "ledger unavailable"})),
            )
        }),
    );
    let base = spawn_upstream(router).await;

    let err = sdk_for(&base)
        .auth
        .register_otp(&InitiateOtpRequest {
            email: None,
            phone: Some("+15550100".into()),
        })
        .await
        .unwrap_err();

    match err {
        SdkError::Server { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "ledger unavailable");
        }
        other => panic!("expected Server, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_upstream_maps_to_network_error() {
    // Nothing listens on this port.
    let sdk = sdk_for("http://127.0.0.1:9");

    let err = sdk
        .auth
        .register_otp(&InitiateOtpRequest {
            email: Some("user@example.com".into()),
            phone: None,
        })
        .await
        .unwrap_err();

    match err {
        SdkError::Network { code, .. } => {
            assert!(!code.is_empty());
        }
        other => panic!("expected Network, got {other:?}"),
    }
}

#[tokio::test]
async fn query_operations_pass_parameters_through() {
    let router = Router::new().route(
        "/v1/identity/verification/link-store",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            Json(json!({
                "id": params["id"],
                "thid": "t-1",
                "type": "https://iden3-communication.io/authorization/1.0/request",
                "from": "did:ex:verifier",
                "typ": "application/iden3comm-plain-json",
                "body": {}
            }))
        }),
    );
    let base = spawn_upstream(router).await;

    let msg = sdk_for(&base)
        .identity
        .verification
        .get_link_store(None, "envelope-7")
        .await
        .unwrap();

    assert_eq!(msg.id, "envelope-7");
}

#[tokio::test]
async fn callback_session_id_survives_reserved_characters() {
    let router = Router::new().route(
        "/v1/identity/verification/callback",
        post(
            |Query(params): Query<HashMap<String, String>>,
             Json(body): Json<serde_json::Value>| async move {
                assert_eq!(body["token"], "proof-jwz");
                Json(json!({
                    "id": params["sessionId"],
                    "typ": "application/iden3comm-plain-json",
                    "type": "https://iden3-communication.io/authorization/1.0/response",
                    "thid": "t-1",
                    "body": {},
                    "from": "did:ex:wallet",
                    "to": "did:ex:verifier"
                }))
            },
        ),
    );
    let base = spawn_upstream(router).await;

    let msg = sdk_for(&base)
        .identity
        .verification
        .verify_callback(
            None,
            "session&one#two",
            &VerifyCallbackRequest {
                token: "proof-jwz".into(),
            },
        )
        .await
        .unwrap();

    assert_eq!(msg.id, "session&one#two");
}
