//! HTTP router setup.

use crate::handlers;
use crate::middleware;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the application router.
pub fn create(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        // auth
        .route("/api/auth/sign-in/initiate", post(handlers::auth::sign_in_initiate))
        .route("/api/auth/sign-in/confirm", post(handlers::auth::sign_in_confirm))
        .route("/api/auth/admin-login", post(handlers::auth::admin_login))
        .route("/api/auth/token/refresh", post(handlers::auth::token_refresh))
        // identity: encryption
        .route("/api/identity/get-encrypted-key", post(handlers::identity::get_encrypted_key))
        .route("/api/identity/generate-encrypted-key", post(handlers::identity::generate_encrypted_key))
        // identity: issuer
        .route("/api/identity/issuer/issue-credential", post(handlers::identity::issue_credential))
        .route("/api/identity/issuer/get-credential-offer", get(handlers::identity::get_credential_offer))
        // identity: ipfs
        .route("/api/identity/ipfs/store-credential", post(handlers::identity::store_credential))
        .route("/api/identity/ipfs/retrieve-user-credential", post(handlers::identity::retrieve_user_credential))
        .route("/api/identity/get-all-user-credentials", post(handlers::identity::get_all_user_credentials))
        // identity: verification
        .route("/api/identity/verify/sign-in", post(handlers::verification::verify_sign_in))
        .route(
            "/api/identity/verification/link-store",
            get(handlers::verification::get_link_store).post(handlers::verification::post_link_store),
        )
        .route("/api/identity/verification/callback", post(handlers::verification::verify_callback))
        // analytics
        .route("/api/analytics/start-session", post(handlers::analytics::start_session))
        .route("/api/analytics/end-session", post(handlers::analytics::end_session))
        .layer(axum::middleware::from_fn_with_state(
            Arc::clone(&state),
            middleware::correlate,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
