//! # DCID Demo Server
//!
//! Demonstration REST server for the DCID server SDK. Every route is a
//! direct pass-through: parse the request, call one SDK operation, reshape
//! the result into JSON, or translate the SDK error into an HTTP status.
//!
//! ## Quick Start
//! ```bash
//! DCID_API_KEY=... cargo run --bin dcid-server
//! ```
//!
//! ## Endpoints
//! - `GET /health` - Health check with uptime and request count
//! - `POST /api/auth/*` - OTP sign-in and token refresh
//! - `POST|GET /api/identity/*` - Keys, credentials, verification
//! - `POST /api/analytics/*` - Session events

pub mod config;
mod error;
mod handlers;
mod middleware;
mod response;
mod router;
mod schemas;
mod state;

pub use config::Config;
pub use error::ApiError;
pub use router::create as create_router;
pub use state::AppState;
