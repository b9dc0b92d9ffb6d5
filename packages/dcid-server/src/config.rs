//! Server configuration.

use serde::Deserialize;

/// Configuration for the demo server.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// DCID platform API key. Startup fails when empty.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "defaults::environment")]
    pub environment: String,

    /// Explicit platform base URL override (tests, self-hosted).
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default = "defaults::bind_address")]
    pub bind_address: String,

    #[serde(default = "defaults::timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "defaults::request_logging")]
    pub request_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            environment: defaults::environment(),
            base_url: None,
            bind_address: defaults::bind_address(),
            timeout_ms: defaults::timeout_ms(),
            request_logging: defaults::request_logging(),
        }
    }
}

mod defaults {
    pub fn environment() -> String {
        "dev".into()
    }

    pub fn bind_address() -> String {
        // PORT wins for platforms that inject it (Heroku-style).
        if let Ok(port) = std::env::var("PORT") {
            if !port.is_empty() {
                return format!("0.0.0.0:{port}");
            }
        }
        "0.0.0.0:8080".into()
    }

    pub fn timeout_ms() -> u64 {
        // Credential operations can involve a ledger; allow two minutes.
        dcid_sdk::DEFAULT_TIMEOUT_MS
    }

    pub fn request_logging() -> bool {
        true
    }
}
