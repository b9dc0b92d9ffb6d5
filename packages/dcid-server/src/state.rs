//! Application state shared across handlers.

use crate::config::Config;
use dcid_sdk::{DcidSdk, Environment, SdkConfig, SdkError};
use std::sync::atomic::AtomicU64;
use std::time::Instant;
use tracing::info;

/// Shared application state. The SDK client is immutable; per-request
/// credentials are passed through each call, never stored here.
pub struct AppState {
    pub config: Config,
    pub sdk: DcidSdk,
    pub start_time: Instant,
    pub request_count: AtomicU64,
}

impl AppState {
    /// Build state from configuration.
    pub fn new(config: Config) -> Result<Self, SdkError> {
        let environment: Environment = config.environment.parse()?;

        let mut sdk_config = SdkConfig::new(&config.api_key, environment)
            .with_timeout_ms(config.timeout_ms)
            .with_request_logging(config.request_logging);
        if let Some(ref base_url) = config.base_url {
            sdk_config = sdk_config.with_base_url(base_url);
        }

        info!(environment = %environment, "DCID SDK initialized");

        Ok(Self {
            sdk: DcidSdk::new(sdk_config)?,
            config,
            start_time: Instant::now(),
            request_count: AtomicU64::new(0),
        })
    }
}
