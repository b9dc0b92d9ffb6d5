//! Session analytics events.

use crate::http::Transport;
use crate::SdkError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSessionEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonymous_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSessionResult {
    pub success: bool,
    pub session_id: String,
    /// ISO-8601 timestamp assigned by the platform.
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonymous_id: Option<String>,
    /// Whether the anonymous session was linked to a known user.
    #[serde(default)]
    pub linked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndSessionEvent {
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonymous_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndSessionResult {
    pub success: bool,
    pub timestamp: String,
}

/// Analytics operations (no bearer token required).
#[derive(Clone)]
pub struct AnalyticsClient {
    transport: Arc<Transport>,
}

impl AnalyticsClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Record the start of a user or anonymous session.
    pub async fn start_session(
        &self,
        event: &StartSessionEvent,
    ) -> Result<StartSessionResult, SdkError> {
        self.transport
            .post("/v1/analytics/session/start", None, event)
            .await
    }

    /// Record the end of a session.
    pub async fn end_session(&self, event: &EndSessionEvent) -> Result<EndSessionResult, SdkError> {
        self.transport
            .post("/v1/analytics/session/end", None, event)
            .await
    }
}
