//! Audit trail for data changes, emitted on the `audit` tracing target.
//!
//! ```ignore
//! AuditEvent::new("mission.delete", Some(format!("mission:{id}")), AuditOutcome::Success)
//!     .with_request(&headers)
//!     .log();
//! ```

use axum::http::HeaderMap;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditOutcome {
    Success,
    Failure,
}

#[derive(Debug, Serialize)]
pub struct AuditEvent {
    /// `{entity}.{verb}`, e.g. `spaceEvent.update`
    pub action: String,
    /// `{entity}:{id}`
    pub resource: Option<String>,
    pub outcome: AuditOutcome,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(action: impl Into<String>, resource: Option<String>, outcome: AuditOutcome) -> Self {
        Self {
            action: action.into(),
            resource,
            outcome,
            ip_address: None,
            user_agent: None,
            timestamp: Utc::now(),
            details: None,
        }
    }

    /// Records the client address and user agent of the request.
    pub fn with_request(mut self, headers: &HeaderMap) -> Self {
        self.ip_address = extract_ip_from_headers(headers);
        self.user_agent = extract_user_agent(headers);
        self
    }

    pub fn with_details(mut self, details: impl Serialize) -> Self {
        self.details = serde_json::to_value(details).ok();
        self
    }

    pub fn log(self) {
        tracing::info!(
            target: "audit",
            action = %self.action,
            resource = self.resource.as_deref(),
            outcome = ?self.outcome,
            ip = self.ip_address.as_deref(),
            user_agent = self.user_agent.as_deref(),
            details = ?self.details,
            "{}",
            serde_json::to_string(&self).unwrap_or_else(|_| self.action.clone())
        );
    }
}

/// First `X-Forwarded-For` hop, else `X-Real-IP`.
pub fn extract_ip_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|v| v.to_str().ok())
                .map(|s| s.trim().to_string())
        })
}

pub fn extract_user_agent(headers: &HeaderMap) -> Option<String> {
    headers
        .get(axum::http::header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
