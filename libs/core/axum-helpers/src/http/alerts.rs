use axum::http::{HeaderMap, HeaderName, HeaderValue};
use std::fmt::Display;

/// Notification headers a client application shows after a mutation:
/// `X-{app}-alert: {app}.{entity}.created` and `X-{app}-params: {id}`.
#[derive(Debug, Clone)]
pub struct EntityAlerts {
    app_name: String,
    entity_name: &'static str,
    alert: HeaderName,
    params: HeaderName,
}

impl EntityAlerts {
    /// Characters outside `[A-Za-z0-9_-]` are dropped from `app_name`.
    pub fn new(app_name: &str, entity_name: &'static str) -> Self {
        let mut app_name: String = app_name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
            .collect();
        if app_name.is_empty() {
            app_name.push_str("app");
        }

        let header = |suffix: &str| {
            HeaderName::from_bytes(format!("x-{}-{}", app_name, suffix).as_bytes())
                .unwrap_or_else(|_| HeaderName::from_static("x-app-alert"))
        };
        let alert = header("alert");
        let params = header("params");

        Self {
            app_name,
            entity_name,
            alert,
            params,
        }
    }

    pub fn entity_name(&self) -> &'static str {
        self.entity_name
    }

    pub fn created(&self, id: impl Display) -> HeaderMap {
        self.alert_for("created", id)
    }

    pub fn updated(&self, id: impl Display) -> HeaderMap {
        self.alert_for("updated", id)
    }

    pub fn deleted(&self, id: impl Display) -> HeaderMap {
        self.alert_for("deleted", id)
    }

    fn alert_for(&self, action: &str, id: impl Display) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let message = format!("{}.{}.{}", self.app_name, self.entity_name, action);
        if let Ok(value) = HeaderValue::from_str(&message) {
            headers.insert(self.alert.clone(), value);
        }
        if let Ok(value) = HeaderValue::from_str(&id.to_string()) {
            headers.insert(self.params.clone(), value);
        }
        headers
    }
}
