//! Readiness probe backed by a PostgreSQL round trip.

use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use database::postgres::check_health_detailed;

pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async {
            let status = check_health_detailed(&state.db).await;
            tracing::debug!(
                healthy = status.healthy,
                response_time_ms = status.response_time_ms,
                "database readiness"
            );
            if status.healthy {
                Ok(())
            } else {
                Err(status.message.unwrap_or_else(|| "database unavailable".to_string()))
            }
        }),
    )];

    run_health_checks(checks).await.into_response()
}
