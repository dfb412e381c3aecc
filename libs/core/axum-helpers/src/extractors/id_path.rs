use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Numeric `{id}` path segment.
///
/// ```ignore
/// async fn get_mission(IdPath(id): IdPath) -> String {
///     format!("mission {id}")
/// }
///
/// Router::new().route("/missions/{id}", get(get_mission));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::InvalidPath(e.body_text()))?;

        raw.parse::<i64>()
            .map(IdPath)
            .map_err(|_| AppError::InvalidPath(format!("Invalid identifier: {}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use tower::ServiceExt;

    async fn echo(IdPath(id): IdPath) -> String {
        id.to_string()
    }

    async fn status_for(uri: &str) -> StatusCode {
        Router::new()
            .route("/things/{id}", get(echo))
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn accepts_integers() {
        assert_eq!(status_for("/things/42").await, StatusCode::OK);
        assert_eq!(status_for("/things/-1").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn rejects_non_numeric_ids() {
        assert_eq!(status_for("/things/abc").await, StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for("/things/99999999999999999999").await,
            StatusCode::BAD_REQUEST
        );
    }
}
