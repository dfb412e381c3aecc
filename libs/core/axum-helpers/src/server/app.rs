use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::pagination::X_TOTAL_COUNT;
use crate::http::{API_PREFIX, security::security_headers};
use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Wraps the resource routers with documentation UIs and the middleware stack.
///
/// `apis` is nested under `/api`. Documentation is served at `/swagger-ui`,
/// `/redoc`, `/rapidoc` and `/scalar`, with the OpenAPI document at
/// `/api-docs/openapi.json`. Unmatched routes answer with a JSON 404.
///
/// Fails when `CORS_ALLOWED_ORIGIN` (comma separated origins) is unset,
/// empty or invalid.
pub async fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let origins = std::env::var("CORS_ALLOWED_ORIGIN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN environment variable is required, e.g. http://localhost:9000",
        )
    })?;
    let cors = cors_layer(&origins)?;
    info!(origins = %origins, "CORS configured");

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest(API_PREFIX, apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// CORS policy for the browser client. Pagination headers are exposed so
/// the client can read them.
pub fn cors_layer(origins: &str) -> io::Result<CorsLayer> {
    let allowed: Vec<HeaderValue> = origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(HeaderValue::from_str)
        .collect::<Result<_, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    if allowed.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN cannot be empty",
        ));
    }

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .expose_headers([header::LINK, header::LOCATION, X_TOTAL_COUNT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600)))
}

/// Serves `router` until SIGINT/SIGTERM, then runs `cleanup` bounded by
/// `shutdown_timeout`.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::new();
    let mut shutdown_rx = coordinator.subscribe();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("server listening on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        let _ = shutdown_rx.recv().await;

        info!(timeout = ?shutdown_timeout, "running cleanup");
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("cleanup completed"),
            Err(_) => tracing::warn!(timeout = ?shutdown_timeout, "cleanup timed out, forcing shutdown"),
        }
    });

    let signal = coordinator.clone();
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { signal.wait_for_signal().await })
        .await
        .inspect_err(|e| tracing::error!(error = ?e, "server error"));

    // The server may stop on its own error; cleanup must still run.
    coordinator.shutdown();
    cleanup_handle.await.ok();

    serve_result
}
