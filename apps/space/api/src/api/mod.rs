use axum::Router;

pub mod health;
pub mod missions;
pub mod space_events;

/// API routes without the `/api` prefix, which `create_router` adds.
///
/// Paths come from the `SeaOrmResource` constants of each entity.
pub fn routes(state: &crate::state::AppState) -> Router {
    use domain_missions::ApiResource;

    Router::new()
        .nest(domain_missions::entity::Model::URL, missions::router(state))
        .nest(
            domain_space_events::entity::Model::URL,
            space_events::router(state),
        )
}

/// `/ready` with a real database check, merged next to the stateless app router.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
