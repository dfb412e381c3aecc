use axum::Router;
use domain_space_events::{PgSpaceEventRepository, SpaceEventService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgSpaceEventRepository::new(state.db.clone());
    let service = SpaceEventService::new(repository);
    handlers::router(service, &state.config.client_app_name)
}
