use axum::Router;
use domain_missions::{MissionService, PgMissionRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgMissionRepository::new(state.db.clone());
    let service = MissionService::new(repository);
    handlers::router(service, &state.config.client_app_name)
}
