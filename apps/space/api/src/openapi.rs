use domain_missions::ApiResource;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Space API",
        version = "0.1.0",
        description = "Missions and space events"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = domain_missions::entity::Model::URL, api = domain_missions::handlers::ApiDoc),
        (path = domain_space_events::entity::Model::URL, api = domain_space_events::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
