use axum::{
    Json, Router,
    extract::{OriginalUri, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    API_PREFIX, AuditEvent, AuditOutcome, EntityAlerts, IdPath, PageParams, Pageable,
    ValidatedJson,
    errors::responses::{
        BadRequestAlertResponse, BadRequestIdResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
    pagination_headers,
};
use core_proc_macros::ApiResource;
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::MissionResult;
use crate::models::{Mission, MissionPayload};
use crate::repository::MissionRepository;
use crate::service::MissionService;

/// OpenAPI documentation for Missions API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_missions,
        create_mission,
        update_mission,
        get_mission,
        delete_mission,
    ),
    components(
        schemas(Mission, MissionPayload),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestAlertResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = entity::Model::TAG, description = "Mission management endpoints")
    )
)]
pub struct ApiDoc;

struct MissionState<R: MissionRepository> {
    service: MissionService<R>,
    alerts: EntityAlerts,
}

/// Mission routes, relative to where the router is nested.
///
/// `app_name` prefixes the alert headers of mutations.
pub fn router<R: MissionRepository + 'static>(service: MissionService<R>, app_name: &str) -> Router {
    let state = Arc::new(MissionState {
        service,
        alerts: EntityAlerts::new(app_name, entity::Model::ENTITY_NAME),
    });

    Router::new()
        .route(
            "/",
            get(list_missions).post(create_mission).put(update_mission),
        )
        .route("/{id}", get(get_mission).delete(delete_mission))
        .with_state(state)
}

fn audit(headers: &HeaderMap, verb: &str, id: i64) -> AuditEvent {
    let entity_name = entity::Model::ENTITY_NAME;
    AuditEvent::new(
        format!("{entity_name}.{verb}"),
        Some(format!("{entity_name}:{id}")),
        AuditOutcome::Success,
    )
    .with_request(headers)
}

/// List missions
#[utoipa::path(
    get,
    path = "",
    tag = entity::Model::TAG,
    params(PageParams),
    responses(
        (status = 200, description = "One page of missions", body = Vec<Mission>,
            headers(
                ("X-Total-Count" = u64, description = "Number of missions"),
                ("Link" = String, description = "Pagination links")
            )
        ),
        (status = 400, description = "Unknown sort property"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_missions<R: MissionRepository>(
    State(state): State<Arc<MissionState<R>>>,
    OriginalUri(uri): OriginalUri,
    Pageable(request): Pageable,
) -> MissionResult<impl IntoResponse> {
    let page = state.service.list(request).await?;
    let headers = pagination_headers(&uri, &page);
    Ok((headers, Json(page.items)))
}

/// Create a new mission
#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = MissionPayload,
    responses(
        (status = 201, description = "Mission created", body = Mission,
            headers(("Location" = String, description = "URL of the new mission"))
        ),
        (status = 400, response = BadRequestAlertResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_mission<R: MissionRepository>(
    State(state): State<Arc<MissionState<R>>>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<MissionPayload>,
) -> MissionResult<impl IntoResponse> {
    let mission = state.service.create(payload).await?;

    audit(&headers, "create", mission.id)
        .with_details(json!({ "name": mission.name }))
        .log();

    let location = format!("{API_PREFIX}{}/{}", entity::Model::URL, mission.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        state.alerts.created(mission.id),
        Json(mission),
    ))
}

/// Replace an existing mission
#[utoipa::path(
    put,
    path = "",
    tag = entity::Model::TAG,
    request_body = MissionPayload,
    responses(
        (status = 200, description = "Mission updated", body = Mission),
        (status = 400, response = BadRequestAlertResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_mission<R: MissionRepository>(
    State(state): State<Arc<MissionState<R>>>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<MissionPayload>,
) -> MissionResult<impl IntoResponse> {
    let mission = state.service.update(payload).await?;

    audit(&headers, "update", mission.id).log();

    Ok((state.alerts.updated(mission.id), Json(mission)))
}

/// Get a mission by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "Mission ID")
    ),
    responses(
        (status = 200, description = "Mission found", body = Mission),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_mission<R: MissionRepository>(
    State(state): State<Arc<MissionState<R>>>,
    IdPath(id): IdPath,
) -> MissionResult<Json<Mission>> {
    let mission = state.service.get(id).await?;
    Ok(Json(mission))
}

/// Delete a mission
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "Mission ID")
    ),
    responses(
        (status = 204, description = "Mission deleted, or did not exist"),
        (status = 400, response = BadRequestIdResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_mission<R: MissionRepository>(
    State(state): State<Arc<MissionState<R>>>,
    headers: HeaderMap,
    IdPath(id): IdPath,
) -> MissionResult<impl IntoResponse> {
    state.service.delete(id).await?;

    audit(&headers, "delete", id).log();

    Ok((StatusCode::NO_CONTENT, state.alerts.deleted(id)))
}
