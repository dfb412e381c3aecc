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
use crate::error::SpaceEventResult;
use crate::models::{SpaceEvent, SpaceEventPayload, SpaceEventType};
use crate::repository::SpaceEventRepository;
use crate::service::SpaceEventService;

/// OpenAPI documentation for Space Events API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_space_events,
        create_space_event,
        update_space_event,
        get_space_event,
        delete_space_event,
    ),
    components(
        schemas(SpaceEvent, SpaceEventPayload, SpaceEventType),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestAlertResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = entity::Model::TAG, description = "Space event management endpoints")
    )
)]
pub struct ApiDoc;

struct SpaceEventState<R: SpaceEventRepository> {
    service: SpaceEventService<R>,
    alerts: EntityAlerts,
}

/// Space event routes, relative to where the router is nested.
///
/// `app_name` prefixes the alert headers of mutations.
pub fn router<R: SpaceEventRepository + 'static>(service: SpaceEventService<R>, app_name: &str) -> Router {
    let state = Arc::new(SpaceEventState {
        service,
        alerts: EntityAlerts::new(app_name, entity::Model::ENTITY_NAME),
    });

    Router::new()
        .route(
            "/",
            get(list_space_events).post(create_space_event).put(update_space_event),
        )
        .route("/{id}", get(get_space_event).delete(delete_space_event))
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

/// List space events
#[utoipa::path(
    get,
    path = "",
    tag = entity::Model::TAG,
    params(PageParams),
    responses(
        (status = 200, description = "One page of space events", body = Vec<SpaceEvent>,
            headers(
                ("X-Total-Count" = u64, description = "Number of space events"),
                ("Link" = String, description = "Pagination links")
            )
        ),
        (status = 400, description = "Unknown sort property"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_space_events<R: SpaceEventRepository>(
    State(state): State<Arc<SpaceEventState<R>>>,
    OriginalUri(uri): OriginalUri,
    Pageable(request): Pageable,
) -> SpaceEventResult<impl IntoResponse> {
    let page = state.service.list(request).await?;
    let headers = pagination_headers(&uri, &page);
    Ok((headers, Json(page.items)))
}

/// Create a new space event
#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = SpaceEventPayload,
    responses(
        (status = 201, description = "Space event created", body = SpaceEvent,
            headers(("Location" = String, description = "URL of the new space event"))
        ),
        (status = 400, response = BadRequestAlertResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_space_event<R: SpaceEventRepository>(
    State(state): State<Arc<SpaceEventState<R>>>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<SpaceEventPayload>,
) -> SpaceEventResult<impl IntoResponse> {
    let event = state.service.create(payload).await?;

    audit(&headers, "create", event.id)
        .with_details(json!({ "name": event.name, "type": event.kind.to_string() }))
        .log();

    let location = format!("{API_PREFIX}{}/{}", entity::Model::URL, event.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        state.alerts.created(event.id),
        Json(event),
    ))
}

/// Replace an existing space event
#[utoipa::path(
    put,
    path = "",
    tag = entity::Model::TAG,
    request_body = SpaceEventPayload,
    responses(
        (status = 200, description = "Space event updated", body = SpaceEvent),
        (status = 400, response = BadRequestAlertResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_space_event<R: SpaceEventRepository>(
    State(state): State<Arc<SpaceEventState<R>>>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<SpaceEventPayload>,
) -> SpaceEventResult<impl IntoResponse> {
    let event = state.service.update(payload).await?;

    audit(&headers, "update", event.id).log();

    Ok((state.alerts.updated(event.id), Json(event)))
}

/// Get a space event by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "Space event ID")
    ),
    responses(
        (status = 200, description = "Space event found", body = SpaceEvent),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_space_event<R: SpaceEventRepository>(
    State(state): State<Arc<SpaceEventState<R>>>,
    IdPath(id): IdPath,
) -> SpaceEventResult<Json<SpaceEvent>> {
    let event = state.service.get(id).await?;
    Ok(Json(event))
}

/// Delete a space event
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "Space event ID")
    ),
    responses(
        (status = 204, description = "Space event deleted, or did not exist"),
        (status = 400, response = BadRequestIdResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_space_event<R: SpaceEventRepository>(
    State(state): State<Arc<SpaceEventState<R>>>,
    headers: HeaderMap,
    IdPath(id): IdPath,
) -> SpaceEventResult<impl IntoResponse> {
    state.service.delete(id).await?;

    audit(&headers, "delete", id).log();

    Ok((StatusCode::NO_CONTENT, state.alerts.deleted(id)))
}
