use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use core_proc_macros::ApiResource;
use database::DatabaseError;
use thiserror::Error;

use crate::entity;

#[derive(Debug, Error)]
pub enum SpaceEventError {
    #[error("A new spaceEvent cannot already have an ID")]
    IdExists,

    #[error("Invalid id")]
    IdNull,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Space event {0} not found")]
    NotFound(i64),

    #[error("Unknown sort property: {0}")]
    InvalidSort(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type SpaceEventResult<T> = Result<T, SpaceEventError>;

impl From<DatabaseError> for SpaceEventError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::InvalidSortProperty(property) => SpaceEventError::InvalidSort(property),
            other => SpaceEventError::Storage(other.to_string()),
        }
    }
}

impl From<SpaceEventError> for AppError {
    fn from(err: SpaceEventError) -> Self {
        let entity_name = entity::Model::ENTITY_NAME;
        match err {
            e @ (SpaceEventError::IdExists | SpaceEventError::IdNull) => {
                let error_key = if matches!(e, SpaceEventError::IdExists) {
                    "idexists"
                } else {
                    "idnull"
                };
                AppError::BadRequestAlert {
                    entity_name,
                    error_key,
                    message: e.to_string(),
                }
            }
            SpaceEventError::Validation(msg) => AppError::BadRequest(msg),
            e @ SpaceEventError::NotFound(_) => AppError::NotFound(e.to_string()),
            e @ SpaceEventError::InvalidSort(_) => AppError::BadRequest(e.to_string()),
            SpaceEventError::Storage(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for SpaceEventError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
