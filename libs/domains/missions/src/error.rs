use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use core_proc_macros::ApiResource;
use database::DatabaseError;
use thiserror::Error;

use crate::entity;

#[derive(Debug, Error)]
pub enum MissionError {
    #[error("A new mission cannot already have an ID")]
    IdExists,

    #[error("Invalid id")]
    IdNull,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Mission {0} not found")]
    NotFound(i64),

    #[error("Unknown sort property: {0}")]
    InvalidSort(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type MissionResult<T> = Result<T, MissionError>;

impl From<DatabaseError> for MissionError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::InvalidSortProperty(property) => MissionError::InvalidSort(property),
            other => MissionError::Storage(other.to_string()),
        }
    }
}

impl From<MissionError> for AppError {
    fn from(err: MissionError) -> Self {
        let entity_name = entity::Model::ENTITY_NAME;
        match err {
            MissionError::IdExists => AppError::BadRequestAlert {
                entity_name,
                error_key: "idexists",
                message: MissionError::IdExists.to_string(),
            },
            MissionError::IdNull => AppError::BadRequestAlert {
                entity_name,
                error_key: "idnull",
                message: MissionError::IdNull.to_string(),
            },
            MissionError::Validation(msg) => AppError::BadRequest(msg),
            e @ MissionError::NotFound(_) => AppError::NotFound(e.to_string()),
            e @ MissionError::InvalidSort(_) => AppError::BadRequest(e.to_string()),
            MissionError::Storage(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for MissionError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
