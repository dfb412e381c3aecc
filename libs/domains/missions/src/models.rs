use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::MissionError;

/// A stored mission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub id: i64,
    #[schema(example = "Apollo 11")]
    pub name: String,
    pub description: Option<String>,
}

/// Request body of `POST` and `PUT`.
///
/// `id` must be absent on create and present on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MissionPayload {
    pub id: Option<i64>,
    #[validate(required, length(min = 1))]
    #[schema(example = "Apollo 11")]
    pub name: Option<String>,
    pub description: Option<String>,
}

/// A validated mission ready to be saved. No `id` means a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionDraft {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
}

impl TryFrom<MissionPayload> for MissionDraft {
    type Error = MissionError;

    fn try_from(payload: MissionPayload) -> Result<Self, Self::Error> {
        payload
            .validate()
            .map_err(|e| MissionError::Validation(e.to_string()))?;

        let name = payload
            .name
            .ok_or_else(|| MissionError::Validation("name: required".to_string()))?;

        Ok(Self {
            id: payload.id,
            name,
            description: payload.description,
        })
    }
}

impl MissionDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn into_mission(self, id: i64) -> Mission {
        Mission {
            id,
            name: self.name,
            description: self.description,
        }
    }
}
