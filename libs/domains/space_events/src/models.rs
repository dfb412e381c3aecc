use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::SpaceEventError;

/// Kind of space event
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "space_event_type")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SpaceEventType {
    #[sea_orm(string_value = "LAUNCH")]
    Launch,
    #[sea_orm(string_value = "LANDING")]
    Landing,
}

/// `Option<Vec<u8>>` as a standard base64 string.
mod base64_bytes {
    use base64::{Engine as _, engine::general_purpose::STANDARD};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(bytes) => serializer.serialize_some(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|encoded| STANDARD.decode(encoded.trim()).map_err(D::Error::custom))
            .transpose()
    }
}

/// A stored space event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpaceEvent {
    pub id: i64,
    #[schema(example = "Apollo 11 Launch")]
    pub name: String,
    #[schema(example = "1969-07-16")]
    pub date: NaiveDate,
    pub description: Option<String>,
    /// Base64 encoded image
    #[serde(default, with = "base64_bytes")]
    #[schema(value_type = Option<String>, format = Byte)]
    pub photo: Option<Vec<u8>>,
    #[schema(example = "image/png")]
    pub photo_content_type: Option<String>,
    #[serde(rename = "type")]
    pub kind: SpaceEventType,
}

/// Request body of `POST` and `PUT`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpaceEventPayload {
    pub id: Option<i64>,
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required)]
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    #[serde(default, with = "base64_bytes")]
    #[schema(value_type = Option<String>, format = Byte)]
    pub photo: Option<Vec<u8>>,
    pub photo_content_type: Option<String>,
    #[serde(rename = "type")]
    #[validate(required)]
    pub kind: Option<SpaceEventType>,
}

/// A validated space event ready to be saved. No `id` means a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceEventDraft {
    pub id: Option<i64>,
    pub name: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub photo: Option<Vec<u8>>,
    pub photo_content_type: Option<String>,
    pub kind: SpaceEventType,
}

impl TryFrom<SpaceEventPayload> for SpaceEventDraft {
    type Error = SpaceEventError;

    fn try_from(payload: SpaceEventPayload) -> Result<Self, Self::Error> {
        payload
            .validate()
            .map_err(|e| SpaceEventError::Validation(e.to_string()))?;

        let (Some(name), Some(date), Some(kind)) = (payload.name, payload.date, payload.kind) else {
            return Err(SpaceEventError::Validation(
                "name, date and type are required".to_string(),
            ));
        };

        Ok(Self {
            id: payload.id,
            name,
            date,
            description: payload.description,
            photo: payload.photo,
            photo_content_type: payload.photo_content_type,
            kind,
        })
    }
}

impl SpaceEventDraft {
    pub fn new(name: impl Into<String>, date: NaiveDate, kind: SpaceEventType) -> Self {
        Self {
            id: None,
            name: name.into(),
            date,
            description: None,
            photo: None,
            photo_content_type: None,
            kind,
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

    pub fn with_photo(mut self, photo: Vec<u8>, content_type: impl Into<String>) -> Self {
        self.photo = Some(photo);
        self.photo_content_type = Some(content_type.into());
        self
    }

    pub(crate) fn into_space_event(self, id: i64) -> SpaceEvent {
        SpaceEvent {
            id,
            name: self.name,
            date: self.date,
            description: self.description,
            photo: self.photo,
            photo_content_type: self.photo_content_type,
            kind: self.kind,
        }
    }
}
