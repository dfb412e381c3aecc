use core_proc_macros::SeaOrmResource;
use database::SortableEntity;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::{SpaceEvent, SpaceEventDraft, SpaceEventType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, SeaOrmResource)]
#[sea_orm(table_name = "space_event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub date: Date,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Blob", nullable)]
    pub photo: Option<Vec<u8>>,
    pub photo_content_type: Option<String>,
    #[sea_orm(column_name = "type")]
    pub kind: SpaceEventType,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// The API calls the `kind` field `type`.
impl SortableEntity for Entity {
    fn sort_column(property: &str) -> Option<Column> {
        match property {
            "type" => Some(Column::Kind),
            "kind" => None,
            other => other.parse().ok(),
        }
    }
}

impl From<Model> for SpaceEvent {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            date: model.date,
            description: model.description,
            photo: model.photo,
            photo_content_type: model.photo_content_type,
            kind: model.kind,
        }
    }
}

impl From<SpaceEventDraft> for ActiveModel {
    fn from(draft: SpaceEventDraft) -> Self {
        ActiveModel {
            id: draft.id.map_or(NotSet, Set),
            name: Set(draft.name),
            date: Set(draft.date),
            description: Set(draft.description),
            photo: Set(draft.photo),
            photo_content_type: Set(draft.photo_content_type),
            kind: Set(draft.kind),
        }
    }
}
