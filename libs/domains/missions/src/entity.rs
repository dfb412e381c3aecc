use core_proc_macros::SeaOrmResource;
use database::SortableEntity;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::{Mission, MissionDraft};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, SeaOrmResource)]
#[sea_orm(table_name = "mission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl SortableEntity for Entity {}

impl From<Model> for Mission {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

impl From<MissionDraft> for ActiveModel {
    fn from(draft: MissionDraft) -> Self {
        ActiveModel {
            id: draft.id.map_or(NotSet, Set),
            name: Set(draft.name),
            description: Set(draft.description),
        }
    }
}
