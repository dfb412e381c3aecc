use core_proc_macros::{ApiResource, SeaOrmResource};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, SeaOrmResource)]
#[sea_orm(table_name = "mission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn main() {
    let _ = (
        Model::URL,
        Model::URL_WITH_ID,
        Model::COLLECTION,
        Model::TAG,
        Model::ENTITY_NAME,
    );
}
