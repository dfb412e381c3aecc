use async_trait::async_trait;
use database::{BaseRepository, DatabaseError, Page, PageRequest};
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    entity,
    error::MissionResult,
    models::{Mission, MissionDraft},
    repository::MissionRepository,
};

#[derive(Clone)]
pub struct PgMissionRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgMissionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl MissionRepository for PgMissionRepository {
    async fn save(&self, draft: MissionDraft) -> MissionResult<Mission> {
        let Some(id) = draft.id else {
            let model = self.base.insert(entity::ActiveModel::from(draft)).await?;
            tracing::debug!(mission_id = model.id, "inserted mission");
            return Ok(model.into());
        };

        match self.base.update(entity::ActiveModel::from(draft.clone())).await {
            Ok(model) => {
                tracing::debug!(mission_id = id, "updated mission");
                Ok(model.into())
            }
            Err(DatabaseError::Postgres(DbErr::RecordNotUpdated)) => {
                let model = self
                    .base
                    .insert(entity::ActiveModel::from(MissionDraft { id: None, ..draft }))
                    .await?;
                tracing::warn!(requested_id = id, mission_id = model.id, "mission not found, inserted under a new id");
                Ok(model.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_id(&self, id: i64) -> MissionResult<Option<Mission>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn find_all(&self, request: PageRequest) -> MissionResult<Page<Mission>> {
        let page = self.base.find_page(&request).await?;
        Ok(page.map(Into::into))
    }

    async fn delete_by_id(&self, id: i64) -> MissionResult<()> {
        let rows_affected = self.base.delete_by_id(id).await?;
        if rows_affected > 0 {
            tracing::debug!(mission_id = id, "deleted mission");
        }
        Ok(())
    }
}
