use async_trait::async_trait;
use database::{BaseRepository, DatabaseError, Page, PageRequest};
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    entity,
    error::SpaceEventResult,
    models::{SpaceEvent, SpaceEventDraft},
    repository::SpaceEventRepository,
};

#[derive(Clone)]
pub struct PgSpaceEventRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgSpaceEventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl SpaceEventRepository for PgSpaceEventRepository {
    async fn save(&self, draft: SpaceEventDraft) -> SpaceEventResult<SpaceEvent> {
        let Some(id) = draft.id else {
            let model = self.base.insert(entity::ActiveModel::from(draft)).await?;
            tracing::debug!(space_event_id = model.id, "inserted space event");
            return Ok(model.into());
        };

        match self.base.update(entity::ActiveModel::from(draft.clone())).await {
            Ok(model) => {
                tracing::debug!(space_event_id = id, "updated space event");
                Ok(model.into())
            }
            Err(DatabaseError::Postgres(DbErr::RecordNotUpdated)) => {
                let fresh = SpaceEventDraft { id: None, ..draft };
                let model = self.base.insert(entity::ActiveModel::from(fresh)).await?;
                tracing::warn!(requested_id = id, space_event_id = model.id, "space event not found, inserted under a new id");
                Ok(model.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_id(&self, id: i64) -> SpaceEventResult<Option<SpaceEvent>> {
        Ok(self.base.find_by_id(id).await?.map(Into::into))
    }

    async fn find_all(&self, request: PageRequest) -> SpaceEventResult<Page<SpaceEvent>> {
        Ok(self.base.find_page(&request).await?.map(Into::into))
    }

    async fn delete_by_id(&self, id: i64) -> SpaceEventResult<()> {
        if self.base.delete_by_id(id).await? > 0 {
            tracing::debug!(space_event_id = id, "deleted space event");
        }
        Ok(())
    }
}
