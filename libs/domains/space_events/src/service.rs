use database::{Page, PageRequest};
use std::sync::Arc;

use crate::error::{SpaceEventError, SpaceEventResult};
use crate::models::{SpaceEvent, SpaceEventDraft, SpaceEventPayload};
use crate::repository::SpaceEventRepository;

/// Identifier rules and validation in front of a [`SpaceEventRepository`].
pub struct SpaceEventService<R: SpaceEventRepository> {
    repository: Arc<R>,
}

impl<R: SpaceEventRepository> Clone for SpaceEventService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: SpaceEventRepository> SpaceEventService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn create(&self, payload: SpaceEventPayload) -> SpaceEventResult<SpaceEvent> {
        let draft = SpaceEventDraft::try_from(payload)?;
        if draft.id.is_some() {
            return Err(SpaceEventError::IdExists);
        }

        self.repository.save(draft).await
    }

    /// Replaces every field of the event named by `payload.id`.
    pub async fn update(&self, payload: SpaceEventPayload) -> SpaceEventResult<SpaceEvent> {
        let draft = SpaceEventDraft::try_from(payload)?;
        if draft.id.is_none() {
            return Err(SpaceEventError::IdNull);
        }

        self.repository.save(draft).await
    }

    pub async fn list(&self, request: PageRequest) -> SpaceEventResult<Page<SpaceEvent>> {
        self.repository.find_all(request).await
    }

    pub async fn get(&self, id: i64) -> SpaceEventResult<SpaceEvent> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(SpaceEventError::NotFound(id))
    }

    pub async fn delete(&self, id: i64) -> SpaceEventResult<()> {
        self.repository.delete_by_id(id).await
    }
}
