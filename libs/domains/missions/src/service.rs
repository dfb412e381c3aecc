use database::{Page, PageRequest};
use std::sync::Arc;

use crate::error::{MissionError, MissionResult};
use crate::models::{Mission, MissionDraft, MissionPayload};
use crate::repository::MissionRepository;

/// Identifier rules and validation in front of a [`MissionRepository`].
pub struct MissionService<R: MissionRepository> {
    repository: Arc<R>,
}

impl<R: MissionRepository> Clone for MissionService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: MissionRepository> MissionService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Fails with [`MissionError::IdExists`] when the payload carries an id.
    pub async fn create(&self, payload: MissionPayload) -> MissionResult<Mission> {
        let draft = MissionDraft::try_from(payload)?;
        if draft.id.is_some() {
            return Err(MissionError::IdExists);
        }

        self.repository.save(draft).await
    }

    /// Full replacement. Fails with [`MissionError::IdNull`] without an id.
    pub async fn update(&self, payload: MissionPayload) -> MissionResult<Mission> {
        let draft = MissionDraft::try_from(payload)?;
        if draft.id.is_none() {
            return Err(MissionError::IdNull);
        }

        self.repository.save(draft).await
    }

    pub async fn list(&self, request: PageRequest) -> MissionResult<Page<Mission>> {
        self.repository.find_all(request).await
    }

    pub async fn get(&self, id: i64) -> MissionResult<Mission> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(MissionError::NotFound(id))
    }

    pub async fn delete(&self, id: i64) -> MissionResult<()> {
        self.repository.delete_by_id(id).await
    }
}
