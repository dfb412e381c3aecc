use async_trait::async_trait;
use database::pagination::nulls_last;
use database::{DatabaseError, Direction, Page, PageRequest, SortableEntity};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::entity;
use crate::error::MissionResult;
use crate::models::{Mission, MissionDraft};

/// Mission persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MissionRepository: Send + Sync {
    /// Inserts a draft without id, replaces the record otherwise.
    ///
    /// A draft whose id is not stored is inserted under a fresh id.
    async fn save(&self, draft: MissionDraft) -> MissionResult<Mission>;

    async fn find_by_id(&self, id: i64) -> MissionResult<Option<Mission>>;

    /// One page ordered by the requested sort, ties broken by id.
    async fn find_all(&self, request: PageRequest) -> MissionResult<Page<Mission>>;

    /// Deleting a missing id is not an error.
    async fn delete_by_id(&self, id: i64) -> MissionResult<()>;
}

#[derive(Debug, Default)]
struct Store {
    records: BTreeMap<i64, Mission>,
    last_id: i64,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

/// In-memory implementation of MissionRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryMissionRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryMissionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn compare(a: &Mission, b: &Mission, column: entity::Column) -> Ordering {
    match column {
        entity::Column::Id => a.id.cmp(&b.id),
        entity::Column::Name => a.name.cmp(&b.name),
        entity::Column::Description => nulls_last(&a.description, &b.description),
    }
}

#[async_trait]
impl MissionRepository for InMemoryMissionRepository {
    async fn save(&self, draft: MissionDraft) -> MissionResult<Mission> {
        let mut store = self.store.write().await;

        let id = match draft.id {
            Some(id) if store.records.contains_key(&id) => id,
            Some(stale) => {
                let id = store.next_id();
                tracing::warn!(requested_id = stale, mission_id = id, "mission not found, inserting under a new id");
                id
            }
            None => store.next_id(),
        };

        let mission = draft.into_mission(id);
        store.records.insert(id, mission.clone());

        tracing::debug!(mission_id = id, "saved mission");
        Ok(mission)
    }

    async fn find_by_id(&self, id: i64) -> MissionResult<Option<Mission>> {
        let store = self.store.read().await;
        Ok(store.records.get(&id).cloned())
    }

    async fn find_all(&self, request: PageRequest) -> MissionResult<Page<Mission>> {
        let orders: Vec<(entity::Column, Direction)> = request
            .sort
            .iter()
            .map(|order| {
                entity::Entity::sort_column(&order.property)
                    .map(|column| (column, order.direction))
                    .ok_or_else(|| DatabaseError::InvalidSortProperty(order.property.clone()))
            })
            .collect::<Result<_, _>>()?;

        let store = self.store.read().await;
        // BTreeMap iteration is already id ascending; the stable sort keeps it for ties
        let mut all: Vec<Mission> = store.records.values().cloned().collect();
        all.sort_by(|a, b| {
            orders
                .iter()
                .map(|(column, direction)| direction.apply(compare(a, b, *column)))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        });

        Ok(Page::from_sorted(all, &request))
    }

    async fn delete_by_id(&self, id: i64) -> MissionResult<()> {
        let mut store = self.store.write().await;
        if store.records.remove(&id).is_some() {
            tracing::debug!(mission_id = id, "deleted mission");
        }
        Ok(())
    }
}
