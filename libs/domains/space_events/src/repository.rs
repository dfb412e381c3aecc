use async_trait::async_trait;
use database::pagination::nulls_last;
use database::{DatabaseError, Direction, Page, PageRequest, SortableEntity};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::entity;
use crate::error::SpaceEventResult;
use crate::models::{SpaceEvent, SpaceEventDraft};

/// Space event persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpaceEventRepository: Send + Sync {
    /// Inserts a draft without id, replaces the record otherwise.
    ///
    /// A draft whose id is not stored is inserted under a fresh id.
    async fn save(&self, draft: SpaceEventDraft) -> SpaceEventResult<SpaceEvent>;

    async fn find_by_id(&self, id: i64) -> SpaceEventResult<Option<SpaceEvent>>;

    /// One page ordered by the requested sort, ties broken by id.
    async fn find_all(&self, request: PageRequest) -> SpaceEventResult<Page<SpaceEvent>>;

    async fn delete_by_id(&self, id: i64) -> SpaceEventResult<()>;
}

#[derive(Debug, Default)]
struct Store {
    records: BTreeMap<i64, SpaceEvent>,
    last_id: i64,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

/// In-memory implementation of SpaceEventRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemorySpaceEventRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemorySpaceEventRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn compare(a: &SpaceEvent, b: &SpaceEvent, column: entity::Column) -> Ordering {
    use entity::Column;

    match column {
        Column::Id => a.id.cmp(&b.id),
        Column::Name => a.name.cmp(&b.name),
        Column::Date => a.date.cmp(&b.date),
        Column::Description => nulls_last(&a.description, &b.description),
        Column::Photo => nulls_last(&a.photo, &b.photo),
        Column::PhotoContentType => nulls_last(&a.photo_content_type, &b.photo_content_type),
        // PostgreSQL orders enum values by declaration
        Column::Kind => a.kind.cmp(&b.kind),
    }
}

#[async_trait]
impl SpaceEventRepository for InMemorySpaceEventRepository {
    async fn save(&self, draft: SpaceEventDraft) -> SpaceEventResult<SpaceEvent> {
        let mut store = self.store.write().await;

        let id = match draft.id {
            Some(id) if store.records.contains_key(&id) => id,
            Some(stale) => {
                let id = store.next_id();
                tracing::warn!(requested_id = stale, space_event_id = id, "space event not found, inserting under a new id");
                id
            }
            None => store.next_id(),
        };

        let event = draft.into_space_event(id);
        store.records.insert(id, event.clone());

        tracing::debug!(space_event_id = id, "saved space event");
        Ok(event)
    }

    async fn find_by_id(&self, id: i64) -> SpaceEventResult<Option<SpaceEvent>> {
        let store = self.store.read().await;
        Ok(store.records.get(&id).cloned())
    }

    async fn find_all(&self, request: PageRequest) -> SpaceEventResult<Page<SpaceEvent>> {
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
        let mut all: Vec<SpaceEvent> = store.records.values().cloned().collect();
        all.sort_by(|a, b| {
            orders
                .iter()
                .map(|(column, direction)| direction.apply(compare(a, b, *column)))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        });

        Ok(Page::from_sorted(all, &request))
    }

    async fn delete_by_id(&self, id: i64) -> SpaceEventResult<()> {
        let mut store = self.store.write().await;
        if store.records.remove(&id).is_some() {
            tracing::debug!(space_event_id = id, "deleted space event");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpaceEventError;
    use crate::models::SpaceEventType;
    use chrono::NaiveDate;
    use database::SortOrder;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(1969, 7, d).unwrap()
    }

    fn ids(page: &Page<SpaceEvent>) -> Vec<i64> {
        page.items.iter().map(|e| e.id).collect()
    }

    #[tokio::test]
    async fn save_then_replace() {
        let repo = InMemorySpaceEventRepository::new();
        let launch = repo
            .save(
                SpaceEventDraft::new("Apollo 11", day(16), SpaceEventType::Launch)
                    .with_photo(vec![1, 2, 3], "image/png"),
            )
            .await
            .unwrap();
        assert_eq!(launch.id, 1);

        let landing = repo
            .save(SpaceEventDraft::new("Eagle", day(20), SpaceEventType::Landing).with_id(1))
            .await
            .unwrap();

        assert_eq!(landing.id, 1);
        assert_eq!(landing.photo, None);
        assert_eq!(repo.find_by_id(1).await.unwrap(), Some(landing));
    }

    #[tokio::test]
    async fn sorts_by_type_then_date_desc() {
        let repo = InMemorySpaceEventRepository::new();
        for (d, kind) in [
            (16, SpaceEventType::Landing),
            (18, SpaceEventType::Launch),
            (20, SpaceEventType::Landing),
            (21, SpaceEventType::Launch),
        ] {
            repo.save(SpaceEventDraft::new("e", day(d), kind)).await.unwrap();
        }

        let request = PageRequest::new(0, 10)
            .with_sort(SortOrder::asc("type"))
            .with_sort(SortOrder::desc("date"));
        let page = repo.find_all(request).await.unwrap();

        assert_eq!(ids(&page), [4, 2, 3, 1]);
    }

    #[tokio::test]
    async fn missing_descriptions_sort_last() {
        let repo = InMemorySpaceEventRepository::new();
        repo.save(SpaceEventDraft::new("a", day(1), SpaceEventType::Launch))
            .await
            .unwrap();
        repo.save(SpaceEventDraft::new("b", day(1), SpaceEventType::Launch).with_description("z"))
            .await
            .unwrap();

        let page = repo
            .find_all(PageRequest::default().with_sort(SortOrder::asc("description")))
            .await
            .unwrap();

        assert_eq!(ids(&page), [2, 1]);
    }

    #[tokio::test]
    async fn unknown_sort_property_is_rejected() {
        let repo = InMemorySpaceEventRepository::new();

        let result = repo
            .find_all(PageRequest::default().with_sort(SortOrder::asc("kind")))
            .await;

        assert!(matches!(result, Err(SpaceEventError::InvalidSort(p)) if p == "kind"));
    }

    #[tokio::test]
    async fn unknown_id_is_inserted_and_delete_is_idempotent() {
        let repo = InMemorySpaceEventRepository::new();

        let saved = repo
            .save(SpaceEventDraft::new("x", day(1), SpaceEventType::Launch).with_id(50))
            .await
            .unwrap();
        assert_eq!(saved.id, 1);

        repo.delete_by_id(1).await.unwrap();
        repo.delete_by_id(1).await.unwrap();
        assert_eq!(repo.find_by_id(1).await.unwrap(), None);
    }
}
