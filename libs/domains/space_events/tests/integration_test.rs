//! Integration tests for the space events domain against PostgreSQL in a
//! testcontainer. They need a Docker daemon.

use chrono::NaiveDate;
use database::{PageRequest, SortOrder};
use domain_space_events::*;
use test_utils::{TestDatabase, TestDataBuilder, assertions::*};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_photo_and_enum_round_trip() {
    let db = TestDatabase::new().await;
    let repo = PgSpaceEventRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("photo_round_trip");
    let photo = builder.bytes(256);

    let created = repo
        .save(
            SpaceEventDraft::new(builder.name("event", "launch"), date(1969, 7, 16), SpaceEventType::Launch)
                .with_description("Saturn V")
                .with_photo(photo.clone(), "image/png"),
        )
        .await
        .unwrap();

    let fetched = assert_some(repo.find_by_id(created.id).await.unwrap(), "created event");
    assert_eq!(fetched.photo, Some(photo));
    assert_eq!(fetched.kind, SpaceEventType::Launch);
    assert_eq!(fetched, created);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_update_replaces_and_delete_is_idempotent() {
    let db = TestDatabase::new().await;
    let repo = PgSpaceEventRepository::new(db.connection());

    let created = repo
        .save(
            SpaceEventDraft::new("Eagle", date(1969, 7, 20), SpaceEventType::Landing)
                .with_photo(vec![1], "image/jpg"),
        )
        .await
        .unwrap();

    let updated = repo
        .save(SpaceEventDraft::new("Eagle has landed", date(1969, 7, 21), SpaceEventType::Landing).with_id(created.id))
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.photo, None);
    assert_eq!(updated.photo_content_type, None);

    repo.delete_by_id(created.id).await.unwrap();
    repo.delete_by_id(created.id).await.unwrap();
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_sort_by_type_and_date() {
    let db = TestDatabase::new().await;
    let repo = PgSpaceEventRepository::new(db.connection());

    for (d, kind) in [
        (date(1969, 7, 20), SpaceEventType::Landing),
        (date(1969, 7, 16), SpaceEventType::Launch),
        (date(1969, 7, 24), SpaceEventType::Landing),
        (date(1968, 12, 21), SpaceEventType::Launch),
    ] {
        repo.save(SpaceEventDraft::new("event", d, kind)).await.unwrap();
    }

    let page = repo
        .find_all(
            PageRequest::new(0, 10)
                .with_sort(SortOrder::asc("type"))
                .with_sort(SortOrder::asc("date")),
        )
        .await
        .unwrap();

    assert_eq!(page.total, 4);
    assert_sorted_by_key(&page.items, |e| (e.kind, e.date), "type then date");
}
