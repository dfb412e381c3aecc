//! Generic SeaORM repository.
//!
//! Each entity adapter owns a `BaseRepository<Entity>` and maps its models to
//! domain types. The base repository only knows about SeaORM.

use std::marker::PhantomData;
use std::str::FromStr;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    Iterable, Order, PaginatorTrait, PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder, Select,
};

use crate::common::DatabaseError;
use crate::pagination::{MAX_PAGE_INDEX, Page, PageRequest};

/// Resolves API sort properties to entity columns.
///
/// The default accepts a column's field name in snake_case or camelCase.
/// Entities whose API names differ from their field names override it.
pub trait SortableEntity: EntityTrait {
    fn sort_column(property: &str) -> Option<Self::Column> {
        <Self::Column as FromStr>::from_str(property).ok()
    }
}

#[derive(Debug)]
pub struct BaseRepository<E: EntityTrait> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E: EntityTrait> Clone for BaseRepository<E> {
    fn clone(&self) -> Self {
        Self::new(self.db.clone())
    }
}

impl<E: EntityTrait> BaseRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub async fn insert<A>(&self, model: A) -> Result<E::Model, DatabaseError>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
        E::Model: IntoActiveModel<A>,
    {
        Ok(model.insert(&self.db).await?)
    }

    /// Fails with `DbErr::RecordNotUpdated` when no row matches the key.
    pub async fn update<A>(&self, model: A) -> Result<E::Model, DatabaseError>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
        E::Model: IntoActiveModel<A>,
    {
        Ok(model.update(&self.db).await?)
    }

    pub async fn find_by_id<K>(&self, id: K) -> Result<Option<E::Model>, DatabaseError>
    where
        K: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        Ok(E::find_by_id(id).one(&self.db).await?)
    }

    /// Returns the number of deleted rows.
    pub async fn delete_by_id<K>(&self, id: K) -> Result<u64, DatabaseError>
    where
        K: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        let result = E::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }

    pub async fn count(&self) -> Result<u64, DatabaseError>
    where
        E::Model: Send + Sync,
    {
        Ok(E::find().count(&self.db).await?)
    }

    pub async fn find_page(&self, request: &PageRequest) -> Result<Page<E::Model>, DatabaseError>
    where
        E: SortableEntity,
        E::Model: Send + Sync,
    {
        let select = Self::ordered_select(request)?;
        let total = self.count().await?;

        // Pages past the end never reach the database.
        let page = request.page.min(MAX_PAGE_INDEX);
        let items = if page.saturating_mul(request.size) >= total {
            Vec::new()
        } else {
            select.paginate(&self.db, request.size).fetch_page(page).await?
        };

        Ok(Page::new(items, total, request))
    }

    /// Requested orders first, then the primary key ascending so pages are stable.
    pub fn ordered_select(request: &PageRequest) -> Result<Select<E>, DatabaseError>
    where
        E: SortableEntity,
    {
        let mut select = E::find();

        for order in &request.sort {
            let column = E::sort_column(&order.property)
                .ok_or_else(|| DatabaseError::InvalidSortProperty(order.property.clone()))?;
            select = select.order_by(column, Order::from(order.direction));
        }

        for key in E::PrimaryKey::iter() {
            select = select.order_by(key.into_column(), Order::Asc);
        }

        Ok(select)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::SortOrder;
    use sea_orm::{
        DatabaseBackend, DbErr, MockDatabase, MockExecResult, QueryTrait, Set, Value,
    };
    use std::collections::BTreeMap;

    mod sample {
        use sea_orm::entity::prelude::*;

        #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
        #[sea_orm(table_name = "sample")]
        pub struct Model {
            #[sea_orm(primary_key)]
            pub id: i64,
            pub label: String,
            pub display_order: i32,
        }

        #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
        pub enum Relation {}

        impl ActiveModelBehavior for ActiveModel {}

        impl crate::repository::SortableEntity for Entity {}
    }

    fn model(id: i64, label: &str) -> sample::Model {
        sample::Model {
            id,
            label: label.to_string(),
            display_order: 0,
        }
    }

    fn sql(request: &PageRequest) -> String {
        BaseRepository::<sample::Entity>::ordered_select(request)
            .unwrap()
            .build(DatabaseBackend::Postgres)
            .to_string()
    }

    #[test]
    fn default_order_is_primary_key() {
        let sql = sql(&PageRequest::default());
        assert!(sql.ends_with(r#"ORDER BY "sample"."id" ASC"#), "{sql}");
    }

    #[test]
    fn requested_order_precedes_the_key_tie_break() {
        let request = PageRequest::default().with_sort(SortOrder::desc("label"));
        let sql = sql(&request);
        assert!(
            sql.ends_with(r#"ORDER BY "sample"."label" DESC, "sample"."id" ASC"#),
            "{sql}"
        );
    }

    #[test]
    fn camel_case_properties_resolve() {
        let request = PageRequest::default().with_sort(SortOrder::asc("displayOrder"));
        assert!(sql(&request).contains(r#""sample"."display_order" ASC"#));
    }

    #[test]
    fn unknown_property_is_rejected() {
        let request = PageRequest::default().with_sort(SortOrder::asc("nope"));
        let err = BaseRepository::<sample::Entity>::ordered_select(&request).unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidSortProperty(p) if p == "nope"));
    }

    #[tokio::test]
    async fn find_page_counts_then_fetches() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![BTreeMap::from([(
                "num_items",
                Value::BigInt(Some(3)),
            )])]])
            .append_query_results([vec![model(3, "c")]])
            .into_connection();
        let repo = BaseRepository::<sample::Entity>::new(db);

        let page = repo.find_page(&PageRequest::new(1, 2)).await.unwrap();

        assert_eq!(page.total, 3);
        assert_eq!(page.items, vec![model(3, "c")]);
        assert_eq!(page.total_pages(), 2);
    }

    #[tokio::test]
    async fn pages_past_the_end_only_count() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![BTreeMap::from([(
                "num_items",
                Value::BigInt(Some(3)),
            )])]])
            .into_connection();
        let repo = BaseRepository::<sample::Entity>::new(db);

        let page = repo
            .find_page(&PageRequest::new(u64::MAX, 20))
            .await
            .unwrap();

        assert_eq!(page.total, 3);
        assert!(page.items.is_empty());
        assert!(!page.has_next());
    }

    #[tokio::test]
    async fn insert_and_find_round_trip_through_the_connection() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "a")]])
            .append_query_results([vec![model(1, "a")]])
            .into_connection();
        let repo = BaseRepository::<sample::Entity>::new(db);

        let inserted = repo
            .insert(sample::ActiveModel {
                label: Set("a".to_string()),
                display_order: Set(0),
                ..Default::default()
            })
            .await
            .unwrap();
        let found = repo.find_by_id(inserted.id).await.unwrap();

        assert_eq!(found, Some(model(1, "a")));
    }

    #[tokio::test]
    async fn delete_reports_affected_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let repo = BaseRepository::<sample::Entity>::new(db);

        assert_eq!(repo.delete_by_id(1).await.unwrap(), 1);
        assert_eq!(repo.delete_by_id(1).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn update_of_a_missing_row_surfaces_record_not_updated() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<sample::Model>::new()])
            .into_connection();
        let repo = BaseRepository::<sample::Entity>::new(db);

        let err = repo
            .update(sample::ActiveModel {
                id: Set(42),
                label: Set("x".to_string()),
                display_order: Set(0),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DatabaseError::Postgres(DbErr::RecordNotUpdated)));
    }
}
