#[cfg(feature = "sea_orm_resource")]
pub use sea_orm_resource::SeaOrmResource;

/// Routing and documentation metadata of a REST resource.
///
/// Usually derived on a SeaORM model with `#[derive(SeaOrmResource)]`.
///
/// ```ignore
/// #[derive(DeriveEntityModel, SeaOrmResource)]
/// #[sea_orm(table_name = "space_event")]
/// pub struct Model { /* ... */ }
///
/// assert_eq!(Model::URL, "/space-events");
/// assert_eq!(Model::ENTITY_NAME, "spaceEvent");
/// ```
pub trait ApiResource {
    /// Path of the collection, relative to the API prefix.
    const URL: &'static str;
    /// `URL` followed by an `{id}` segment, in axum route syntax.
    const URL_WITH_ID: &'static str;
    /// Backing table name.
    const COLLECTION: &'static str;
    /// OpenAPI tag.
    const TAG: &'static str;
    /// Name used in alert headers and error details, e.g. `spaceEvent`.
    const ENTITY_NAME: &'static str;
}
