//! Space Events Domain
//!
//! CRUD for dated launch and landing events with an optional photo.
//!
//! ```text
//! handlers    HTTP endpoints under /api/space-events
//! service     identifier rules and validation
//! repository  persistence trait and its in-memory implementation
//! postgres    SeaORM implementation of the repository
//! models      API types and the LAUNCH / LANDING enum
//! entity      SeaORM model of the `space_event` table
//! ```
//!
//! The photo travels as base64 in JSON and is stored as `bytea`.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use core_proc_macros::ApiResource;
pub use error::{SpaceEventError, SpaceEventResult};
pub use models::{SpaceEvent, SpaceEventDraft, SpaceEventPayload, SpaceEventType};
pub use postgres::PgSpaceEventRepository;
pub use repository::{InMemorySpaceEventRepository, SpaceEventRepository};
pub use service::SpaceEventService;
