//! Missions Domain
//!
//! CRUD for missions: a name and an optional description.
//!
//! ```text
//! handlers    HTTP endpoints under /api/missions
//! service     identifier rules and validation
//! repository  persistence trait and its in-memory implementation
//! postgres    SeaORM implementation of the repository
//! models      API types
//! entity      SeaORM model of the `mission` table
//! ```
//!
//! ```rust,no_run
//! use domain_missions::{handlers, InMemoryMissionRepository, MissionService};
//!
//! let service = MissionService::new(InMemoryMissionRepository::new());
//! let router: axum::Router = handlers::router(service, "spaceApp");
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use core_proc_macros::ApiResource;
pub use error::{MissionError, MissionResult};
pub use models::{Mission, MissionDraft, MissionPayload};
pub use postgres::PgMissionRepository;
pub use repository::{InMemoryMissionRepository, MissionRepository};
pub use service::MissionService;
