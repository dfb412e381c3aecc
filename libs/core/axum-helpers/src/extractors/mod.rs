//! Request extractors that reject with [`AppError`](crate::AppError) bodies.

pub mod id_path;
pub mod pageable;
pub mod validated_json;

pub use id_path::IdPath;
pub use pageable::{PageParams, Pageable};
pub use validated_json::ValidatedJson;
