//! `?page=&size=&sort=` query extraction.
//!
//! Parsing is lenient: a missing or invalid `page` means the first page, a
//! missing, zero or invalid `size` means the default size. `sort` may repeat.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use database::pagination::{DEFAULT_PAGE_SIZE, PageRequest, SortOrder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pageable(pub PageRequest);

impl Pageable {
    pub fn from_pairs<K, V>(pairs: &[(K, V)]) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut page = 0;
        let mut size = DEFAULT_PAGE_SIZE;
        let mut sort = Vec::new();

        for (key, value) in pairs {
            let value = value.as_ref().trim();
            match key.as_ref() {
                "page" => page = value.parse().unwrap_or(0),
                "size" => size = value.parse().unwrap_or(DEFAULT_PAGE_SIZE),
                "sort" => sort.extend(SortOrder::parse_all(value)),
                _ => {}
            }
        }

        let mut request = PageRequest::new(page, size);
        request.sort = sort;
        Pageable(request)
    }
}

impl<S> FromRequestParts<S> for Pageable
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        Ok(Self::from_pairs(&pairs))
    }
}

/// OpenAPI description of the pagination query.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Zero-based page index (default 0)
    pub page: Option<u64>,
    /// Page size (default 20, max 2000)
    pub size: Option<u64>,
    /// `property[,property...][,asc|desc]`, repeatable
    pub sort: Option<Vec<String>>,
}
