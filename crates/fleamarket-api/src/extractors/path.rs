//! Typed path parameter extraction.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use fleamarket_core::error::AppError;
use fleamarket_core::types::ItemId;

use crate::error::ApiError;

/// The `{id}` segment of a listing route, parsed as a positive integer.
#[derive(Debug, Clone, Copy)]
pub struct ItemIdPath(pub ItemId);

impl<S> FromRequestParts<S> for ItemIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::validation("Invalid item id"))?;

        Ok(Self(raw.parse::<ItemId>()?))
    }
}
