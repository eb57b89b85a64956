//! `AuthUser` extractor: the acting account placed on the request by the
//! authorization middleware.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use fleamarket_core::error::AppError;
use fleamarket_service::context::RequestContext;

use crate::error::ApiError;

/// Extracted authenticated user context available in handlers.
///
/// Only resolvable on routes behind `require_auth`; anywhere else it
/// rejects with 401.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::authentication("Authentication required").into())
    }
}
