//! Bearer-token authorization gate for protected routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use axum_extra::typed_header::TypedHeaderRejection;
use tracing::debug;

use fleamarket_core::error::AppError;
use fleamarket_service::context::RequestContext;

use crate::error::ApiResult;
use crate::state::AppState;

/// Rejects the request with 401 unless it carries a valid bearer token.
///
/// On success the acting account is stored in the request extensions as a
/// [`RequestContext`] (read by the `AuthUser` extractor) and as the loaded
/// `User`.
pub async fn require_auth(
    State(state): State<AppState>,
    bearer: Result<TypedHeader<Authorization<Bearer>>, TypedHeaderRejection>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let TypedHeader(Authorization(bearer)) = bearer.map_err(|rejection| {
        debug!(reason = ?rejection.reason(), "Authorization header missing or malformed");
        AppError::authentication("Missing or malformed bearer token")
    })?;

    let user = state.auth_service.resolve_from_token(bearer.token()).await?;

    request
        .extensions_mut()
        .insert(RequestContext::from(&user));
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
