//! Auth handlers: signup, login, me.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};

use fleamarket_entity::user::User;

use crate::dto::request::{LoginRequest, SignupRequest};
use crate::dto::response::{ApiResponse, LoginResponse, UserResponse};
use crate::error::ApiResult;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /auth/signup
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SignupRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<UserResponse>>)> {
    let user = state.auth_service.signup(&req.email, &req.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(UserResponse::from(user))),
    ))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<ApiResponse<LoginResponse>>> {
    let issued = state.auth_service.login(&req.email, &req.password).await?;
    Ok(Json(ApiResponse::ok(LoginResponse::from(issued))))
}

/// GET /auth/me
pub async fn me(Extension(user): Extension<User>) -> Json<ApiResponse<UserResponse>> {
    Json(ApiResponse::ok(UserResponse::from(user)))
}
