//! Listing CRUD handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use fleamarket_entity::item::Item;

use crate::dto::request::{CreateItemRequest, UpdateItemRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ItemIdPath, ValidatedJson};
use crate::state::AppState;

/// GET /items
pub async fn list_items(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<Vec<Item>>>> {
    let items = state.item_service.list_items().await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// GET /items/{id}
pub async fn get_item(
    State(state): State<AppState>,
    auth: AuthUser,
    ItemIdPath(id): ItemIdPath,
) -> ApiResult<Json<ApiResponse<Item>>> {
    let item = state.item_service.get_item(&auth, id).await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// POST /items
pub async fn create_item(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateItemRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Item>>)> {
    let item = state.item_service.create_item(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(item))))
}

/// PUT /items/{id}
pub async fn update_item(
    State(state): State<AppState>,
    auth: AuthUser,
    ItemIdPath(id): ItemIdPath,
    ValidatedJson(req): ValidatedJson<UpdateItemRequest>,
) -> ApiResult<Json<ApiResponse<Item>>> {
    let item = state
        .item_service
        .update_item(&auth, id, req.into_changes())
        .await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// DELETE /items/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    auth: AuthUser,
    ItemIdPath(id): ItemIdPath,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.item_service.delete_item(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Item deleted"))))
}
