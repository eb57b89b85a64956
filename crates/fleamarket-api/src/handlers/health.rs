//! Liveness and health handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::warn;

use crate::dto::response::{ApiResponse, HealthResponse, MessageResponse};
use crate::state::AppState;

/// GET /ping
pub async fn ping() -> Json<MessageResponse> {
    Json(MessageResponse::new("pong"))
}

/// GET /health
///
/// Answers 503 when the database does not respond.
pub async fn health(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<HealthResponse>>) {
    let (code, status, database) = match &state.database {
        None => (StatusCode::OK, "ok", "memory"),
        Some(pool) => match pool.health_check().await {
            Ok(()) => (StatusCode::OK, "ok", "connected"),
            Err(e) => {
                warn!(error = %e, "Database health check failed");
                (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
            }
        },
    };

    (
        code,
        Json(ApiResponse::ok(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: database.to_string(),
        })),
    )
}
