//! Embedded schema migrations.

use sqlx::PgPool;
use tracing::info;

use fleamarket_core::error::{AppError, ErrorKind};
use fleamarket_core::result::AppResult;

/// Apply every pending migration from `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    info!("Running database migrations");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to run migrations", e))?;

    info!("Database migrations completed");
    Ok(())
}
