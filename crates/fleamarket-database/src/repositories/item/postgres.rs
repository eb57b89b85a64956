//! PostgreSQL listing store.

use async_trait::async_trait;
use sqlx::PgPool;

use fleamarket_core::error::{AppError, ErrorKind};
use fleamarket_core::result::AppResult;
use fleamarket_core::types::{ItemId, UserId};
use fleamarket_entity::item::{CreateItem, Item, UpdateItem};

use super::ItemStore;

const ITEM_COLUMNS: &str =
    "id, name, price, description, sold_out, user_id, created_at, updated_at";

/// Listing store backed by the `items` table.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    /// Create a new item repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemStore for ItemRepository {
    async fn create(&self, data: &CreateItem) -> AppResult<Item> {
        sqlx::query_as::<_, Item>(&format!(
            "INSERT INTO items (name, price, description, user_id) \
             VALUES ($1, $2, $3, $4) RETURNING {ITEM_COLUMNS}"
        ))
        .bind(&data.name)
        .bind(data.price)
        .bind(&data.description)
        .bind(data.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create item", e))
    }

    async fn find_all(&self) -> AppResult<Vec<Item>> {
        sqlx::query_as::<_, Item>(&format!("SELECT {ITEM_COLUMNS} FROM items ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list items", e))
    }

    async fn find_by_id(&self, id: ItemId, owner: UserId) -> AppResult<Option<Item>> {
        sqlx::query_as::<_, Item>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find item", e))
    }

    async fn update(
        &self,
        id: ItemId,
        owner: UserId,
        changes: &UpdateItem,
    ) -> AppResult<Option<Item>> {
        sqlx::query_as::<_, Item>(&format!(
            "UPDATE items SET \
                name = COALESCE($3, name), \
                price = COALESCE($4, price), \
                description = COALESCE($5, description), \
                sold_out = COALESCE($6, sold_out), \
                updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {ITEM_COLUMNS}"
        ))
        .bind(id)
        .bind(owner)
        .bind(changes.name.as_deref())
        .bind(changes.price)
        .bind(changes.description.as_deref())
        .bind(changes.sold_out)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update item", e))
    }

    async fn delete(&self, id: ItemId, owner: UserId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete item", e))?;

        Ok(result.rows_affected() > 0)
    }
}
