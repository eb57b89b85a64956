//! Listing CRUD scoped to the acting owner.

use std::sync::Arc;

use tracing::info;

use fleamarket_core::error::AppError;
use fleamarket_core::result::AppResult;
use fleamarket_core::types::ItemId;
use fleamarket_database::repositories::ItemStore;
use fleamarket_entity::item::{CreateItem, Item, UpdateItem};

use crate::context::RequestContext;

const ITEM_NOT_FOUND: &str = "Item not found";

/// Request to create a new listing.
#[derive(Debug, Clone)]
pub struct CreateItemRequest {
    /// Title.
    pub name: String,
    /// Asking price.
    pub price: i64,
    /// Description, possibly empty.
    pub description: String,
}

/// Manages listings on behalf of the acting account.
#[derive(Debug, Clone)]
pub struct ItemService {
    store: Arc<dyn ItemStore>,
}

impl ItemService {
    /// Creates a new item service.
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// Every listing, regardless of owner.
    pub async fn list_items(&self) -> AppResult<Vec<Item>> {
        self.store.find_all().await
    }

    /// One of the caller's listings.
    pub async fn get_item(&self, ctx: &RequestContext, id: ItemId) -> AppResult<Item> {
        self.store
            .find_by_id(id, ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found(ITEM_NOT_FOUND))
    }

    /// Create a listing owned by the caller.
    pub async fn create_item(
        &self,
        ctx: &RequestContext,
        req: CreateItemRequest,
    ) -> AppResult<Item> {
        validate_name(&req.name)?;
        validate_price(req.price)?;

        let item = self
            .store
            .create(&CreateItem {
                name: req.name,
                price: req.price,
                description: req.description,
                user_id: ctx.user_id,
            })
            .await?;

        info!(item_id = %item.id, user_id = %ctx.user_id, "Item created");
        Ok(item)
    }

    /// Apply a partial change to one of the caller's listings.
    ///
    /// An empty change set writes nothing and returns the listing as stored.
    pub async fn update_item(
        &self,
        ctx: &RequestContext,
        id: ItemId,
        changes: UpdateItem,
    ) -> AppResult<Item> {
        if let Some(name) = &changes.name {
            validate_name(name)?;
        }
        if let Some(price) = changes.price {
            validate_price(price)?;
        }
        if changes.is_empty() {
            return self.get_item(ctx, id).await;
        }

        let item = self
            .store
            .update(id, ctx.user_id, &changes)
            .await?
            .ok_or_else(|| AppError::not_found(ITEM_NOT_FOUND))?;

        info!(item_id = %item.id, user_id = %ctx.user_id, "Item updated");
        Ok(item)
    }

    /// Remove one of the caller's listings.
    pub async fn delete_item(&self, ctx: &RequestContext, id: ItemId) -> AppResult<()> {
        if !self.store.delete(id, ctx.user_id).await? {
            return Err(AppError::not_found(ITEM_NOT_FOUND));
        }

        info!(item_id = %id, user_id = %ctx.user_id, "Item deleted");
        Ok(())
    }
}

fn validate_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Item name must not be empty"));
    }
    Ok(())
}

fn validate_price(price: i64) -> AppResult<()> {
    if price < 0 {
        return Err(AppError::validation("Item price must not be negative"));
    }
    Ok(())
}
