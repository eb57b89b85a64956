//! Process-local listing store.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use fleamarket_core::result::AppResult;
use fleamarket_core::types::{ItemId, UserId};
use fleamarket_entity::item::{CreateItem, Item, UpdateItem};

use super::ItemStore;

/// Listing store held in a concurrent map. Contents are lost on restart.
#[derive(Debug)]
pub struct MemoryItemStore {
    items: DashMap<ItemId, Item>,
    next_id: AtomicI64,
}

impl MemoryItemStore {
    /// Create an empty store; the first listing gets id 1.
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored listings.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no listing is stored.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for MemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn create(&self, data: &CreateItem) -> AppResult<Item> {
        let now = Utc::now();
        let item = Item {
            id: ItemId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            name: data.name.clone(),
            price: data.price,
            description: data.description.clone(),
            sold_out: false,
            user_id: data.user_id,
            created_at: now,
            updated_at: now,
        };
        self.items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn find_all(&self) -> AppResult<Vec<Item>> {
        let mut items: Vec<Item> = self.items.iter().map(|e| e.value().clone()).collect();
        items.sort_by_key(|item| item.id);
        Ok(items)
    }

    async fn find_by_id(&self, id: ItemId, owner: UserId) -> AppResult<Option<Item>> {
        Ok(self
            .items
            .get(&id)
            .filter(|entry| entry.is_owned_by(owner))
            .map(|entry| entry.value().clone()))
    }

    async fn update(
        &self,
        id: ItemId,
        owner: UserId,
        changes: &UpdateItem,
    ) -> AppResult<Option<Item>> {
        let Some(mut entry) = self.items.get_mut(&id) else {
            return Ok(None);
        };
        if !entry.is_owned_by(owner) {
            return Ok(None);
        }
        changes.apply_to(entry.value_mut(), Utc::now());
        Ok(Some(entry.value().clone()))
    }

    async fn delete(&self, id: ItemId, owner: UserId) -> AppResult<bool> {
        Ok(self
            .items
            .remove_if(&id, |_, item| item.is_owned_by(owner))
            .is_some())
    }
}
