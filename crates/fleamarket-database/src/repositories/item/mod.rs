//! Listing Directory: persistence of listings scoped to their owner.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use fleamarket_core::result::AppResult;
use fleamarket_core::types::{ItemId, UserId};
use fleamarket_entity::item::{CreateItem, Item, UpdateItem};

pub use memory::MemoryItemStore;
pub use postgres::ItemRepository;

/// Storage for listings.
///
/// Every lookup that precedes a change takes the acting user and matches on
/// both id and owner; a listing owned by someone else is reported exactly
/// like a missing one.
#[async_trait]
pub trait ItemStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new listing.
    async fn create(&self, data: &CreateItem) -> AppResult<Item>;

    /// Every listing, ordered by id.
    async fn find_all(&self) -> AppResult<Vec<Item>>;

    /// The listing with `id` if `owner` owns it.
    async fn find_by_id(&self, id: ItemId, owner: UserId) -> AppResult<Option<Item>>;

    /// Apply `changes` to the listing if `owner` owns it.
    async fn update(
        &self,
        id: ItemId,
        owner: UserId,
        changes: &UpdateItem,
    ) -> AppResult<Option<Item>>;

    /// Remove the listing if `owner` owns it. Returns whether a row went away.
    async fn delete(&self, id: ItemId, owner: UserId) -> AppResult<bool>;
}
