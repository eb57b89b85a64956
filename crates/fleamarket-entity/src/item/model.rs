//! Listing entity model.

use chrono::{DateTime, Utc};
use fleamarket_core::types::{ItemId, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A listing offered by one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Store-assigned identifier.
    pub id: ItemId,
    /// Title shown in listings.
    pub name: String,
    /// Asking price in the smallest currency unit.
    pub price: i64,
    /// Free text; may be empty.
    pub description: String,
    /// Whether the item has been sold.
    pub sold_out: bool,
    /// Owning account.
    pub user_id: UserId,
    /// When the listing was created.
    pub created_at: DateTime<Utc>,
    /// When the listing was last changed.
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Whether `user` owns this listing.
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.user_id == user
    }
}

/// Data required to create a new listing.
#[derive(Debug, Clone)]
pub struct CreateItem {
    /// Title.
    pub name: String,
    /// Asking price.
    pub price: i64,
    /// Description, possibly empty.
    pub description: String,
    /// Owning account.
    pub user_id: UserId,
}

/// Partial listing change. `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateItem {
    /// New title.
    pub name: Option<String>,
    /// New price.
    pub price: Option<i64>,
    /// New description; `Some("")` clears it.
    pub description: Option<String>,
    /// New sold flag.
    pub sold_out: Option<bool>,
}

impl UpdateItem {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.sold_out.is_none()
    }

    /// Apply the present fields to `item`, bumping `updated_at`.
    pub fn apply_to(&self, item: &mut Item, now: DateTime<Utc>) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(sold_out) = self.sold_out {
            item.sold_out = sold_out;
        }
        item.updated_at = now;
    }
}
