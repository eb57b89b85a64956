//! # fleamarket-service
//!
//! Business logic for Fleamarket. Services receive their stores at
//! construction time as `Arc<dyn ...>` handles and take a
//! [`RequestContext`] naming the acting account.

pub mod context;
pub mod item;

pub use context::RequestContext;
pub use item::{CreateItemRequest, ItemService};
