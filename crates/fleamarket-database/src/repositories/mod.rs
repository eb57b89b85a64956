//! Account and listing stores.

pub mod item;
pub mod user;

pub use item::{ItemRepository, ItemStore, MemoryItemStore};
pub use user::{MemoryUserStore, UserRepository, UserStore};
