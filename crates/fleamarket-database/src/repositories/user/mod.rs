//! Account Directory: persistence of user accounts.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use fleamarket_core::result::AppResult;
use fleamarket_core::types::UserId;
use fleamarket_entity::user::{CreateUser, User};

pub use memory::MemoryUserStore;
pub use postgres::UserRepository;

/// Storage for user accounts. Email uniqueness is enforced by the store.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Whether an account with this exact email exists.
    async fn exists(&self, email: &str) -> AppResult<bool>;

    /// Insert a new account. A taken email yields a `Conflict` error.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Look up an account by exact email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Look up an account by id.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;
}
