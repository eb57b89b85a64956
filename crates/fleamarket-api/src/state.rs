//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use fleamarket_auth::AuthService;
use fleamarket_core::config::AppConfig;
use fleamarket_core::result::AppResult;
use fleamarket_database::DatabasePool;
use fleamarket_database::repositories::{ItemStore, UserStore};
use fleamarket_service::ItemService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Immutable after
/// startup; all fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Signup, login, and token resolution
    pub auth_service: Arc<AuthService>,
    /// Owner-scoped listing operations
    pub item_service: Arc<ItemService>,
    /// Connection pool, absent on the in-memory backend
    pub database: Option<DatabasePool>,
}

impl AppState {
    /// Wire the services over the given stores.
    ///
    /// Fails when the auth configuration is unusable (missing secret,
    /// invalid hash parameters).
    pub fn new(
        config: AppConfig,
        users: Arc<dyn UserStore>,
        items: Arc<dyn ItemStore>,
    ) -> AppResult<Self> {
        let auth_service = AuthService::new(&config.auth, users)?;

        Ok(Self {
            config: Arc::new(config),
            auth_service: Arc::new(auth_service),
            item_service: Arc::new(ItemService::new(items)),
            database: None,
        })
    }

    /// Attach the pool backing the stores so `/health` can probe it.
    pub fn with_database(mut self, pool: DatabasePool) -> Self {
        self.database = Some(pool);
        self
    }
}
