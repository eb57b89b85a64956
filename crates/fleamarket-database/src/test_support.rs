//! Shared fixtures for the PostgreSQL store tests.
//!
//! These tests need a live server. They run only when `DATABASE_URL` is set
//! and return early otherwise.

use chrono::Utc;

use fleamarket_core::config::DatabaseConfig;
use fleamarket_core::types::UserId;
use fleamarket_entity::user::CreateUser;

use crate::connection::DatabasePool;
use crate::migration::run_migrations;
use crate::repositories::{UserRepository, UserStore};

/// Connected and migrated pool, or `None` when no database is configured.
pub(crate) async fn test_pool() -> Option<DatabasePool> {
    let url = std::env::var("DATABASE_URL").ok()?;
    let config = DatabaseConfig {
        url,
        max_connections: 2,
        ..Default::default()
    };
    let pool = DatabasePool::connect(&config).await.expect("connect");
    run_migrations(pool.pool()).await.expect("migrate");
    Some(pool)
}

/// An email no other test run has used.
pub(crate) fn unique_email(tag: &str) -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{tag}-{}-{nanos}@fleamarket.test", std::process::id())
}

/// Insert an account and return its id.
pub(crate) async fn seed_user(pool: &DatabasePool, tag: &str) -> UserId {
    UserRepository::new(pool.pool().clone())
        .create(&CreateUser {
            email: unique_email(tag),
            password_hash: "$argon2id$placeholder".to_string(),
        })
        .await
        .expect("seed user")
        .id
}
