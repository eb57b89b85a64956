//! Process-local account store.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use fleamarket_core::error::AppError;
use fleamarket_core::result::AppResult;
use fleamarket_core::types::UserId;
use fleamarket_entity::user::{CreateUser, User};

use super::UserStore;

/// Account store held in concurrent maps. Contents are lost on restart.
#[derive(Debug)]
pub struct MemoryUserStore {
    by_id: DashMap<UserId, User>,
    by_email: DashMap<String, UserId>,
    next_id: AtomicI64,
}

impl MemoryUserStore {
    /// Create an empty store; the first account gets id 1.
    pub fn new() -> Self {
        Self {
            by_id: DashMap::new(),
            by_email: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored accounts.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether no account has been stored.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn exists(&self, email: &str) -> AppResult<bool> {
        Ok(self.by_email.contains_key(email))
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        // The email entry stays locked until the row is visible by id.
        match self.by_email.entry(data.email.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict("Email already in use")),
            Entry::Vacant(slot) => {
                let now = Utc::now();
                let user = User {
                    id: UserId(self.next_id.fetch_add(1, Ordering::SeqCst)),
                    email: data.email.clone(),
                    password_hash: data.password_hash.clone(),
                    created_at: now,
                    updated_at: now,
                };
                self.by_id.insert(user.id, user.clone());
                slot.insert(user.id);
                Ok(user)
            }
        }
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let Some(id) = self.by_email.get(email).map(|entry| *entry.value()) else {
            return Ok(None);
        };
        Ok(self.by_id.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.by_id.get(&id).map(|entry| entry.value().clone()))
    }
}
