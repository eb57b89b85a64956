//! Request context carrying the authenticated account.

use fleamarket_core::types::UserId;
use fleamarket_entity::user::User;

/// Context for the current authenticated request.
///
/// Inserted by the authorization middleware and passed into service methods
/// so every owner-scoped operation knows who is acting.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// The authenticated user's email.
    pub email: String,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: UserId, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
        }
    }
}

impl From<&User> for RequestContext {
    fn from(user: &User) -> Self {
        Self::new(user.id, user.email.clone())
    }
}
