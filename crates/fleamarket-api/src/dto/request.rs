//! Request DTOs with validation.

use serde::{Deserialize, Deserializer};
use validator::Validate;

use fleamarket_entity::item::UpdateItem;
use fleamarket_service::CreateItemRequest as SvcCreateItem;

/// Signup request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    /// Login email.
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "is required"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(length(min = 1, message = "is required"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "is required"))]
    pub password: String,
}

/// Create listing request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateItemRequest {
    /// Title.
    #[validate(length(min = 1, max = 255, message = "must be 1 to 255 characters"))]
    pub name: String,
    /// Asking price.
    #[validate(range(min = 0, message = "must not be negative"))]
    pub price: i64,
    /// Description; omitted means empty.
    #[serde(default)]
    pub description: String,
}

impl From<CreateItemRequest> for SvcCreateItem {
    fn from(req: CreateItemRequest) -> Self {
        Self {
            name: req.name,
            price: req.price,
            description: req.description,
        }
    }
}

/// Partial listing update. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    /// New title.
    #[validate(length(min = 1, max = 255, message = "must be 1 to 255 characters"))]
    pub name: Option<String>,
    /// New price.
    #[validate(range(min = 0, message = "must not be negative"))]
    pub price: Option<i64>,
    /// `None` when omitted, `Some(None)` for an explicit `null`.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<Option<String>>,
    /// New sold flag.
    pub sold_out: Option<bool>,
}

impl UpdateItemRequest {
    /// Convert to the store-level change set; `null` clears the description.
    pub fn into_changes(self) -> UpdateItem {
        UpdateItem {
            name: self.name,
            price: self.price,
            description: self.description.map(Option::unwrap_or_default),
            sold_out: self.sold_out,
        }
    }
}

/// Wraps any present value, including `null`, in `Some`.
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
