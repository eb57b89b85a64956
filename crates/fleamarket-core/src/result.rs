//! Convenience result type alias for Fleamarket.

use crate::error::AppError;

/// A specialized `Result` type for Fleamarket operations.
pub type AppResult<T> = Result<T, AppError>;
