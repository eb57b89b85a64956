//! Password policy applied at signup.

use fleamarket_core::config::AuthConfig;
use fleamarket_core::error::AppError;
use fleamarket_core::result::AppResult;

/// Checks new passwords against the configured minimum length.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Reject empty passwords and, when configured, short ones.
    pub fn validate(&self, password: &str) -> AppResult<()> {
        if password.is_empty() {
            return Err(AppError::validation("Password is required"));
        }

        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        Ok(())
    }
}
