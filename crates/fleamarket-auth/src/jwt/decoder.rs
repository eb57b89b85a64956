//! Session token verification.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use fleamarket_core::config::AuthConfig;
use fleamarket_core::error::AppError;
use fleamarket_core::result::AppResult;

use super::claims::Claims;

/// Message shared by every rejected token.
pub const INVALID_TOKEN: &str = "Invalid or expired token";

/// Verifies HS256 session tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration. An empty secret is a
    /// configuration error.
    pub fn new(config: &AuthConfig) -> AppResult<Self> {
        if config.jwt_secret.is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must be set"));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Ok(Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        })
    }

    /// Check signature and expiry, returning the claims.
    ///
    /// Every failure is the same authentication error; the reason is only
    /// logged at debug level.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                debug!(reason = ?e.kind(), "Session token rejected");
                AppError::authentication(INVALID_TOKEN)
            })?
            .claims;

        if claims.is_expired() {
            debug!(exp = claims.exp, "Session token rejected at expiry second");
            return Err(AppError::authentication(INVALID_TOKEN));
        }

        Ok(claims)
    }
}
