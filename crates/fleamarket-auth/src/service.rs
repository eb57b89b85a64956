//! Signup, login, and resolution of the acting account from a token.

use std::sync::Arc;

use tracing::{debug, info, warn};

use fleamarket_core::config::AuthConfig;
use fleamarket_core::error::{AppError, ErrorKind};
use fleamarket_core::result::AppResult;
use fleamarket_database::repositories::UserStore;
use fleamarket_entity::user::{CreateUser, User};

use crate::jwt::decoder::INVALID_TOKEN;
use crate::jwt::{IssuedToken, JwtDecoder, JwtEncoder};
use crate::password::{PasswordHasher, PasswordValidator};

/// Message shared by an unknown email and a wrong password.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Plaintext hashed once at construction so a login for an unknown email
/// still pays for one verification.
const DUMMY_PASSWORD: &str = "fleamarket-unknown-account";

/// Composes the hasher, token codec, and account store.
pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    validator: PasswordValidator,
    encoder: JwtEncoder,
    decoder: JwtDecoder,
    dummy_digest: String,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("users", &self.users)
            .field("hasher", &self.hasher)
            .field("validator", &self.validator)
            .finish()
    }
}

impl AuthService {
    /// Build the service. Fails when the secret is missing or the hash
    /// parameters are invalid.
    pub fn new(config: &AuthConfig, users: Arc<dyn UserStore>) -> AppResult<Self> {
        let hasher = PasswordHasher::new(config)?;
        let dummy_digest = hasher.hash(DUMMY_PASSWORD)?;

        Ok(Self {
            users,
            hasher: Arc::new(hasher),
            validator: PasswordValidator::new(config),
            encoder: JwtEncoder::new(config)?,
            decoder: JwtDecoder::new(config)?,
            dummy_digest,
        })
    }

    /// Register a new account.
    ///
    /// Uniqueness is left to the store: a taken email comes back from the
    /// insert as `Conflict`.
    pub async fn signup(&self, email: &str, password: &str) -> AppResult<User> {
        self.validator.validate(password)?;
        let password_hash = self.hash_password(password).await?;

        let user = self
            .users
            .create(&CreateUser {
                email: email.to_string(),
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, "Account created");
        Ok(user)
    }

    /// Exchange credentials for a session token.
    ///
    /// An unknown email and a wrong password produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<IssuedToken> {
        let user = self.users.find_by_email(email).await?;
        let digest = match &user {
            Some(user) => user.password_hash.clone(),
            None => self.dummy_digest.clone(),
        };
        let matches = self.verify_password(password, digest).await?;

        match user {
            Some(user) if matches => {
                let issued = self.encoder.issue(user.id, &user.email)?;
                info!(user_id = %user.id, "Login successful");
                Ok(issued)
            }
            _ => {
                warn!("Login rejected");
                Err(AppError::authentication(INVALID_CREDENTIALS))
            }
        }
    }

    /// Verify `token` and load the account it names.
    pub async fn resolve_from_token(&self, token: &str) -> AppResult<User> {
        let claims = self.decoder.verify(token)?;

        self.users
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| {
                debug!(user_id = %claims.sub, "Token subject no longer exists");
                AppError::authentication(INVALID_TOKEN)
            })
    }

    async fn hash_password(&self, password: &str) -> AppResult<String> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Password hashing task failed", e))?
    }

    async fn verify_password(&self, password: &str, digest: String) -> AppResult<bool> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &digest))
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Password verification task failed", e)
            })
    }
}
