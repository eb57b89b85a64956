//! # fleamarket-auth
//!
//! Credential handling and session establishment for Fleamarket.
//!
//! ## Modules
//!
//! - `password`: Argon2id hashing and the signup password policy
//! - `jwt`: signed session token issuance and verification
//! - `service`: signup, login, and token-to-user resolution

pub mod jwt;
pub mod password;
pub mod service;

pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
pub use service::AuthService;
