//! # fleamarket-database
//!
//! PostgreSQL connection management plus the account and listing stores.
//! Each store is a trait with a PostgreSQL implementation and an in-memory
//! one; the server picks between them from `database.backend`.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;

#[cfg(test)]
pub(crate) mod test_support;
