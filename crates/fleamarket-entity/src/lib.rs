//! # fleamarket-entity
//!
//! Domain entity models for Fleamarket. Every struct in this crate
//! represents a database table row or the input used to create or change
//! one. Row types derive `sqlx::FromRow`.

pub mod item;
pub mod user;
