//! Core type definitions used across the Fleamarket workspace.

pub mod id;

pub use id::*;
