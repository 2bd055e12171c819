//! Database layer for threadbare
//!
//! This module provides the storage layer using SQLite with:
//! - Schema migrations
//! - Repository pattern for queries
//! - Per-user scoping of all wardrobe data

pub mod repo;
pub mod schema;

pub use repo::Database;
