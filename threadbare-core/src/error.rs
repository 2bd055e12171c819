//! Error types for threadbare-core

use thiserror::Error;

/// Main error type for the threadbare-core library
#[derive(Error, Debug)]
pub enum Error {
    /// Database error
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Closet export import error
    #[error("import error: {0}")]
    Import(String),

    /// Wardrobe item not found
    #[error("item not found: {0}")]
    ItemNotFound(String),
}

/// Result type alias for threadbare-core
pub type Result<T> = std::result::Result<T, Error>;
