//! # threadbare-core
//!
//! Core library for threadbare - a wardrobe analytics engine.
//!
//! This library provides:
//! - Domain types for wardrobe items, outfits, and the wear log
//! - Database storage layer with SQLite
//! - Closet export import
//! - The analytics engine: pure metric calculators, insight rules, and
//!   report assembly
//! - Configuration management and logging infrastructure
//!
//! ## Architecture
//!
//! All I/O happens at the edges: the importer writes records, and a
//! report run performs exactly one fetch of the user's collections. The
//! analytics computation itself is pure and deterministic, with the
//! underutilization reference date passed in explicitly.
//!
//! ## Example
//!
//! ```rust,no_run
//! use threadbare_core::analytics::generate_report;
//! use threadbare_core::{Config, Database};
//!
//! let config = Config::load().expect("failed to load config");
//! let db = Database::open(&config.database_path()).expect("failed to open database");
//! db.migrate().expect("failed to run migrations");
//!
//! let today = chrono::Utc::now().date_naive();
//! let report = generate_report(&db, "user-1", today).expect("failed to compute report");
//! println!("{}", serde_json::to_string_pretty(&report).unwrap());
//! ```

// Re-export commonly used items at the crate root
pub use analytics::{generate_report, AnalyticsInput, WardrobeReport};
pub use config::Config;
pub use db::Database;
pub use error::{Error, Result};
pub use import::{import_file, ClosetExport, ImportResult};
pub use types::*;

// Public modules
pub mod analytics;
pub mod config;
pub mod db;
pub mod error;
pub mod import;
pub mod logging;
pub mod types;
