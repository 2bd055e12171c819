//! Closet export import
//!
//! Parses the JSON export produced by the companion web app (and its
//! browser extension) and upserts the records into the local database.
//! Unknown JSON fields are ignored; records missing an id or name are
//! skipped and counted rather than failing the whole import.

use crate::db::Database;
use crate::error::{Error, Result};
use crate::types::{Outfit, WardrobeItem, WearLogEntry};
use serde::Deserialize;
use std::path::Path;

/// A closet export file: the three collections, any of which may be
/// absent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosetExport {
    #[serde(default)]
    pub items: Vec<WardrobeItem>,
    #[serde(default)]
    pub outfits: Vec<Outfit>,
    #[serde(default)]
    pub wear_log: Vec<WearLogEntry>,
}

/// Counts from an import run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportResult {
    pub items_imported: usize,
    pub outfits_imported: usize,
    pub wear_entries_imported: usize,
    /// Records skipped for missing an id or name
    pub skipped: usize,
}

/// Import a closet export file for a user.
pub fn import_file(db: &Database, user_id: &str, path: &Path) -> Result<ImportResult> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| Error::Import(format!("cannot read {}: {}", path.display(), e)))?;
    let export: ClosetExport = serde_json::from_str(&contents)
        .map_err(|e| Error::Import(format!("invalid export file: {}", e)))?;
    import_export(db, user_id, &export)
}

/// Import an already-parsed closet export for a user.
pub fn import_export(db: &Database, user_id: &str, export: &ClosetExport) -> Result<ImportResult> {
    let mut result = ImportResult::default();

    for item in &export.items {
        if item.id.is_empty() || item.name.is_empty() {
            tracing::warn!(id = %item.id, "Skipping item without id or name");
            result.skipped += 1;
            continue;
        }
        db.upsert_item(user_id, item)?;
        result.items_imported += 1;
    }

    for outfit in &export.outfits {
        if outfit.id.is_empty() {
            result.skipped += 1;
            continue;
        }
        db.upsert_outfit(user_id, outfit)?;
        result.outfits_imported += 1;
    }

    for entry in &export.wear_log {
        if entry.id.is_empty() {
            result.skipped += 1;
            continue;
        }
        db.insert_wear_entry(user_id, entry)?;
        result.wear_entries_imported += 1;
    }

    tracing::info!(
        user_id,
        items = result.items_imported,
        outfits = result.outfits_imported,
        wear_entries = result.wear_entries_imported,
        skipped = result.skipped,
        "Import complete"
    );
    Ok(result)
}
