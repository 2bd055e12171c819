//! Database repository layer
//!
//! Provides query and insert operations for wardrobe items, outfits, and
//! the wear log. All rows are scoped to a user id.
//!
//! List queries return rows in insertion order (rowid), which downstream
//! analytics rely on as the "original collection order" for stable
//! tie-breaking.

use crate::error::{Error, Result};
use crate::types::{ItemStatus, Outfit, WardrobeItem, WearLogEntry};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// SQLite-backed wardrobe store.
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open or create a database at the given path
    pub fn open(path: &PathBuf) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;

        // WAL mode for better concurrency with the importer
        conn.execute_batch(
            "
            PRAGMA foreign_keys = ON;
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            ",
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run migrations on this database
    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        super::schema::run_migrations(&conn)
    }

    // ============================================
    // Wardrobe item operations
    // ============================================

    /// Insert or update a wardrobe item
    pub fn upsert_item(&self, user_id: &str, item: &WardrobeItem) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            r#"
            INSERT INTO wardrobe_items (
                id, user_id, name, brand, category, price, original_price,
                colors, seasons, style, condition, purchase_type,
                purchase_date, times_worn, sustainability, status
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)
            ON CONFLICT(user_id, id) DO UPDATE SET
                name = excluded.name,
                brand = excluded.brand,
                category = excluded.category,
                price = excluded.price,
                original_price = excluded.original_price,
                colors = excluded.colors,
                seasons = excluded.seasons,
                style = excluded.style,
                condition = excluded.condition,
                purchase_type = excluded.purchase_type,
                purchase_date = excluded.purchase_date,
                times_worn = excluded.times_worn,
                sustainability = excluded.sustainability,
                status = excluded.status
            "#,
            params![
                item.id,
                user_id,
                item.name,
                item.brand,
                item.category,
                item.price,
                item.original_price,
                serde_json::to_string(&item.colors)?,
                serde_json::to_string(&item.seasons)?,
                item.style,
                item.condition,
                item.purchase_type,
                item.purchase_date.map(|d| d.format(DATE_FORMAT).to_string()),
                item.times_worn,
                item.sustainability,
                item.status.map(|s| s.as_str()),
            ],
        )?;
        Ok(())
    }

    /// Get one of a user's wardrobe items by ID.
    ///
    /// Item ids are only unique within a user's wardrobe, so lookups are
    /// scoped by user.
    pub fn get_item(&self, user_id: &str, id: &str) -> Result<Option<WardrobeItem>> {
        let conn = self.conn.lock().unwrap();
        conn.query_row(
            "SELECT * FROM wardrobe_items WHERE user_id = ? AND id = ?",
            [user_id, id],
            Self::row_to_item,
        )
        .optional()
        .map_err(Error::from)
    }

    /// List all of a user's items, regardless of status
    pub fn list_items(&self, user_id: &str) -> Result<Vec<WardrobeItem>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt =
            conn.prepare("SELECT * FROM wardrobe_items WHERE user_id = ? ORDER BY rowid")?;
        let items = stmt
            .query_map([user_id], Self::row_to_item)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }

    /// List a user's currently-owned items.
    ///
    /// Legacy rows with no status are treated as owned.
    pub fn list_owned_items(&self, user_id: &str) -> Result<Vec<WardrobeItem>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT * FROM wardrobe_items
             WHERE user_id = ? AND (status = 'owned' OR status IS NULL)
             ORDER BY rowid",
        )?;
        let items = stmt
            .query_map([user_id], Self::row_to_item)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }

    /// Delete one of a user's wardrobe items
    pub fn delete_item(&self, user_id: &str, id: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        let deleted = conn.execute(
            "DELETE FROM wardrobe_items WHERE user_id = ? AND id = ?",
            [user_id, id],
        )?;
        if deleted == 0 {
            return Err(Error::ItemNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Count a user's items
    pub fn item_count(&self, user_id: &str) -> Result<i64> {
        let conn = self.conn.lock().unwrap();
        let count = conn.query_row(
            "SELECT COUNT(*) FROM wardrobe_items WHERE user_id = ?",
            [user_id],
            |r| r.get(0),
        )?;
        Ok(count)
    }

    fn row_to_item(row: &Row) -> rusqlite::Result<WardrobeItem> {
        let colors_str: String = row.get("colors")?;
        let seasons_str: String = row.get("seasons")?;
        let purchase_date_str: Option<String> = row.get("purchase_date")?;
        let status_str: Option<String> = row.get("status")?;

        Ok(WardrobeItem {
            id: row.get("id")?,
            name: row.get("name")?,
            brand: row.get("brand")?,
            category: row.get("category")?,
            price: row.get("price")?,
            original_price: row.get("original_price")?,
            colors: serde_json::from_str(&colors_str).unwrap_or_default(),
            seasons: serde_json::from_str(&seasons_str).unwrap_or_default(),
            style: row.get("style")?,
            condition: row.get("condition")?,
            purchase_type: row.get("purchase_type")?,
            purchase_date: purchase_date_str
                .and_then(|s| NaiveDate::parse_from_str(&s, DATE_FORMAT).ok()),
            times_worn: row.get("times_worn")?,
            sustainability: row.get("sustainability")?,
            status: status_str.and_then(|s| ItemStatus::from_str(&s).ok()),
        })
    }

    // ============================================
    // Outfit operations
    // ============================================

    /// Insert or update an outfit
    pub fn upsert_outfit(&self, user_id: &str, outfit: &Outfit) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            r#"
            INSERT INTO outfits (id, user_id, name, times_worn)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(user_id, id) DO UPDATE SET
                name = excluded.name,
                times_worn = excluded.times_worn
            "#,
            params![outfit.id, user_id, outfit.name, outfit.times_worn],
        )?;
        Ok(())
    }

    /// List all of a user's outfits
    pub fn list_outfits(&self, user_id: &str) -> Result<Vec<Outfit>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, name, times_worn FROM outfits WHERE user_id = ? ORDER BY rowid",
        )?;
        let outfits = stmt
            .query_map([user_id], |row| {
                Ok(Outfit {
                    id: row.get("id")?,
                    name: row.get("name")?,
                    times_worn: row.get("times_worn")?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(outfits)
    }

    // ============================================
    // Wear log operations
    // ============================================

    /// Insert a wear log entry
    pub fn insert_wear_entry(&self, user_id: &str, entry: &WearLogEntry) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            r#"
            INSERT INTO wear_log (id, user_id, item_ids, worn_on, note)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(user_id, id) DO UPDATE SET
                item_ids = excluded.item_ids,
                worn_on = excluded.worn_on,
                note = excluded.note
            "#,
            params![
                entry.id,
                user_id,
                serde_json::to_string(&entry.item_ids)?,
                entry.worn_on.format(DATE_FORMAT).to_string(),
                entry.note,
            ],
        )?;
        Ok(())
    }

    /// List all of a user's wear log entries
    pub fn list_wear_entries(&self, user_id: &str) -> Result<Vec<WearLogEntry>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, item_ids, worn_on, note FROM wear_log WHERE user_id = ? ORDER BY rowid",
        )?;
        let entries = stmt
            .query_map([user_id], |row| {
                let item_ids_str: String = row.get("item_ids")?;
                let worn_on_str: String = row.get("worn_on")?;
                let worn_on =
                    NaiveDate::parse_from_str(&worn_on_str, DATE_FORMAT).map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(
                            2,
                            rusqlite::types::Type::Text,
                            Box::new(e),
                        )
                    })?;
                Ok(WearLogEntry {
                    id: row.get("id")?,
                    item_ids: serde_json::from_str(&item_ids_str).unwrap_or_default(),
                    worn_on,
                    note: row.get("note")?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(entries)
    }
}
