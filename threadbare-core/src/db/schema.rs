//! Database schema and migrations
//!
//! Uses SQLite with embedded migrations managed via PRAGMA user_version.

use rusqlite::Connection;

/// Current schema version
pub const SCHEMA_VERSION: i32 = 2;

/// SQL migrations, indexed by version number
const MIGRATIONS: &[&str] = &[
    // Version 1: Initial schema
    r#"
    CREATE TABLE IF NOT EXISTS wardrobe_items (
        id              TEXT NOT NULL,
        user_id         TEXT NOT NULL,
        name            TEXT NOT NULL,
        brand           TEXT,
        category        TEXT,
        price           REAL,
        colors          JSON NOT NULL DEFAULT '[]',
        seasons         JSON NOT NULL DEFAULT '[]',
        style           TEXT,
        condition       TEXT,
        purchase_type   TEXT,
        purchase_date   TEXT,
        times_worn      INTEGER,
        status          TEXT,
        PRIMARY KEY (user_id, id)
    );

    CREATE TABLE IF NOT EXISTS outfits (
        id              TEXT NOT NULL,
        user_id         TEXT NOT NULL,
        name            TEXT,
        times_worn      INTEGER,
        PRIMARY KEY (user_id, id)
    );

    CREATE TABLE IF NOT EXISTS wear_log (
        id              TEXT NOT NULL,
        user_id         TEXT NOT NULL,
        item_ids        JSON NOT NULL DEFAULT '[]',
        worn_on         TEXT NOT NULL,
        note            TEXT,
        PRIMARY KEY (user_id, id)
    );
    "#,
    // Version 2: original price and sustainability fields for the
    // savings and sustainability metrics
    r#"
    ALTER TABLE wardrobe_items ADD COLUMN original_price REAL;
    ALTER TABLE wardrobe_items ADD COLUMN sustainability TEXT;
    "#,
];

/// Run all pending migrations
pub fn run_migrations(conn: &Connection) -> crate::error::Result<()> {
    let current_version: i32 = conn
        .query_row("PRAGMA user_version", [], |r| r.get(0))
        .unwrap_or(0);

    tracing::info!(
        current_version,
        target_version = SCHEMA_VERSION,
        "Checking database migrations"
    );

    for (i, migration) in MIGRATIONS.iter().enumerate() {
        let version = (i + 1) as i32;
        if version > current_version {
            tracing::info!(version, "Running migration");
            conn.execute_batch(migration)?;
            conn.execute(&format!("PRAGMA user_version = {}", version), [])?;
        }
    }

    if current_version < SCHEMA_VERSION {
        tracing::info!(
            from = current_version,
            to = SCHEMA_VERSION,
            "Migrations complete"
        );
    }

    Ok(())
}

/// Get the current schema version from the database
pub fn get_schema_version(conn: &Connection) -> crate::error::Result<i32> {
    let version: i32 = conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        // Run migrations twice - should be idempotent
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();

        let version = get_schema_version(&conn).unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn test_tables_created() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();

        for table in ["wardrobe_items", "outfits", "wear_log"] {
            let exists: i32 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?",
                    [table],
                    |r| r.get(0),
                )
                .unwrap();
            assert_eq!(exists, 1, "Table {} should exist", table);
        }
    }

    #[test]
    fn test_v2_columns_exist() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();

        let columns: Vec<String> = conn
            .prepare("PRAGMA table_info(wardrobe_items)")
            .unwrap()
            .query_map([], |row| row.get::<_, String>(1))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert!(columns.iter().any(|c| c == "original_price"));
        assert!(columns.iter().any(|c| c == "sustainability"));
    }
}
