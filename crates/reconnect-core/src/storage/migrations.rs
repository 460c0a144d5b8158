//! Database schema migrations for reconnect.
//!
//! Migrations are versioned and applied automatically when opening the database.
//! The `schema_version` table tracks the current migration version.

use rusqlite::{Connection, Result as SqliteResult};

/// Schema version after all migrations have run.
pub const CURRENT_VERSION: i32 = 2;

/// Apply all pending migrations to bring the database to the current schema version.
///
/// # Errors
/// Returns an error if migration fails.
pub fn migrate(conn: &Connection) -> SqliteResult<()> {
    create_schema_version_table(conn)?;

    let current_version = schema_version(conn)?;
    if current_version < 1 {
        migrate_v1(conn)?;
    }
    if current_version < 2 {
        migrate_v2(conn)?;
    }

    Ok(())
}

fn create_schema_version_table(conn: &Connection) -> SqliteResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY
        );",
    )
}

/// Current schema version; 0 for a fresh database.
///
/// # Errors
/// Returns an error if the version table cannot be read.
pub fn schema_version(conn: &Connection) -> SqliteResult<i32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get::<_, i32>(0),
    )
}

fn set_schema_version(conn: &Connection, version: i32) -> SqliteResult<()> {
    conn.execute("DELETE FROM schema_version", [])?;
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// Migration v1: contacts, interactions and the settings row.
fn migrate_v1(conn: &Connection) -> SqliteResult<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(
        "CREATE TABLE IF NOT EXISTS contacts (
            id                TEXT PRIMARY KEY,
            full_name         TEXT NOT NULL,
            relationship      TEXT NOT NULL DEFAULT 'friend',
            phone_number      TEXT NOT NULL,
            email             TEXT,
            frequency_days    INTEGER NOT NULL DEFAULT 30 CHECK (frequency_days >= 1),
            last_contacted_at TEXT,
            priority          INTEGER,
            created_at        TEXT NOT NULL,
            updated_at        TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS interactions (
            id              TEXT PRIMARY KEY,
            contact_id      TEXT NOT NULL,
            kind            TEXT NOT NULL,
            message_preview TEXT,
            notes           TEXT,
            created_at      TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS settings (
            id                 TEXT PRIMARY KEY,
            mode               TEXT NOT NULL,
            count_daily        INTEGER NOT NULL,
            count_weekly       INTEGER NOT NULL,
            default_frequencies TEXT NOT NULL DEFAULT '[]'
        );",
    )?;
    set_schema_version(&tx, 1)?;
    tx.commit()
}

/// Migration v2: indexes for the interaction listings.
fn migrate_v2(conn: &Connection) -> SqliteResult<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_interactions_created_at ON interactions(created_at);
         CREATE INDEX IF NOT EXISTS idx_interactions_contact_created
             ON interactions(contact_id, created_at);",
    )?;
    set_schema_version(&tx, 2)?;
    tx.commit()
}
