/*!
 * Database schema definitions.
 *
 * This module contains the SQL schema for the message store and tracks
 * the schema version so older databases are detected on open.
 */

use anyhow::{Context, Result};
use log::{debug, info};
use rusqlite::{Connection, OptionalExtension};

/// Current schema version
pub const SCHEMA_VERSION: i32 = 1;

/// Initialize the database schema
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        info!("Initializing database schema v{}", SCHEMA_VERSION);
        create_all_tables(conn)?;
        set_schema_version(conn, SCHEMA_VERSION)?;
    } else if current_version < SCHEMA_VERSION {
        return Err(anyhow::anyhow!(
            "Database schema v{} is older than v{} and cannot be upgraded in place",
            current_version,
            SCHEMA_VERSION
        ));
    } else if current_version > SCHEMA_VERSION {
        return Err(anyhow::anyhow!(
            "Database schema v{} is newer than v{} supported by this build",
            current_version,
            SCHEMA_VERSION
        ));
    } else {
        debug!("Database schema is up to date (v{})", current_version);
    }

    Ok(())
}

/// Get the current schema version from the database
fn get_schema_version(conn: &Connection) -> Result<i32> {
    let table_exists: bool = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='schema_version'",
            [],
            |row| row.get(0),
        )
        .context("Failed to check schema_version table existence")?;

    if !table_exists {
        return Ok(0);
    }

    let version: Option<i32> = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        })
        .optional()
        .context("Failed to read schema version")?;

    Ok(version.unwrap_or(0))
}

/// Set the schema version in the database
fn set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO schema_version (id, version, updated_at) VALUES (1, ?1, datetime('now'))",
        [version],
    )?;
    Ok(())
}

/// Create all database tables
fn create_all_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            version INTEGER NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;

    // translations holds a JSON object of language code -> text, never a scalar
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS messages (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            message TEXT NOT NULL CHECK (length(trim(message)) > 0),
            status TEXT NOT NULL DEFAULT 'pending'
                CHECK (status IN ('active', 'pending', 'spam', 'deleted')),
            translations TEXT NOT NULL DEFAULT '{}'
                CHECK (json_valid(translations) AND json_type(translations) = 'object'),
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_messages_status ON messages(status);
        CREATE INDEX IF NOT EXISTS idx_messages_created_at ON messages(created_at);
        CREATE INDEX IF NOT EXISTS idx_messages_updated_at ON messages(updated_at);
        "#,
    )?;

    info!("Database schema created successfully");
    Ok(())
}
