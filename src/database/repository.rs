/*!
 * Repository layer for database operations.
 *
 * This module provides a high-level API over the `messages` table,
 * abstracting away the SQL details and providing type-safe access.
 * It is also the SQLite implementation of `MessageStore`.
 */

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use rusqlite::types::Type;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

use super::connection::DatabaseConnection;
use super::filter::{render_filter, render_order};
use super::models::{now_timestamp, MessageRecord, MessageStatus, NewMessage, Translations};
use crate::search::{MessageStore, Predicate, QueryPlan};

const MESSAGE_COLUMNS: &str = "id, message, status, translations, created_at, updated_at";

/// Repository for message persistence
#[derive(Clone)]
pub struct MessageRepository {
    /// Database connection
    db: DatabaseConnection,
}

impl MessageRepository {
    /// Create a new repository with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a repository with an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        let db = DatabaseConnection::new_in_memory()?;
        Ok(Self::new(db))
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Insert a message and return the stored record
    ///
    /// The input is expected to be validated already; missing status and
    /// translations fall back to `pending` and an empty map.
    pub async fn insert_message(&self, new: &NewMessage) -> Result<MessageRecord> {
        let message = new.message.clone();
        let status = new.status.unwrap_or_default();
        let translations = new.translations.clone().unwrap_or_default();

        self.db
            .execute_async(move |conn| {
                let now = now_timestamp();
                let translations_json = serde_json::to_string(&translations)
                    .context("Failed to serialize translations")?;

                conn.execute(
                    r#"
                    INSERT INTO messages (message, status, translations, created_at, updated_at)
                    VALUES (?1, ?2, ?3, ?4, ?5)
                    "#,
                    params![message, status.as_str(), translations_json, now, now],
                )?;

                let id = conn.last_insert_rowid();
                debug!("Inserted message {}", id);

                Ok(MessageRecord {
                    id,
                    message,
                    status,
                    translations,
                    created_at: now.clone(),
                    updated_at: now,
                })
            })
            .await
    }

    /// Change a message's status, refreshing `updated_at`
    ///
    /// Returns `None` when no message has this id.
    pub async fn update_status(&self, id: i64, status: MessageStatus) -> Result<Option<MessageRecord>> {
        self.db
            .transaction_async(move |tx| {
                let changed = tx.execute(
                    "UPDATE messages SET status = ?1, updated_at = ?2 WHERE id = ?3",
                    params![status.as_str(), now_timestamp(), id],
                )?;

                if changed == 0 {
                    return Ok(None);
                }

                Self::get_message_sync(tx, id)
            })
            .await
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Get a message by ID
    pub async fn get_message(&self, id: i64) -> Result<Option<MessageRecord>> {
        self.db
            .execute_async(move |conn| Self::get_message_sync(conn, id))
            .await
    }

    /// Get a message by ID (synchronous version for use within transactions)
    fn get_message_sync(conn: &Connection, id: i64) -> Result<Option<MessageRecord>> {
        let sql = format!("SELECT {} FROM messages WHERE id = ?1", MESSAGE_COLUMNS);
        let record = conn
            .query_row(&sql, [id], parse_message_row)
            .optional()
            .with_context(|| format!("Failed to read message {}", id))?;

        Ok(record)
    }

    /// Matching messages for one page of a plan
    pub async fn fetch_page(&self, plan: &QueryPlan) -> Result<Vec<MessageRecord>> {
        let filter = render_filter(&plan.predicates);
        let sql = format!(
            "SELECT {} FROM messages{}{} LIMIT ? OFFSET ?",
            MESSAGE_COLUMNS,
            filter.clause,
            render_order(plan)
        );

        let mut params = filter.params;
        params.push((plan.limit as i64).into());
        params.push((plan.offset as i64).into());

        debug!("Search page query: {}", sql);

        self.db
            .execute_async(move |conn| {
                let mut stmt = conn.prepare(&sql)?;
                let rows = stmt
                    .query_map(params_from_iter(params), parse_message_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()
                    .context("Failed to read message rows")?;
                Ok(rows)
            })
            .await
    }

    /// Count the messages matching the predicates
    pub async fn count_matching(&self, predicates: &[Predicate]) -> Result<u64> {
        let filter = render_filter(predicates);
        let sql = format!("SELECT COUNT(*) FROM messages{}", filter.clause);

        debug!("Search count query: {}", sql);

        self.db
            .execute_async(move |conn| {
                let total: i64 =
                    conn.query_row(&sql, params_from_iter(filter.params), |row| row.get(0))?;
                Ok(total as u64)
            })
            .await
    }
}

#[async_trait]
impl MessageStore for MessageRepository {
    async fn fetch_page(&self, plan: &QueryPlan) -> Result<Vec<MessageRecord>> {
        MessageRepository::fetch_page(self, plan).await
    }

    async fn count_matching(&self, predicates: &[Predicate]) -> Result<u64> {
        MessageRepository::count_matching(self, predicates).await
    }
}

/// Map a `SELECT MESSAGE_COLUMNS` row to a record
fn parse_message_row(row: &Row) -> rusqlite::Result<MessageRecord> {
    let status: String = row.get(2)?;
    let status = status
        .parse::<MessageStatus>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, e.into()))?;

    let translations: String = row.get(3)?;
    let translations: Translations = serde_json::from_str(&translations)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    Ok(MessageRecord {
        id: row.get(0)?,
        message: row.get(1)?,
        status,
        translations,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}
