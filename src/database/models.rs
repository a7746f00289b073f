/*!
 * Database entity models.
 *
 * These structures map directly to the `messages` table and provide
 * type-safe access to persisted data.
 */

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Language code to translated text
pub type Translations = BTreeMap<String, String>;

/// Message status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    /// Visible message
    Active,
    /// Awaiting moderation
    #[default]
    Pending,
    /// Flagged as spam
    Spam,
    /// Soft-deleted; the row is kept
    Deleted,
}

impl MessageStatus {
    /// Every status, in declaration order
    pub const ALL: [MessageStatus; 4] = [
        MessageStatus::Active,
        MessageStatus::Pending,
        MessageStatus::Spam,
        MessageStatus::Deleted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageStatus::Active => "active",
            MessageStatus::Pending => "pending",
            MessageStatus::Spam => "spam",
            MessageStatus::Deleted => "deleted",
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MessageStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(MessageStatus::Active),
            "pending" => Ok(MessageStatus::Pending),
            "spam" => Ok(MessageStatus::Spam),
            "deleted" => Ok(MessageStatus::Deleted),
            _ => Err(anyhow::anyhow!("Invalid message status: {}", s)),
        }
    }
}

/// Current time in the stored timestamp format
///
/// Fixed microsecond precision with a `Z` suffix keeps lexical order
/// identical to chronological order.
pub fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Stored message record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    /// Database ID
    pub id: i64,
    /// Message body
    pub message: String,
    /// Moderation status
    pub status: MessageStatus,
    /// Translations keyed by ISO 639-1 code; empty when none were given
    pub translations: Translations,
    /// Creation timestamp (RFC 3339, UTC)
    pub created_at: String,
    /// Last update timestamp (RFC 3339, UTC)
    pub updated_at: String,
}

impl MessageRecord {
    /// Drop the translations for single-record responses
    pub fn summary(&self) -> MessageSummary {
        MessageSummary {
            id: self.id,
            message: self.message.clone(),
            status: self.status,
            created_at: self.created_at.clone(),
            updated_at: self.updated_at.clone(),
        }
    }
}

/// A message without its translations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSummary {
    pub id: i64,
    pub message: String,
    pub status: MessageStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<MessageRecord> for MessageSummary {
    fn from(record: MessageRecord) -> Self {
        Self {
            id: record.id,
            message: record.message,
            status: record.status,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Input for creating a message
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewMessage {
    /// Message body (must not be blank)
    pub message: String,
    /// Initial status; `pending` when absent
    #[serde(default)]
    pub status: Option<MessageStatus>,
    /// Initial translations; stored as an empty map when absent
    #[serde(default)]
    pub translations: Option<Translations>,
}

impl NewMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            translations: None,
        }
    }

    pub fn with_status(mut self, status: MessageStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_translation(mut self, language: impl Into<String>, text: impl Into<String>) -> Self {
        self.translations
            .get_or_insert_with(Translations::new)
            .insert(language.into(), text.into());
        self
    }
}
