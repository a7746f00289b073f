/*!
 * Message access API.
 *
 * The service validates input, delegates persistence to the repository
 * and maps every storage failure to `MessageError::StoreUnavailable`,
 * so callers only ever see the public error taxonomy.
 */

use log::{debug, info};

use crate::database::models::{MessageRecord, MessageStatus, MessageSummary, NewMessage};
use crate::database::MessageRepository;
use crate::errors::{MessageError, MessageResult, StoreOperation};
use crate::language_utils;
use crate::search::{SearchExecutor, SearchRequest, SearchResult};

/// Entry point for creating, reading and searching messages
#[derive(Clone)]
pub struct MessageService {
    repository: MessageRepository,
    search: SearchExecutor<MessageRepository>,
}

impl MessageService {
    pub fn new(repository: MessageRepository) -> Self {
        Self {
            search: SearchExecutor::new(repository.clone()),
            repository,
        }
    }

    /// Store a new message
    ///
    /// The body must not be blank and every translation key must be a
    /// lowercase ISO 639-1 code. Missing translations are stored as `{}`.
    pub async fn create_message(&self, new: NewMessage) -> MessageResult<MessageRecord> {
        if new.message.trim().is_empty() {
            return Err(MessageError::invalid("message", "must not be empty"));
        }

        if let Some(translations) = &new.translations {
            for key in translations.keys() {
                language_utils::validate_translation_key(key)
                    .map_err(|e| MessageError::invalid("translations", e.to_string()))?;
            }
        }

        let record = self
            .repository
            .insert_message(&new)
            .await
            .map_err(|e| MessageError::store(StoreOperation::Insert, e))?;

        info!(
            "Created message {} ({}, {} translation(s))",
            record.id,
            record.status,
            record.translations.len()
        );

        Ok(record)
    }

    /// Fetch a message without its translations
    pub async fn get_message(&self, id: i64) -> MessageResult<MessageSummary> {
        self.find(id).await.map(MessageSummary::from)
    }

    /// Fetch one translation of a message
    ///
    /// The message is looked up first. Any language the message has no
    /// non-empty translation for, well-formed code or not, is `NotFound`.
    pub async fn get_translation(&self, id: i64, language: &str) -> MessageResult<String> {
        let record = self.find(id).await?;
        let language = language_utils::normalize_code(language);

        match record.translations.get(&language) {
            Some(text) if !text.is_empty() => Ok(text.clone()),
            _ => {
                let name = language_utils::get_language_name(&language).unwrap_or_else(|_| language.clone());
                debug!("Message {} has no {} translation", id, name);
                Err(MessageError::NotFound(format!(
                    "translation for language {} of message {}",
                    language, id
                )))
            }
        }
    }

    /// Change a message's status; `deleted` soft-deletes it
    pub async fn set_status(&self, id: i64, status: MessageStatus) -> MessageResult<MessageRecord> {
        let record = self
            .repository
            .update_status(id, status)
            .await
            .map_err(|e| MessageError::store(StoreOperation::Update, e))?
            .ok_or_else(|| not_found(id))?;

        info!("Message {} is now {}", id, status);
        Ok(record)
    }

    /// Search messages with filters, ordering and pagination
    pub async fn search_messages(&self, request: &SearchRequest) -> MessageResult<SearchResult> {
        self.search.search(request).await
    }

    async fn find(&self, id: i64) -> MessageResult<MessageRecord> {
        self.repository
            .get_message(id)
            .await
            .map_err(|e| MessageError::store(StoreOperation::Lookup, e))?
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: i64) -> MessageError {
    MessageError::NotFound(format!("message with id {}", id))
}
