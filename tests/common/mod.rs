/*!
 * Common test utilities for the polymsg test suite
 */

#![allow(dead_code)]

use polymsg::database::models::now_timestamp;
use polymsg::database::MessageRepository;
use polymsg::{MessageRecord, MessageService, MessageStatus, NewMessage, Translations};

/// Route library logs through env_logger; safe to call from every test
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a service over a fresh in-memory store
pub fn create_test_service() -> MessageService {
    init_logging();
    let repository = MessageRepository::new_in_memory().expect("Failed to create in-memory store");
    MessageService::new(repository)
}

/// The message used throughout the scenarios
pub fn hello_message() -> NewMessage {
    NewMessage::new("Hello, I'm a message")
        .with_status(MessageStatus::Active)
        .with_translation("fr", "Bonjour, je suis un message")
        .with_translation("es", "Hola, soy un mensaje")
}

/// Creates `count` active messages named "message 01", "message 02", ...
pub async fn seed_numbered(service: &MessageService, count: usize) -> Vec<MessageRecord> {
    let mut records = Vec::with_capacity(count);
    for i in 1..=count {
        let record = service
            .create_message(NewMessage::new(format!("message {:02}", i)).with_status(MessageStatus::Active))
            .await
            .expect("Failed to seed message");
        records.push(record);
    }
    records
}

/// Builds a record without touching any store
pub fn fixture_record(id: i64, message: &str, status: MessageStatus) -> MessageRecord {
    let now = now_timestamp();
    MessageRecord {
        id,
        message: message.to_string(),
        status,
        translations: Translations::new(),
        created_at: now.clone(),
        updated_at: now,
    }
}

/// `count` active fixture records named like `seed_numbered`
pub fn numbered_fixtures(count: usize) -> Vec<MessageRecord> {
    (1..=count)
        .map(|i| fixture_record(i as i64, &format!("message {:02}", i), MessageStatus::Active))
        .collect()
}
