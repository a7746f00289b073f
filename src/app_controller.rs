use anyhow::{Context, Result};
use log::debug;
use serde_json::Value;

use crate::app_config::Config;
use crate::database::models::{MessageStatus, NewMessage, Translations};
use crate::database::{DatabaseConnection, MessageRepository};
use crate::message_service::MessageService;
use crate::search::SearchRequest;

// @module: Application controller wiring configuration, store and service

/// A single operation requested from the command line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Create {
        message: String,
        status: Option<MessageStatus>,
        translations: Vec<(String, String)>,
    },
    Get {
        id: i64,
    },
    Translation {
        id: i64,
        language: String,
    },
    SetStatus {
        id: i64,
        status: MessageStatus,
    },
    Search(SearchRequest),
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Message operations backed by the configured store
    service: MessageService,
}

impl Controller {
    /// Create a controller over an in-memory store
    pub fn new_for_test() -> Result<Self> {
        let mut config = Config::default();
        config.database.path = Some(":memory:".to_string());
        Self::with_config(config)
    }

    // @method: Open the configured store and build the service
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;

        let db = DatabaseConnection::from_config(&config.database)?;
        debug!("Message store ready at {}", db.path().display());
        let service = MessageService::new(MessageRepository::new(db));

        Ok(Self { config, service })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one command and return its result as JSON
    pub async fn run(&self, command: Command) -> Result<Value> {
        debug!("Running command: {:?}", command);

        let value = match command {
            Command::Create {
                message,
                status,
                translations,
            } => {
                let translations = if translations.is_empty() {
                    None
                } else {
                    Some(translations.into_iter().collect::<Translations>())
                };
                let record = self
                    .service
                    .create_message(NewMessage {
                        message,
                        status,
                        translations,
                    })
                    .await?;
                serde_json::to_value(record)?
            }
            Command::Get { id } => serde_json::to_value(self.service.get_message(id).await?)?,
            Command::Translation { id, language } => {
                Value::String(self.service.get_translation(id, &language).await?)
            }
            Command::SetStatus { id, status } => {
                serde_json::to_value(self.service.set_status(id, status).await?)?
            }
            Command::Search(request) => {
                serde_json::to_value(self.service.search_messages(&request).await?)?
            }
        };

        Ok(value)
    }
}
