/*!
 * # polymsg
 *
 * A Rust library for storing short text messages together with their
 * translations, and for searching them.
 *
 * ## Features
 *
 * - Messages with a moderation status (`active`, `pending`, `spam`, `deleted`)
 * - Per-message translation maps keyed by ISO 639-1 language codes
 * - Search with a case-insensitive text filter, status filter,
 *   single-field ordering and page/limit pagination
 * - SQLite persistence
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `database`: SQLite message store:
 *   - `database::schema`: Table definitions and schema versioning
 *   - `database::repository`: Typed reads and writes
 *   - `database::filter`: SQL rendering of query plans
 * - `search`: Request validation, query plans and search execution
 * - `message_service`: Create, read, translate and search operations
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod database;
pub mod errors;
pub mod language_utils;
pub mod message_service;
pub mod search;

// Re-export main types for easier usage
pub use app_config::Config;
pub use database::models::{MessageRecord, MessageStatus, MessageSummary, NewMessage, Translations};
pub use errors::{MessageError, MessageResult, StoreOperation};
pub use message_service::MessageService;
pub use search::{PageMeta, QueryPlan, SearchExecutor, SearchRequest, SearchResult};
