/*!
 * Database module for persistent message storage.
 *
 * This module provides SQLite-based persistence for:
 * - Messages with their status and translation maps
 * - Filtered, sorted and paginated message reads for search
 */

pub mod connection;
pub mod filter;
pub mod models;
pub mod repository;
pub mod schema;

// Re-export main types
pub use connection::DatabaseConnection;
pub use repository::MessageRepository;
