/*!
 * Message search.
 *
 * - `request`: raw, optional search parameters as callers send them
 * - `plan`: validation and normalization into a `QueryPlan`
 * - `executor`: runs a plan against a `MessageStore` and adds page metadata
 * - `mock_store`: in-memory store for tests and benchmarks
 */

pub use self::executor::{MessageStore, PageMeta, SearchExecutor, SearchResult};
pub use self::plan::{Predicate, QueryPlan, SortField, SortOrder};
pub use self::request::SearchRequest;

pub mod executor;
pub mod mock_store;
pub mod plan;
pub mod request;
