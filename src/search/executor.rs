/*!
 * Search execution against a message store.
 *
 * The executor runs the two reads a plan needs (the requested page and
 * the total count under the same predicates) and packages them with
 * pagination metadata.
 */

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::plan::{Predicate, QueryPlan};
use super::request::SearchRequest;
use crate::database::models::MessageRecord;
use crate::errors::{MessageError, MessageResult, StoreOperation};

/// Read access the search pipeline needs from a message store
///
/// Implementations must evaluate `predicates` identically in both methods
/// so that the count describes the same result set the page is cut from.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Matching messages, ordered and sliced per the plan
    async fn fetch_page(&self, plan: &QueryPlan) -> anyhow::Result<Vec<MessageRecord>>;

    /// Number of messages matching the predicates, ignoring offset and limit
    async fn count_matching(&self, predicates: &[Predicate]) -> anyhow::Result<u64>;
}

#[async_trait]
impl<S: MessageStore + ?Sized> MessageStore for Arc<S> {
    async fn fetch_page(&self, plan: &QueryPlan) -> anyhow::Result<Vec<MessageRecord>> {
        (**self).fetch_page(plan).await
    }

    async fn count_matching(&self, predicates: &[Predicate]) -> anyhow::Result<u64> {
        (**self).count_matching(predicates).await
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Messages matching the filters across all pages
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    /// `ceil(total / limit)`, zero when nothing matched
    pub total_pages: u64,
}

impl PageMeta {
    pub fn new(total: u64, page: u64, limit: u64) -> Self {
        let total_pages = if total == 0 || limit == 0 {
            0
        } else {
            total.div_ceil(limit)
        };

        Self {
            total,
            page,
            limit,
            total_pages,
        }
    }
}

/// One page of search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub items: Vec<MessageRecord>,
    pub meta: PageMeta,
}

/// Runs query plans against a store
#[derive(Debug, Clone)]
pub struct SearchExecutor<S> {
    store: S,
}

impl<S: MessageStore> SearchExecutor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validate a request and run it
    ///
    /// Validation failures are returned before the store is touched.
    pub async fn search(&self, request: &SearchRequest) -> MessageResult<SearchResult> {
        let plan = QueryPlan::build(request)?;
        self.execute(&plan).await
    }

    /// Run an already validated plan
    pub async fn execute(&self, plan: &QueryPlan) -> MessageResult<SearchResult> {
        // Issued back to back; a write landing in between may skew total by a row
        let items = self
            .store
            .fetch_page(plan)
            .await
            .map_err(|e| MessageError::store(StoreOperation::Items, e))?;

        let total = self
            .store
            .count_matching(&plan.predicates)
            .await
            .map_err(|e| MessageError::store(StoreOperation::Count, e))?;

        debug!(
            "Search returned {} item(s) of {} on page {}",
            items.len(),
            total,
            plan.page
        );

        Ok(SearchResult {
            items,
            meta: PageMeta::new(total, plan.page, plan.limit),
        })
    }
}
