/*!
 * Mock message store for testing.
 *
 * This module provides an in-memory store that simulates different behaviors:
 * - `MockStore::working(records)` - Evaluates plans over a fixed record set
 * - `MockStore::failing_items()` - The page read always fails
 * - `MockStore::failing_count()` - The count read always fails
 *
 * Every store counts the reads it receives, so tests can assert that
 * invalid requests never reach it.
 */

use anyhow::anyhow;
use async_trait::async_trait;
use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::executor::MessageStore;
use super::plan::{Predicate, QueryPlan, SortField, SortOrder};
use crate::database::models::MessageRecord;

/// Behavior mode for the mock store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    /// Answers both reads from the record set
    Working,
    /// Fails the page read
    FailingItems,
    /// Fails the count read
    FailingCount,
}

/// In-memory store for exercising the search pipeline without SQLite
#[derive(Debug)]
pub struct MockStore {
    behavior: MockBehavior,
    records: Vec<MessageRecord>,
    fetch_calls: AtomicUsize,
    count_calls: AtomicUsize,
}

impl MockStore {
    /// Create a new mock store with the specified behavior
    pub fn new(behavior: MockBehavior, records: Vec<MessageRecord>) -> Self {
        Self {
            behavior,
            records,
            fetch_calls: AtomicUsize::new(0),
            count_calls: AtomicUsize::new(0),
        }
    }

    pub fn working(records: Vec<MessageRecord>) -> Self {
        Self::new(MockBehavior::Working, records)
    }

    pub fn failing_items() -> Self {
        Self::new(MockBehavior::FailingItems, Vec::new())
    }

    pub fn failing_count() -> Self {
        Self::new(MockBehavior::FailingCount, Vec::new())
    }

    /// Number of page reads received
    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    /// Number of count reads received
    pub fn count_calls(&self) -> usize {
        self.count_calls.load(Ordering::SeqCst)
    }

    /// Total reads received
    pub fn total_reads(&self) -> usize {
        self.fetch_calls() + self.count_calls()
    }

    fn matching<'a>(&'a self, predicates: &'a [Predicate]) -> impl Iterator<Item = &'a MessageRecord> {
        self.records
            .iter()
            .filter(move |record| predicates.iter().all(|p| matches_predicate(record, p)))
    }
}

fn matches_predicate(record: &MessageRecord, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::StatusEquals(status) => record.status == *status,
        Predicate::TextContains(needle) => record
            .message
            .to_lowercase()
            .contains(&needle.to_lowercase()),
    }
}

fn compare(a: &MessageRecord, b: &MessageRecord, field: SortField) -> CmpOrdering {
    let key = match field {
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        SortField::Message => a.message.cmp(&b.message),
    };
    key.then(a.id.cmp(&b.id))
}

#[async_trait]
impl MessageStore for MockStore {
    async fn fetch_page(&self, plan: &QueryPlan) -> anyhow::Result<Vec<MessageRecord>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);

        if self.behavior == MockBehavior::FailingItems {
            return Err(anyhow!("mock store: items read failed"));
        }

        let mut rows: Vec<MessageRecord> = self.matching(&plan.predicates).cloned().collect();
        rows.sort_by(|a, b| {
            let ordering = compare(a, b, plan.sort_field);
            match plan.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        Ok(rows
            .into_iter()
            .skip(plan.offset as usize)
            .take(plan.limit as usize)
            .collect())
    }

    async fn count_matching(&self, predicates: &[Predicate]) -> anyhow::Result<u64> {
        self.count_calls.fetch_add(1, Ordering::SeqCst);

        if self.behavior == MockBehavior::FailingCount {
            return Err(anyhow!("mock store: count read failed"));
        }

        Ok(self.matching(predicates).count() as u64)
    }
}
