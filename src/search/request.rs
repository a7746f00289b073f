/*!
 * Search request as supplied by callers.
 *
 * Every field is optional and kept in its raw form; `QueryPlan::build`
 * validates it and applies the defaults.
 */

use serde::{Deserialize, Serialize};

/// Page used when the request doesn't name one
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the request doesn't name one
pub const DEFAULT_LIMIT: i64 = 10;

/// Sort field used when the request doesn't name one
pub const DEFAULT_SORT_BY: &str = "createdAt";

/// Sort direction used when the request doesn't name one
pub const DEFAULT_SORT_ORDER: &str = "DESC";

/// Filter, sort and pagination parameters for one search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    /// Case-insensitive substring of the message text
    pub query: Option<String>,
    /// Exact status filter (`active`, `pending`, `spam`, `deleted`)
    pub status: Option<String>,
    /// `createdAt`, `updatedAt` or `message`
    pub sort_by: Option<String>,
    /// `ASC` or `DESC`, any case
    pub sort_order: Option<String>,
    /// 1-based page number
    pub page: Option<i64>,
    /// Page size
    pub limit: Option<i64>,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn sort_by(mut self, field: impl Into<String>) -> Self {
        self.sort_by = Some(field.into());
        self
    }

    pub fn sort_order(mut self, order: impl Into<String>) -> Self {
        self.sort_order = Some(order.into());
        self
    }

    pub fn page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}
