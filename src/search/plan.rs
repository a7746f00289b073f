/*!
 * Query plan construction.
 *
 * Turns a raw `SearchRequest` into a validated, store-agnostic plan:
 * the predicates to AND together, one ordering key with its direction,
 * and the offset/limit slice. Nothing here touches the store.
 */

use log::debug;
use std::fmt;

use super::request::{DEFAULT_LIMIT, DEFAULT_PAGE, DEFAULT_SORT_BY, DEFAULT_SORT_ORDER, SearchRequest};
use crate::database::models::MessageStatus;
use crate::errors::{MessageError, MessageResult};

/// Field a search can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    UpdatedAt,
    Message,
}

impl SortField {
    /// Every sortable field, in declaration order
    pub const ALL: [SortField; 3] = [SortField::CreatedAt, SortField::UpdatedAt, SortField::Message];

    /// Name accepted in requests
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "createdAt",
            SortField::UpdatedAt => "updatedAt",
            SortField::Message => "message",
        }
    }

    /// Column in the `messages` table
    pub fn column(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "created_at",
            SortField::UpdatedAt => "updated_at",
            SortField::Message => "message",
        }
    }

    /// Exact, case-sensitive lookup of a request value
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == value)
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// SQL keyword for this direction
    pub fn keyword(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    /// Case-insensitive lookup; the value is uppercased before comparison
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_uppercase().as_str() {
            "ASC" => Some(SortOrder::Asc),
            "DESC" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// A single filter condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// `status` equals the given value
    StatusEquals(MessageStatus),
    /// Message text contains the given string, ignoring case
    TextContains(String),
}

/// Validated search: predicates, ordering and slice bounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    /// Conditions combined with AND; empty matches every message
    pub predicates: Vec<Predicate>,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    /// 1-based page number
    pub page: u64,
    /// Rows per page, at least 1
    pub limit: u64,
    /// Rows to skip, `(page - 1) * limit`
    pub offset: u64,
}

impl QueryPlan {
    /// Validate a request and apply defaults
    ///
    /// Fails with `InvalidArgument` naming the first offending field.
    pub fn build(request: &SearchRequest) -> MessageResult<Self> {
        let sort_by = request.sort_by.as_deref().unwrap_or(DEFAULT_SORT_BY);
        let sort_field = SortField::parse(sort_by).ok_or_else(|| {
            MessageError::invalid(
                "sortBy",
                format!(
                    "unsupported sort field '{}', expected one of createdAt, updatedAt, message",
                    sort_by
                ),
            )
        })?;

        let sort_order_raw = request.sort_order.as_deref().unwrap_or(DEFAULT_SORT_ORDER);
        let sort_order = SortOrder::parse(sort_order_raw).ok_or_else(|| {
            MessageError::invalid(
                "sortOrder",
                format!("unsupported sort order '{}', expected ASC or DESC", sort_order_raw),
            )
        })?;

        let mut predicates = Vec::new();

        if let Some(query) = request.query.as_deref() {
            if !query.is_empty() {
                predicates.push(Predicate::TextContains(query.to_string()));
            }
        }

        if let Some(status) = request.status.as_deref() {
            let status: MessageStatus = status.parse().map_err(|_| {
                MessageError::invalid(
                    "status",
                    format!(
                        "unsupported status '{}', expected one of active, pending, spam, deleted",
                        status
                    ),
                )
            })?;
            predicates.push(Predicate::StatusEquals(status));
        }

        let page = positive("page", request.page.unwrap_or(DEFAULT_PAGE))?;
        let limit = positive("limit", request.limit.unwrap_or(DEFAULT_LIMIT))?;

        let offset = (page - 1)
            .checked_mul(limit)
            .filter(|offset| *offset <= i64::MAX as u64)
            .ok_or_else(|| {
                MessageError::invalid("page", format!("page {} is out of range for limit {}", page, limit))
            })?;

        let plan = Self {
            predicates,
            sort_field,
            sort_order,
            page,
            limit,
            offset,
        };

        debug!(
            "Built query plan: {} predicate(s), order by {} {}, offset {}, limit {}",
            plan.predicates.len(),
            plan.sort_field,
            plan.sort_order,
            plan.offset,
            plan.limit
        );

        Ok(plan)
    }
}

fn positive(field: &'static str, value: i64) -> MessageResult<u64> {
    if value < 1 {
        return Err(MessageError::invalid(
            field,
            format!("must be at least 1, got {}", value),
        ));
    }
    Ok(value as u64)
}
