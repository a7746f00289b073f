/*!
 * SQL rendering of query plans.
 *
 * Predicates become `?` placeholders with bound values; sort columns and
 * directions come from fixed enum lookups, so no request text is ever
 * spliced into the SQL string.
 */

use rusqlite::types::Value;

use super::connection::FOLD_CASE_FN;
use crate::search::{Predicate, QueryPlan};

/// A WHERE clause and the values for its placeholders, in order
#[derive(Debug, Clone, PartialEq)]
pub struct SqlFilter {
    /// Either empty or ` WHERE ...` with a leading space
    pub clause: String,
    pub params: Vec<Value>,
}

/// Render predicates as an AND-joined WHERE clause
pub fn render_filter(predicates: &[Predicate]) -> SqlFilter {
    let mut conditions = Vec::with_capacity(predicates.len());
    let mut params = Vec::with_capacity(predicates.len());

    for predicate in predicates {
        match predicate {
            Predicate::StatusEquals(status) => {
                conditions.push("status = ?".to_string());
                params.push(Value::Text(status.as_str().to_string()));
            }
            Predicate::TextContains(needle) => {
                conditions.push(format!("{}(message) LIKE ? ESCAPE '\\'", FOLD_CASE_FN));
                params.push(Value::Text(format!(
                    "%{}%",
                    like_escape(&needle.to_lowercase())
                )));
            }
        }
    }

    let clause = if conditions.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", conditions.join(" AND "))
    };

    SqlFilter { clause, params }
}

/// Render the ORDER BY clause; the row id breaks ties in the same direction
pub fn render_order(plan: &QueryPlan) -> String {
    format!(
        " ORDER BY {column} {dir}, id {dir}",
        column = plan.sort_field.column(),
        dir = plan.sort_order.keyword()
    )
}

/// Escape LIKE wildcards so the term matches literally
pub fn like_escape(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
