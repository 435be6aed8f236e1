//! Dynamic construction of the history query.
//!
//! Translates a [`HistoryFilter`] into one parameterized SQL statement.
//! Clauses are accumulated as `(text, bound values)` fragments in a fixed
//! order so the statement is deterministic for a given filter. User input is
//! only ever bound as parameters, never interpolated into the SQL text.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rusqlite::types::Value;
use tracing::warn;

use crate::types::history::HistoryFilter;

/// Offset between the Unix epoch and the WebKit/Chromium epoch
/// (1601-01-01 UTC), in milliseconds.
pub const WEBKIT_EPOCH_OFFSET_MS: i64 = 11_644_473_600_000;

/// Columns selected per row: URL metadata plus a single visit timestamp.
/// Hidden entries (redirect chains, keyword searches) are excluded.
const BASE_QUERY: &str = "SELECT urls.url, urls.title, urls.visit_count, visits.visit_time \
     FROM urls JOIN visits ON urls.id = visits.url \
     WHERE urls.hidden = 0";

/// A complete statement: SQL text plus its bound values, in bind order.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlStatement {
    pub text: String,
    pub params: Vec<Value>,
}

/// Builds the filtered history statement.
///
/// Clause order: keywords, start date, end date, min visit count, max visit
/// count, then `ORDER BY visit_time DESC LIMIT ? OFFSET ?`. Absent or empty
/// optional fields contribute no clause; pagination always applies.
pub fn build_query(filter: &HistoryFilter) -> SqlStatement {
    let mut clauses: Vec<String> = Vec::new();
    let mut params: Vec<Value> = Vec::new();

    if let Some(query) = &filter.query {
        for keyword in query.split_whitespace() {
            let pattern = format!("%{}%", keyword);
            clauses.push("(urls.title LIKE ? OR urls.url LIKE ?)".to_string());
            params.push(Value::Text(pattern.clone()));
            params.push(Value::Text(pattern));
        }
    }

    if let Some(raw) = &filter.start_date {
        match parse_date(raw) {
            Some(date) => {
                clauses.push("visits.visit_time >= ?".to_string());
                params.push(Value::Integer(to_webkit_time(date)));
            }
            None => warn!("ignoring unparseable start_date: {:?}", raw),
        }
    }

    if let Some(raw) = &filter.end_date {
        match parse_date(raw) {
            Some(date) => {
                clauses.push("visits.visit_time <= ?".to_string());
                params.push(Value::Integer(to_webkit_time(date)));
            }
            None => warn!("ignoring unparseable end_date: {:?}", raw),
        }
    }

    if let Some(min) = filter.min_visit_count {
        clauses.push("urls.visit_count >= ?".to_string());
        params.push(Value::Integer(i64::from(min)));
    }

    if let Some(max) = filter.max_visit_count {
        clauses.push("urls.visit_count <= ?".to_string());
        params.push(Value::Integer(i64::from(max)));
    }

    let mut text = String::from(BASE_QUERY);
    for clause in &clauses {
        text.push_str(" AND ");
        text.push_str(clause);
    }
    text.push_str(" ORDER BY visits.visit_time DESC LIMIT ? OFFSET ?");
    params.push(Value::Integer(i64::from(filter.limit)));
    params.push(Value::Integer(i64::from(filter.offset)));

    SqlStatement { text, params }
}

/// Converts a UTC instant to the store-native WebKit timestamp
/// (microseconds since 1601-01-01 UTC).
pub fn to_webkit_time(date: DateTime<Utc>) -> i64 {
    (date.timestamp_millis() + WEBKIT_EPOCH_OFFSET_MS) * 1000
}

/// Lenient date parsing: RFC 3339, `YYYY-MM-DD` (midnight UTC), or
/// `YYYY-MM-DD HH:MM:SS` (UTC). Returns `None` for anything else; callers
/// skip the filter rather than failing the request.
fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let input = raw.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(date) = DateTime::parse_from_rfc3339(input) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    if let Ok(date) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Some(date.and_utc());
    }
    None
}
