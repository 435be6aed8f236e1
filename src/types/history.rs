use serde::{Deserialize, Serialize};

/// Default page size applied when the caller does not supply `limit`.
pub const DEFAULT_LIMIT: u32 = 30;

/// Filter criteria for a history query, deserialized from the `history`
/// tool's `arguments` object. All fields are optional except pagination,
/// which falls back to `limit = 30`, `offset = 0`.
///
/// Pagination and visit-count fields are unsigned so that negative input
/// is rejected during deserialization instead of reaching the query.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HistoryFilter {
    /// Whitespace-separated keywords; each must substring-match the title
    /// or the URL (case-insensitive).
    pub query: Option<String>,
    /// Lower bound on visit time. Parsed leniently; an unparseable string
    /// is logged and ignored.
    pub start_date: Option<String>,
    /// Upper bound on visit time, same parsing rules as `start_date`.
    pub end_date: Option<String>,
    pub min_visit_count: Option<u32>,
    pub max_visit_count: Option<u32>,
    pub limit: u32,
    pub offset: u32,
}

impl Default for HistoryFilter {
    fn default() -> Self {
        Self {
            query: None,
            start_date: None,
            end_date: None,
            min_visit_count: None,
            max_visit_count: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// One result row: a URL's aggregate metadata joined with a single visit.
///
/// `visit_time` is in the store-native WebKit epoch (microseconds since
/// 1601-01-01 UTC). `title` is nullable in the store.
#[derive(Debug, Clone, Serialize)]
pub struct VisitRecord {
    pub url: String,
    pub title: Option<String>,
    pub visit_count: i64,
    pub visit_time: i64,
}
