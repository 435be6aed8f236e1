//! Plain-text rendering of history query results.

use crate::types::history::VisitRecord;

/// Fixed response when the query matched no rows.
pub const NO_RESULTS_MESSAGE: &str = "No history entries found.";

/// Line separating consecutive records in the output block.
const RECORD_DELIMITER: &str = "---";

/// Renders the result rows as a delimited text block, preserving input
/// order (most recent first, as established by the query).
pub fn format_records(records: &[VisitRecord]) -> String {
    if records.is_empty() {
        return NO_RESULTS_MESSAGE.to_string();
    }

    let blocks: Vec<String> = records
        .iter()
        .map(|record| {
            format!(
                "Title: {}\nURL: {}\nVisit count: {}",
                record.title.as_deref().unwrap_or("None"),
                record.url,
                record.visit_count
            )
        })
        .collect();
    blocks.join(&format!("\n{}\n", RECORD_DELIMITER))
}
